use crate::keymap::variant_key;
use crate::variant::Variant;

use super::{AppState, InputAction, Scene};

impl AppState {
    /// One line per variant for the picker, marking the active one.
    pub fn menu_items_display(&self) -> Vec<String> {
        Variant::ALL
            .iter()
            .map(|&v| {
                let active = if v == self.game.variant() { "  (playing)" } else { "" };
                format!("[{}] {}{active}", variant_key(v), v.name())
            })
            .collect()
    }

    pub fn menu_selection(&self) -> Variant {
        Variant::ALL[self.menu_index % Variant::ALL.len()]
    }

    pub fn toggle_menu(&mut self) {
        match self.scene {
            Scene::Menu => self.cancel_menu(),
            _ => self.open_menu(),
        }
    }

    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = Variant::ALL.iter().position(|&v| v == self.game.variant()).unwrap_or(0);
        self.scene = Scene::Menu;
    }

    /// Switch to the highlighted variant. Returns false once the session is over.
    pub fn apply_menu(&mut self) -> bool {
        let variant = self.menu_selection();
        self.handle_input(InputAction::SelectVariant(variant))
    }

    pub fn cancel_menu(&mut self) {
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % Variant::ALL.len();
    }

    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + Variant::ALL.len() - 1) % Variant::ALL.len();
    }
}
