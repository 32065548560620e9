use crate::cards::Card;
use crate::config::SessionConfig;
use crate::engine::{Command, VideoPokerEngine};
use crate::events::{Event, Presenter};
use crate::game::{Game, Phase};
use crate::hand::HAND_SIZE;
use crate::variant::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    // Game commands
    DealOrDraw,
    ToggleHold(usize),
    SetBet(u8),
    SelectVariant(Variant),
    Quit,
    // Variant picker
    ToggleMenu,
    MenuNext,
    MenuPrev,
    MenuApply,
    MenuCancel,
    // Overlays
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
}

impl From<Command> for InputAction {
    fn from(command: Command) -> Self {
        match command {
            Command::DealOrDraw => InputAction::DealOrDraw,
            Command::ToggleHold(slot) => InputAction::ToggleHold(slot),
            Command::SetBet(digit) => InputAction::SetBet(digit),
            Command::ChangeVariant(variant) => InputAction::SelectVariant(variant),
            Command::Quit => InputAction::Quit,
        }
    }
}

/// Everything the screen shows, kept current by replaying game events.
#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    pub menu_index: usize,
    cards: Option<[Card; HAND_SIZE]>,
    held: [bool; HAND_SIZE],
    messages: Vec<String>,
    hand_name: String,
    score: u64,
    button: Phase,
    game_name: String,
    finished: bool,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Game::new(SessionConfig::default()))
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;

    pub fn new(game: Game) -> Self {
        let mut app = Self {
            scene: Scene::Table,
            menu_index: 0,
            cards: None,
            held: [false; HAND_SIZE],
            messages: Vec::new(),
            hand_name: String::new(),
            score: game.bankroll(),
            button: game.phase(),
            game_name: game.variant().name().to_string(),
            finished: false,
            help_open: false,
            history_open: false,
            history_offset: 0,
            game,
        };
        let banner = app.game.start();
        app.apply(&banner);
        app
    }

    pub fn cards(&self) -> Option<&[Card; HAND_SIZE]> {
        self.cards.as_ref()
    }

    pub fn held(&self) -> [bool; HAND_SIZE] {
        self.held
    }

    /// Messages from the most recent transition, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn hand_name(&self) -> &str {
        &self.hand_name
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn button(&self) -> Phase {
        self.button
    }

    pub fn game_name(&self) -> &str {
        &self.game_name
    }

    /// The session reached Quit or Bankrupt; the next key exits.
    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    /// Returns true when the action changed something.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::DealOrDraw => self.command(Command::DealOrDraw),
            InputAction::ToggleHold(slot) => self.command(Command::ToggleHold(slot)),
            InputAction::SetBet(digit) => self.command(Command::SetBet(digit)),
            InputAction::SelectVariant(variant) => {
                self.scene = Scene::Table;
                self.command(Command::ChangeVariant(variant))
            }
            InputAction::Quit => self.command(Command::Quit),
            InputAction::ToggleMenu => {
                self.toggle_menu();
                true
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuApply => self.scene == Scene::Menu && self.apply_menu(),
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history().len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
        }
    }

    fn command(&mut self, command: Command) -> bool {
        if self.finished {
            return false;
        }
        let events = self.game.dispatch(command);
        self.apply(&events);
        !events.is_empty()
    }

    fn apply(&mut self, events: &[Event]) {
        if events.iter().any(|e| matches!(e, Event::Message(_))) {
            self.messages.clear();
        }
        self.present(events);
        if self.game.status().is_terminal() {
            self.finished = true;
            self.history_offset = 0;
        }
    }
}

impl Presenter for AppState {
    fn render_hand(&mut self, cards: &[Card; HAND_SIZE], held: &[bool; HAND_SIZE]) {
        self.cards = Some(*cards);
        self.held = *held;
    }

    fn render_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }

    fn render_hand_name(&mut self, text: &str) {
        self.hand_name = text.to_string();
    }

    fn render_score(&mut self, score: u64) {
        self.score = score;
    }

    fn render_button_label(&mut self, phase: Phase) {
        self.button = phase;
    }

    fn render_game_name(&mut self, text: &str) {
        self.game_name = text.to_string();
    }
}
