use crate::keymap::command_for_key;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Draw, read a key, repeat. Returns on the first key pressed after the
/// session has ended.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(app, key.code) {
                break;
            }
        }
    }
    Ok(())
}

/// Apply one key press; returns true when the loop should exit.
pub fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.finished() {
        return true;
    }
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    // 'H' selects a variant, so history is lowercase only
    if matches!(code, KeyCode::Char('h')) {
        let _ = app.handle_input(InputAction::ToggleHistory);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }
    if app.history_open() {
        match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::HistoryUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::HistoryDown);
            }
            KeyCode::Esc => {
                let _ = app.handle_input(InputAction::ToggleHistory);
            }
            _ => {}
        }
        return false;
    }

    match app.scene {
        Scene::Menu => match code {
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::MenuPrev);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::MenuNext);
            }
            KeyCode::Enter => {
                let _ = app.handle_input(InputAction::MenuApply);
            }
            KeyCode::Esc | KeyCode::Char('m') => {
                let _ = app.handle_input(InputAction::MenuCancel);
            }
            KeyCode::Char('q') => {
                let _ = app.handle_input(InputAction::Quit);
            }
            _ => {}
        },
        Scene::Table => {
            let key = match code {
                KeyCode::Char('m') => {
                    let _ = app.handle_input(InputAction::ToggleMenu);
                    return false;
                }
                KeyCode::Enter => '\n',
                KeyCode::Char(c) => c,
                _ => return false,
            };
            if let Some(command) = command_for_key(key) {
                let _ = app.handle_input(command.into());
            }
        }
    }
    false
}
