//! Key bindings for the calculator screen.

use crate::app::App;
use crate::core::constants::WIN_BATCHES;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Win(u32),
    ToggleAuto,
    Reset,
    NextItem,
    PrevItem,
    BumpItem,
    NextSetting,
    PrevSetting,
    EditSetting,
    EditChar(char),
    EditBackspace,
    CommitEdit,
    CancelEdit,
    Quit,
}

/// Maps a key to an action. While a setting is being edited, keys feed the
/// editor instead of the main bindings.
pub fn map_key(key: KeyEvent, editing: bool) -> Option<InputAction> {
    if editing {
        return match key.code {
            KeyCode::Enter => Some(InputAction::CommitEdit),
            KeyCode::Esc => Some(InputAction::CancelEdit),
            KeyCode::Backspace => Some(InputAction::EditBackspace),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' || c == '.' => {
                Some(InputAction::EditChar(c))
            }
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputAction::Quit),
        KeyCode::Char('w') | KeyCode::Char(' ') => Some(InputAction::Win(WIN_BATCHES[0])),
        KeyCode::Char('1') => Some(InputAction::Win(WIN_BATCHES[1])),
        KeyCode::Char('2') => Some(InputAction::Win(WIN_BATCHES[2])),
        KeyCode::Char('3') => Some(InputAction::Win(WIN_BATCHES[3])),
        KeyCode::Char('4') => Some(InputAction::Win(WIN_BATCHES[4])),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(InputAction::ToggleAuto),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputAction::Reset),
        KeyCode::Tab => Some(InputAction::NextItem),
        KeyCode::BackTab => Some(InputAction::PrevItem),
        KeyCode::Char('+') => Some(InputAction::BumpItem),
        KeyCode::Down => Some(InputAction::NextSetting),
        KeyCode::Up => Some(InputAction::PrevSetting),
        KeyCode::Char('e') | KeyCode::Enter => Some(InputAction::EditSetting),
        _ => None,
    }
}

pub fn apply_action(app: &mut App, action: InputAction, now: Instant) {
    match action {
        InputAction::Win(count) => {
            app.win(count);
        }
        InputAction::ToggleAuto => app.toggle_auto(now),
        InputAction::Reset => app.reset(),
        InputAction::NextItem => app.select_next_item(),
        InputAction::PrevItem => app.select_prev_item(),
        InputAction::BumpItem => app.bump_selected(),
        InputAction::NextSetting => app.select_setting(1),
        InputAction::PrevSetting => app.select_setting(-1),
        InputAction::EditSetting => app.begin_setting_edit(),
        InputAction::EditChar(c) => {
            if let Some(buffer) = app.setting_edit.as_mut() {
                buffer.push(c);
            }
        }
        InputAction::EditBackspace => {
            if let Some(buffer) = app.setting_edit.as_mut() {
                buffer.pop();
            }
        }
        InputAction::CommitEdit => app.commit_setting_edit(),
        InputAction::CancelEdit => app.cancel_setting_edit(),
        InputAction::Quit => {
            app.auto.stop();
            app.should_quit = true;
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if let Some(action) = map_key(key, app.is_editing()) {
        apply_action(app, action, now);
    }
}
