//! Keyboard input handling for the player.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::control::ControlSignal;
use crate::player::session::Player;
use crate::player::state::InputResult;

/// Handle a keyboard event.
///
/// - `space`: play/pause
/// - `+` / `-`: speed up / slow down
/// - `q`, `Esc`, `Ctrl+C`: quit
pub fn handle_key_event(key: KeyEvent, player: &mut Player) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Playback ===
        KeyCode::Char(' ') => {
            player.signal(ControlSignal::PlayPause);
            InputResult::Continue
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            player.state_mut().speed_up();
            InputResult::Continue
        }
        KeyCode::Char('-') => {
            player.state_mut().speed_down();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}
