//! Mouse input handling for the player.
//!
//! A left click anywhere on the canvas sends the play/pause signal.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::player::control::ControlSignal;
use crate::player::session::Player;
use crate::player::state::InputResult;

/// Handle a mouse event.
pub fn handle_mouse_event(mouse: MouseEvent, player: &mut Player) -> InputResult {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        player.signal(ControlSignal::PlayPause);
    }

    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::Timeline;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn left_click_toggles_playback() {
        let mut player = Player::new(Timeline::new(), 1.0);

        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left)), &mut player);
        assert!(player.state().playing);
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let mut player = Player::new(Timeline::new(), 1.0);

        handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right)), &mut player);
        handle_mouse_event(mouse(MouseEventKind::Moved), &mut player);
        assert!(!player.state().playing);
    }
}
