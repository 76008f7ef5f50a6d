//! Input handling for the player.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::handle_mouse_event;

use crossterm::event::Event;

use crate::player::session::Player;
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, player: &mut Player) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, player),
        Event::Mouse(mouse) => handle_mouse_event(mouse, player),
        Event::Resize(_, _) => {
            player.request_render();
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
