//! External playback control signals.

use crate::player::state::PlaybackState;

/// Named control signals a front end can send to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    /// Pause when playing, play once through when paused
    PlayPause,
}

impl ControlSignal {
    /// External name of the signal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlayPause => "playPause",
        }
    }

    /// Look up a signal by its external name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "playPause" => Some(Self::PlayPause),
            _ => None,
        }
    }

    /// Apply the signal to the playback cursor.
    pub fn apply(self, state: &mut PlaybackState) {
        match self {
            Self::PlayPause => state.toggle_pause(),
        }
    }
}

/// Apply a signal received by name. Unknown names are logged and ignored.
pub fn dispatch(name: &str, state: &mut PlaybackState) -> bool {
    match ControlSignal::from_name(name) {
        Some(signal) => {
            signal.apply(state);
            tracing::debug!(signal = name, playing = state.playing, "Applied control signal");
            true
        }
        None => {
            tracing::debug!(signal = name, "Ignoring unknown control signal");
            false
        }
    }
}
