//! Player state management
//!
//! Contains the playback cursor and the shared types used across player
//! modules.

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the main
/// loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Playback cursor over a timeline.
///
/// Time is in timeline units (milliseconds). Playback starts paused at 0.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Whether the cursor is advancing
    pub playing: bool,
    /// Current cursor position
    pub current_time: f64,
    /// Time of the last keyframe in the timeline
    pub duration: f64,
    /// Speed multiplier (1.0 = real time)
    pub speed: f64,
    /// Play-throughs left before stopping, including the current one
    pub plays_remaining: u32,
    /// Set when the last play-through reached the end
    pub completed: bool,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PlaybackState {
    /// Create a paused cursor at time 0.
    ///
    /// # Arguments
    /// * `duration` - Timeline duration (negative values are treated as 0)
    /// * `speed` - Speed multiplier
    pub fn new(duration: f64, speed: f64) -> Self {
        Self {
            playing: false,
            current_time: 0.0,
            duration: duration.max(0.0),
            speed,
            plays_remaining: 0,
            completed: false,
            needs_render: true,
        }
    }

    /// Start playing `count` times through from the current position.
    ///
    /// A finished timeline restarts from the beginning.
    pub fn play(&mut self, count: u32) {
        if self.completed || self.current_time >= self.duration {
            self.current_time = 0.0;
            self.completed = false;
        }
        self.playing = true;
        self.plays_remaining = count.max(1);
        self.needs_render = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
        self.needs_render = true;
    }

    /// Pause when playing; otherwise play once through from here.
    pub fn toggle_pause(&mut self) {
        if self.playing {
            self.pause();
        } else {
            self.play(1);
        }
    }

    /// Advance the cursor by `elapsed` wall milliseconds.
    ///
    /// Returns `true` when this tick finished the last play-through.
    pub fn tick(&mut self, elapsed: f64) -> bool {
        if !self.playing {
            return false;
        }

        self.current_time += elapsed * self.speed;
        self.needs_render = true;

        if self.current_time < self.duration {
            return false;
        }

        self.plays_remaining = self.plays_remaining.saturating_sub(1);
        if self.plays_remaining > 0 {
            self.current_time = 0.0;
            return false;
        }

        self.current_time = self.duration;
        self.playing = false;
        self.completed = true;
        true
    }

    /// Fraction of the timeline played, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Increase playback speed (max 16x).
    pub fn speed_up(&mut self) {
        self.speed = (self.speed * 1.5).min(16.0);
        self.needs_render = true;
    }

    /// Decrease playback speed (min 0.1x).
    pub fn speed_down(&mut self) {
        self.speed = (self.speed / 1.5).max(0.1);
        self.needs_render = true;
    }
}
