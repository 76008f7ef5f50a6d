//! Rendering components for the terminal player.
//!
//! This module contains the canvas renderer, the progress/status line, and
//! the color theme.

mod canvas;
mod progress;
mod theme;

pub use canvas::{draw_scene, guide_points, ring_segments, to_canvas, TerminalRenderer};
pub use progress::{build_progress_bar_chars, format_duration, status_line};
pub use theme::Theme;
