//! Colors and styles for the player.

use ratatui::style::{Color, Modifier, Style};

/// Track colors, cycled by track index.
const TRACK_PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::LightBlue,
    Color::LightRed,
];

/// Theme configuration for the player.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for the played part of the progress bar
    pub accent: Color,
    /// Color of the dotted guide circle drawn under each marker ring
    pub guide: Color,
    /// Colors assigned to tracks
    pub tracks: Vec<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Gray text with a green accent, using standard ANSI colors.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            guide: Color::DarkGray,
            tracks: TRACK_PALETTE.to_vec(),
        }
    }

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for track labels.
    pub fn label_style(&self, index: usize) -> Style {
        Style::default()
            .fg(self.track_color(index))
            .add_modifier(Modifier::BOLD)
    }

    /// Color of the track at `index`. Wraps around the palette.
    pub fn track_color(&self, index: usize) -> Color {
        if self.tracks.is_empty() {
            return self.text_primary;
        }
        self.tracks[index % self.tracks.len()]
    }
}
