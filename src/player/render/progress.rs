//! Progress bar and status line for the player.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::player::render::theme::Theme;
use crate::player::session::Frame;

/// Format timeline milliseconds as MM:SS.
///
/// Fractional seconds are truncated; negative input formats as zero.
pub fn format_duration(millis: f64) -> String {
    let total_secs = (millis / 1_000.0) as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `progress` - Fraction played (clamped to `0.0..=1.0`)
///
/// # Returns
/// A tuple of (bar_chars, filled_count). The playhead `⏺` sits at the first
/// unfilled position.
pub fn build_progress_bar_chars(bar_width: usize, progress: f64) -> (Vec<char>, usize) {
    let filled = (bar_width as f64 * progress.clamp(0.0, 1.0)) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Build the one-line status bar: state icon, speed, progress, and time.
pub fn status_line(frame: &Frame, width: u16, theme: &Theme) -> Line<'static> {
    let icon = if frame.playing { "⏸ " } else { "▶ " };
    let time = format!(
        " {}/{}",
        format_duration(frame.time),
        format_duration(frame.duration)
    );
    let speed = format!("{:.1}x ", frame.speed);
    let hint = if frame.completed {
        " done · space: replay · q: quit"
    } else {
        " space: play/pause · q: quit"
    };

    let icon = Span::styled(format!(" {icon}"), theme.text_style());
    let speed = Span::styled(speed, theme.text_secondary_style());
    let time = Span::styled(time, theme.text_style());
    let hint = Span::styled(hint, theme.text_secondary_style());

    let chrome = icon.width() + speed.width() + time.width() + hint.width();
    let bar_width = (width as usize).saturating_sub(chrome);
    let progress = if frame.duration > 0.0 {
        frame.time / frame.duration
    } else {
        1.0
    };
    let (bar, filled) = build_progress_bar_chars(bar_width, progress);

    let played: String = bar.iter().take(filled).collect();
    let rest: String = bar.iter().skip(filled).collect();

    Line::from(vec![
        icon,
        speed,
        Span::styled(played, Style::default().fg(theme.accent)),
        Span::styled(rest, theme.text_secondary_style()),
        time,
        hint,
    ])
}
