//! Terminal front end for the player.
//!
//! Sets up the terminal, binds a [`TerminalRenderer`] to a [`Player`], and
//! runs the per-frame tick loop until the user quits.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::input::handle_event;
use super::render::TerminalRenderer;
use super::session::Player;
use super::state::InputResult;
use crate::config::Config;
use crate::timeline::Timeline;

type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// How a playback session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The user quit after the timeline played to the end
    Finished,
    /// The user quit before the end
    Interrupted,
}

/// Runs a restore action when dropped, so early returns and panics after
/// terminal setup still leave the terminal usable.
struct RestoreGuard<F: FnMut()> {
    restore: Option<F>,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }

    /// Drop without running the restore action.
    fn disarm(mut self) {
        self.restore = None;
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(mut restore) = self.restore.take() {
            restore();
        }
    }
}

fn init_terminal() -> Result<(TuiTerminal, RestoreGuard<fn()>)> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let guard = RestoreGuard::new(restore_terminal_quietly as fn());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok((terminal, guard))
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    Ok(())
}

fn restore_terminal_quietly() {
    if let Err(e) = restore_terminal() {
        tracing::warn!(error = %e, "Failed to restore terminal");
    }
}

/// Frame interval for the configured frame rate.
pub fn frame_interval(fps: u32) -> Duration {
    Duration::from_micros(1_000_000 / u64::from(fps.max(1)))
}

/// Play a timeline in the terminal until the user quits.
///
/// Playback starts paused; space or a left click starts it.
pub fn play_timeline(timeline: Timeline, config: &Config) -> Result<PlaybackResult> {
    let mut player = Player::new(timeline, config.playback.speed);
    tracing::info!(
        tracks = player.timeline().track_count(),
        duration = player.state().duration,
        "Starting playback"
    );

    let (terminal, guard) = init_terminal()?;
    player.attach(Box::new(TerminalRenderer::new(terminal, config.display)));

    let result = run_loop(&mut player, frame_interval(config.playback.fps));

    player.detach();
    guard.disarm();
    restore_terminal()?;
    result
}

fn run_loop(player: &mut Player, interval: Duration) -> Result<PlaybackResult> {
    let mut last_tick = Instant::now();
    player.render()?;

    loop {
        let timeout = interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? && handle_event(event::read()?, player) == InputResult::Quit {
            break;
        }

        let now = Instant::now();
        let elapsed = now.duration_since(last_tick).as_secs_f64() * 1_000.0;
        last_tick = now;

        player.tick(elapsed);
        player.render()?;
    }

    if player.state().completed {
        Ok(PlaybackResult::Finished)
    } else {
        Ok(PlaybackResult::Interrupted)
    }
}
