//! Playback sessions and the renderer capability.
//!
//! A [`Player`] owns a timeline and its cursor. Renderers are bound per
//! session and only ever see read-only state snapshots.

use anyhow::Result;

use crate::player::control::ControlSignal;
use crate::player::state::PlaybackState;
use crate::timeline::{EntityState, Timeline, TrackId};

/// One entity that should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleEntity {
    pub track: TrackId,
    /// Position of the track in the timeline (stable color index)
    pub index: usize,
    pub state: EntityState,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub time: f64,
    pub duration: f64,
    pub playing: bool,
    pub completed: bool,
    pub speed: f64,
    pub entities: Vec<VisibleEntity>,
}

/// Draws frames.
///
/// Each frame is one `begin_frame`, one `draw_entity` per visible entity in
/// track order, then `end_frame`.
pub trait Renderer {
    fn begin_frame(&mut self, _frame: &Frame) -> Result<()> {
        Ok(())
    }

    fn draw_entity(&mut self, entity: &VisibleEntity) -> Result<()>;

    fn end_frame(&mut self, _frame: &Frame) -> Result<()> {
        Ok(())
    }
}

/// A timeline bound to a playback cursor and, optionally, a renderer.
pub struct Player {
    timeline: Timeline,
    state: PlaybackState,
    renderer: Option<Box<dyn Renderer>>,
}

impl Player {
    pub fn new(timeline: Timeline, speed: f64) -> Self {
        let state = PlaybackState::new(timeline.duration(), speed);
        Self {
            timeline,
            state,
            renderer: None,
        }
    }

    /// Bind a renderer for this session, replacing any previous one.
    pub fn attach(&mut self, renderer: Box<dyn Renderer>) {
        self.renderer = Some(renderer);
        self.state.needs_render = true;
    }

    /// Unbind the renderer, returning it.
    pub fn detach(&mut self) -> Option<Box<dyn Renderer>> {
        self.renderer.take()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PlaybackState {
        &mut self.state
    }

    pub fn signal(&mut self, signal: ControlSignal) {
        signal.apply(&mut self.state);
    }

    /// Advance the cursor. Returns `true` when playback just completed.
    pub fn tick(&mut self, elapsed: f64) -> bool {
        let finished = self.state.tick(elapsed);
        if finished {
            tracing::info!("Animation complete");
        }
        finished
    }

    /// Snapshot of every visible entity at the cursor.
    pub fn frame(&self) -> Frame {
        let entities = self
            .timeline
            .tracks()
            .iter()
            .enumerate()
            .filter_map(|(index, track)| {
                let state = track.state_at(self.state.current_time)?;
                state.should_render.then_some(VisibleEntity {
                    track: track.id(),
                    index,
                    state,
                })
            })
            .collect();

        Frame {
            time: self.state.current_time,
            duration: self.state.duration,
            playing: self.state.playing,
            completed: self.state.completed,
            speed: self.state.speed,
            entities,
        }
    }

    /// Draw the current frame if anything changed and a renderer is bound.
    ///
    /// Returns whether a frame was drawn.
    pub fn render(&mut self) -> Result<bool> {
        if !self.state.needs_render {
            return Ok(false);
        }
        let frame = self.frame();
        match self.renderer.as_mut() {
            Some(renderer) => {
                renderer.begin_frame(&frame)?;
                for entity in &frame.entities {
                    renderer.draw_entity(entity)?;
                }
                renderer.end_frame(&frame)?;
                self.state.needs_render = false;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Force a redraw on the next [`Player::render`] call.
    pub fn request_render(&mut self) {
        self.state.needs_render = true;
    }
}
