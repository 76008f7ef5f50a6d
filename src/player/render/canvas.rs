//! Canvas renderer for the terminal player.
//!
//! Entities are drawn in display space: the canvas spans the configured
//! display size, with the y axis flipped so that display `y = 0` is the top
//! row.

use std::f64::consts::TAU;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use super::progress::status_line;
use super::theme::Theme;
use crate::config::Dimensions;
use crate::player::session::{Frame, Renderer, VisibleEntity};
use crate::timeline::EntityState;

/// Number of dots on the dashed guide circle.
const GUIDE_DOTS: usize = 24;

/// Map a display-space point to canvas coordinates.
pub fn to_canvas(display: Dimensions, (x, y): (f64, f64)) -> (f64, f64) {
    (x, display.height - y)
}

/// Dashed guide circle at the entity's mean marker distance, in canvas
/// coordinates.
pub fn guide_points(state: &EntityState, display: Dimensions) -> Vec<(f64, f64)> {
    let radius = state.radius();
    (0..GUIDE_DOTS)
        .map(|i| {
            let angle = TAU * i as f64 / GUIDE_DOTS as f64;
            to_canvas(
                display,
                (state.x + radius * angle.cos(), state.y + radius * angle.sin()),
            )
        })
        .collect()
}

/// Closed polygon through the ring vertices, as canvas line segments.
pub fn ring_segments(state: &EntityState, display: Dimensions) -> Vec<((f64, f64), (f64, f64))> {
    let ring = state.vertices();
    ring.iter()
        .zip(ring.iter().cycle().skip(1))
        .map(|(&a, &b)| (to_canvas(display, a), to_canvas(display, b)))
        .collect()
}

/// Draw one frame: the canvas with every entity, then the status line.
pub fn draw_scene(
    f: &mut ratatui::Frame,
    frame: &Frame,
    entities: &[VisibleEntity],
    display: Dimensions,
    theme: &Theme,
) {
    let [canvas_area, status_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(f.area());

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, display.width])
        .y_bounds([0.0, display.height])
        .paint(|ctx| {
            for entity in entities {
                let guide = guide_points(&entity.state, display);
                ctx.draw(&Points {
                    coords: &guide,
                    color: theme.guide,
                });

                let color = theme.track_color(entity.index);
                for ((x1, y1), (x2, y2)) in ring_segments(&entity.state, display) {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                }

                let (x, y) = to_canvas(display, (entity.state.x, entity.state.y));
                ctx.print(
                    x,
                    y,
                    Span::styled(entity.track.to_string(), theme.label_style(entity.index)),
                );
            }
        });

    f.render_widget(canvas, canvas_area);
    f.render_widget(
        Paragraph::new(status_line(frame, status_area.width, theme)),
        status_area,
    );
}

/// Renderer that draws frames to a ratatui terminal.
///
/// Entities are collected between `begin_frame` and `end_frame`, then the
/// whole scene is drawn in one terminal update.
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    display: Dimensions,
    theme: Theme,
    entities: Vec<VisibleEntity>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, display: Dimensions) -> Self {
        Self {
            terminal,
            display,
            theme: Theme::default(),
            entities: Vec::new(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn begin_frame(&mut self, _frame: &Frame) -> Result<()> {
        self.entities.clear();
        Ok(())
    }

    fn draw_entity(&mut self, entity: &VisibleEntity) -> Result<()> {
        self.entities.push(*entity);
        Ok(())
    }

    fn end_frame(&mut self, frame: &Frame) -> Result<()> {
        let Self {
            terminal,
            display,
            theme,
            entities,
        } = self;
        terminal.draw(|f| draw_scene(f, frame, entities, *display, theme))?;
        Ok(())
    }
}
