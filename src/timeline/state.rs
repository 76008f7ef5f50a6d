//! Per-entity state snapshots for playback.
//!
//! Between two keyframes position and marker distances are blended linearly;
//! visibility steps with the earlier keyframe. Outside the keyframe range the
//! nearest keyframe's state is held.

use std::f64::consts::TAU;

use super::track::{Keyframe, Track};
use crate::pipeline::{MarkerDescriptor, MARKER_COUNT};

/// Read-only state of one entity at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityState {
    pub x: f64,
    pub y: f64,
    pub markers: MarkerDescriptor,
    pub should_render: bool,
}

impl EntityState {
    /// Radius of the guide circle drawn around the entity.
    pub fn radius(&self) -> f64 {
        self.markers.mean()
    }

    /// Ring vertices, evenly spaced clockwise from the positive x axis.
    pub fn vertices(&self) -> [(f64, f64); MARKER_COUNT] {
        let mut points = [(0.0, 0.0); MARKER_COUNT];
        for (i, (point, distance)) in points
            .iter_mut()
            .zip(self.markers.distances().iter())
            .enumerate()
        {
            let angle = TAU * i as f64 / MARKER_COUNT as f64;
            *point = (self.x + distance * angle.cos(), self.y + distance * angle.sin());
        }
        points
    }
}

impl From<&Keyframe> for EntityState {
    fn from(keyframe: &Keyframe) -> Self {
        Self {
            x: keyframe.x,
            y: keyframe.y,
            markers: keyframe.markers,
            should_render: keyframe.should_render,
        }
    }
}

fn tween(from: &Keyframe, to: &Keyframe, time: f64) -> EntityState {
    let span = to.time - from.time;
    let t = if span > 0.0 {
        ((time - from.time) / span).clamp(0.0, 1.0)
    } else {
        0.0
    };

    EntityState {
        x: from.x + (to.x - from.x) * t,
        y: from.y + (to.y - from.y) * t,
        markers: from.markers.lerp(&to.markers, t),
        should_render: from.should_render,
    }
}

impl Track {
    /// Interpolated state at `time`, or `None` for an empty track.
    pub fn state_at(&self, time: f64) -> Option<EntityState> {
        let sorted = self.sorted_by_time();
        let first = *sorted.first()?;
        let last = *sorted.last()?;

        if time <= first.time {
            return Some(first.into());
        }
        if time >= last.time {
            return Some(last.into());
        }

        // first.time < time < last.time, so a following keyframe exists
        let next = sorted.partition_point(|k| k.time <= time);
        Some(tween(sorted[next - 1], sorted[next], time))
    }
}
