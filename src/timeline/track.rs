//! Keyframes and per-entity tracks.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pipeline::MarkerDescriptor;

/// Stable identifier of a track within a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "track-{}", self.0)
    }
}

/// A time-stamped state of one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    /// Time offset from the timeline origin (milliseconds)
    pub time: f64,
    /// Display-space position
    pub x: f64,
    pub y: f64,
    pub markers: MarkerDescriptor,
    /// Whether the entity is drawn from this keyframe on
    pub should_render: bool,
}

impl Keyframe {
    pub fn new(time: f64, x: f64, y: f64, markers: MarkerDescriptor) -> Self {
        Self {
            time,
            x,
            y,
            markers,
            should_render: true,
        }
    }

    /// Copy of this keyframe moved to `time`, hidden.
    pub fn hidden_copy_at(&self, time: f64) -> Self {
        Self {
            time,
            should_render: false,
            ..*self
        }
    }
}

/// Hash key for exact time matching; `-0.0` and `0.0` are the same time.
fn time_key(time: f64) -> u64 {
    if time == 0.0 {
        0f64.to_bits()
    } else {
        time.to_bits()
    }
}

/// One entity's keyframes, in insertion order, unique by time.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    id: TrackId,
    entity_id: String,
    keyframes: Vec<Keyframe>,
    times: HashSet<u64>,
}

impl Track {
    pub fn new(id: TrackId, entity_id: impl Into<String>) -> Self {
        Self {
            id,
            entity_id: entity_id.into(),
            keyframes: Vec::new(),
            times: HashSet::new(),
        }
    }

    pub fn id(&self) -> TrackId {
        self.id
    }

    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// Keyframes in insertion order.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn has_keyframe_at(&self, time: f64) -> bool {
        self.times.contains(&time_key(time))
    }

    pub fn keyframe_at(&self, time: f64) -> Option<&Keyframe> {
        if !self.has_keyframe_at(time) {
            return None;
        }
        self.keyframes.iter().find(|k| k.time == time)
    }

    /// Insert a keyframe unless one already exists at its time.
    ///
    /// Returns `false` when the insertion was suppressed.
    pub fn insert(&mut self, keyframe: Keyframe) -> bool {
        if !self.times.insert(time_key(keyframe.time)) {
            return false;
        }
        self.keyframes.push(keyframe);
        true
    }

    /// The chronologically first keyframe (first inserted wins on ties).
    pub fn earliest(&self) -> Option<&Keyframe> {
        self.keyframes
            .iter()
            .reduce(|best, k| if k.time < best.time { k } else { best })
    }

    /// Time of the chronologically last keyframe.
    pub fn end_time(&self) -> Option<f64> {
        self.keyframes.iter().map(|k| k.time).reduce(f64::max)
    }

    /// Guarantee a keyframe at time 0.
    ///
    /// When missing, the earliest keyframe is copied to 0 with
    /// `should_render = false`, so the entity stays hidden until its first
    /// real appearance. Returns `true` if a keyframe was synthesized.
    pub fn ensure_start_keyframe(&mut self) -> bool {
        if self.has_keyframe_at(0.0) {
            return false;
        }
        match self.earliest() {
            Some(first) => {
                let start = first.hidden_copy_at(0.0);
                self.insert(start)
            }
            None => false,
        }
    }

    /// Keyframes ordered by time, for playback lookup.
    pub fn sorted_by_time(&self) -> Vec<&Keyframe> {
        let mut sorted: Vec<&Keyframe> = self.keyframes.iter().collect();
        sorted.sort_by(|a, b| a.time.total_cmp(&b.time));
        sorted
    }
}
