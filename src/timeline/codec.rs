//! JSON persistence of timelines.
//!
//! The persisted document carries structure only. Renderers are bound again
//! by whoever plays the reconstructed timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::track::{Keyframe, Track, TrackId};
use super::Timeline;
use crate::error::CodecError;
use crate::pipeline::{MarkerDescriptor, MARKER_COUNT};

/// Current persisted format version.
pub const FORMAT_VERSION: u32 = 1;

/// One keyframe as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedKeyframe {
    pub time: f64,
    pub x: f64,
    pub y: f64,
    pub markers: Vec<f64>,
    pub should_render: bool,
}

/// One track as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedTrack {
    pub id: TrackId,
    pub entity: String,
    pub keyframes: Vec<PersistedKeyframe>,
}

/// The persisted timeline document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedTimeline {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub tracks: Vec<PersistedTrack>,
}

impl From<&Keyframe> for PersistedKeyframe {
    fn from(keyframe: &Keyframe) -> Self {
        Self {
            time: keyframe.time,
            x: keyframe.x,
            y: keyframe.y,
            markers: keyframe.markers.distances().to_vec(),
            should_render: keyframe.should_render,
        }
    }
}

impl From<&Track> for PersistedTrack {
    fn from(track: &Track) -> Self {
        Self {
            id: track.id(),
            entity: track.entity_id().to_string(),
            keyframes: track.keyframes().iter().map(Into::into).collect(),
        }
    }
}

impl PersistedTimeline {
    /// Structural copy of a timeline.
    pub fn from_timeline(timeline: &Timeline) -> Self {
        Self {
            version: FORMAT_VERSION,
            created_at: None,
            tracks: timeline.tracks().iter().map(Into::into).collect(),
        }
    }

    /// Record when the document was produced.
    pub fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = Some(at);
        self
    }

    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self, CodecError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Rebuild the in-memory timeline, validating every track.
    pub fn into_timeline(self) -> Result<Timeline, CodecError> {
        if self.version != FORMAT_VERSION {
            return Err(CodecError::UnsupportedVersion {
                found: self.version,
                expected: FORMAT_VERSION,
            });
        }
        if self.tracks.is_empty() {
            return Err(CodecError::NoTracks);
        }

        let mut timeline = Timeline::new();
        for persisted in self.tracks {
            let id = persisted.id;
            let track = restore_track(persisted)?;
            if !timeline.add_track(track) {
                return Err(invalid(id, "has a duplicate id"));
            }
        }
        Ok(timeline)
    }
}

fn invalid(track: TrackId, reason: impl Into<String>) -> CodecError {
    CodecError::InvalidTrack {
        track: track.0,
        reason: reason.into(),
    }
}

fn restore_keyframe(
    id: TrackId,
    index: usize,
    kf: PersistedKeyframe,
) -> Result<Keyframe, CodecError> {
    let markers: [f64; MARKER_COUNT] = kf.markers.as_slice().try_into().map_err(|_| {
        invalid(
            id,
            format!(
                "keyframe {index} has {} markers (expected {MARKER_COUNT})",
                kf.markers.len()
            ),
        )
    })?;

    let finite = [kf.time, kf.x, kf.y]
        .iter()
        .chain(markers.iter())
        .all(|v| v.is_finite());
    if !finite {
        return Err(invalid(id, format!("keyframe {index} has a non-finite value")));
    }

    Ok(Keyframe {
        time: kf.time,
        x: kf.x,
        y: kf.y,
        markers: MarkerDescriptor(markers),
        should_render: kf.should_render,
    })
}

fn restore_track(persisted: PersistedTrack) -> Result<Track, CodecError> {
    let id = persisted.id;
    let mut track = Track::new(id, persisted.entity);

    for (index, kf) in persisted.keyframes.into_iter().enumerate() {
        let time = kf.time;
        let keyframe = restore_keyframe(id, index, kf)?;
        if !track.insert(keyframe) {
            return Err(invalid(id, format!("has two keyframes at time {time}")));
        }
    }

    if !track.has_keyframe_at(0.0) {
        return Err(invalid(id, "has no keyframe at time 0"));
    }
    Ok(track)
}

impl Timeline {
    /// Structural form for persistence.
    pub fn serialize(&self) -> PersistedTimeline {
        PersistedTimeline::from_timeline(self)
    }

    /// Inverse of [`Timeline::serialize`].
    pub fn deserialize(persisted: PersistedTimeline) -> Result<Self, CodecError> {
        persisted.into_timeline()
    }

    pub fn to_json(&self) -> Result<String, CodecError> {
        self.serialize().to_json()
    }

    pub fn from_json(content: &str) -> Result<Self, CodecError> {
        PersistedTimeline::from_json(content)?.into_timeline()
    }
}
