//! Keyframe timeline model and persistence.
//!
//! - `track`: keyframes and per-entity tracks
//! - `state`: interpolated per-entity state snapshots for playback
//! - `codec`: JSON persistence

mod codec;
mod state;
mod track;

pub use codec::{PersistedKeyframe, PersistedTimeline, PersistedTrack, FORMAT_VERSION};
pub use state::EntityState;
pub use track::{Keyframe, Track, TrackId};

/// All tracks of one processed capture, in entity first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    tracks: Vec<Track>,
    next_id: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty track under a fresh id (not yet registered).
    pub fn new_track(&mut self, entity_id: impl Into<String>) -> Track {
        let id = TrackId(self.next_id);
        self.next_id += 1;
        Track::new(id, entity_id)
    }

    /// Register a track.
    ///
    /// Returns `false` and drops the track if its id is already taken.
    pub fn add_track(&mut self, track: Track) -> bool {
        if self.track(track.id()).is_some() {
            return false;
        }
        self.next_id = self.next_id.max(track.id().0 + 1);
        self.tracks.push(track);
        true
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    pub fn keyframe_count(&self) -> usize {
        self.tracks.iter().map(Track::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Time of the last keyframe across all tracks (0 for an empty timeline).
    pub fn duration(&self) -> f64 {
        self.tracks
            .iter()
            .filter_map(Track::end_time)
            .fold(0.0, f64::max)
    }
}
