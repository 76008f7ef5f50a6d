//! Error types for ingestion and timeline persistence.

use std::path::PathBuf;

/// Errors raised while turning raw samples into a timeline.
///
/// Any of these aborts the batch run; no partial timeline is produced.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Malformed row on line {line}: {field} {value:?} is not a number")]
    MalformedRow {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Malformed row on line {line}: expected at least {expected} fields, found {found}")]
    MissingFields {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("No samples to process: the input contained zero rows")]
    EmptyDataset,

    #[error("Failed to open sample file {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read samples: {0}")]
    Read(#[from] csv::Error),

    #[error("Sample {sample} of entity {entity:?} is out of range: {field} overflows")]
    OutOfRange {
        entity: String,
        sample: usize,
        field: &'static str,
    },
}

impl PipelineError {
    /// Whether this error came from an unparsable row.
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRow { .. } | Self::MissingFields { .. })
    }
}

/// The persisted timeline is missing required structure or holds bad values.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Corrupt timeline: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corrupt timeline: unsupported format version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Corrupt timeline: no tracks")]
    NoTracks,

    #[error("Corrupt timeline: track {track} {reason}")]
    InvalidTrack { track: u64, reason: String },
}

/// Errors that stop startup before playback can begin.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error("Failed to read timeline {path:?}: {source}")]
    ReadTimeline {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write timeline {path:?}: {source}")]
    WriteTimeline {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Codec(#[from] CodecError),
}
