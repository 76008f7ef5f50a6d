//! Startup: reuse a persisted timeline or build one from raw samples.
//!
//! The persisted file is probed first. Not found selects ingestion. A
//! corrupt file is discarded and rebuilt from the raw input. Any other read
//! failure stops startup.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::Config;
use crate::error::{CodecError, LoadError};
use crate::pipeline::{JitterSource, Pipeline};
use crate::timeline::{PersistedTimeline, Timeline};

/// Outcome of probing for a persisted timeline.
#[derive(Debug)]
pub enum Probe {
    NotFound,
    Corrupt(CodecError),
    Found(Timeline),
}

/// Where the loaded timeline came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineSource {
    /// Reconstructed from the persisted file
    Persisted,
    /// Built from raw samples because no persisted file existed
    Ingested,
    /// Built from raw samples after the persisted file failed to decode
    Rebuilt,
}

/// A timeline ready for playback.
#[derive(Debug)]
pub struct Loaded {
    pub timeline: Timeline,
    pub source: TimelineSource,
}

/// Input and output locations for one startup.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadPaths {
    pub raw: PathBuf,
    pub processed: PathBuf,
}

impl LoadPaths {
    pub fn new(raw: impl Into<PathBuf>, processed: impl Into<PathBuf>) -> Self {
        Self {
            raw: raw.into(),
            processed: processed.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.paths.raw, &config.paths.processed)
    }
}

/// Look for a persisted timeline and try to decode it.
pub fn probe(path: &Path) -> Result<Probe, LoadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Probe::NotFound),
        Err(source) => {
            return Err(LoadError::ReadTimeline {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    Ok(match Timeline::from_json(&content) {
        Ok(timeline) => Probe::Found(timeline),
        Err(e) => Probe::Corrupt(e),
    })
}

/// Write a timeline as a stamped JSON document, creating parent directories.
pub fn persist(timeline: &Timeline, path: &Path) -> Result<(), LoadError> {
    let write_err = |source| LoadError::WriteTimeline {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    let json = PersistedTimeline::from_timeline(timeline)
        .stamped(Utc::now())
        .to_json()?;
    fs::write(path, json).map_err(write_err)?;

    tracing::info!(path = %path.display(), "Persisted timeline");
    Ok(())
}

/// Run the full pipeline on the raw file and persist the result.
pub fn ingest(
    config: &Config,
    paths: &LoadPaths,
    jitter: &mut dyn JitterSource,
) -> Result<Timeline, LoadError> {
    tracing::info!(raw = %paths.raw.display(), "Processing raw samples");
    let timeline = Pipeline::from_config(config, jitter).run_path(&paths.raw)?;
    persist(&timeline, &paths.processed)?;
    Ok(timeline)
}

/// Reconstruct the persisted timeline, or build and persist a fresh one.
pub fn load_or_build(
    config: &Config,
    paths: &LoadPaths,
    jitter: &mut dyn JitterSource,
) -> Result<Loaded, LoadError> {
    match probe(&paths.processed)? {
        Probe::Found(timeline) => {
            tracing::info!(
                path = %paths.processed.display(),
                tracks = timeline.track_count(),
                "Loaded persisted timeline"
            );
            Ok(Loaded {
                timeline,
                source: TimelineSource::Persisted,
            })
        }
        Probe::NotFound => {
            tracing::debug!(path = %paths.processed.display(), "No persisted timeline");
            Ok(Loaded {
                timeline: ingest(config, paths, jitter)?,
                source: TimelineSource::Ingested,
            })
        }
        Probe::Corrupt(e) => {
            tracing::warn!(
                path = %paths.processed.display(),
                error = %e,
                "Discarding corrupt timeline, rebuilding from raw samples"
            );
            Ok(Loaded {
                timeline: ingest(config, paths, jitter)?,
                source: TimelineSource::Rebuilt,
            })
        }
    }
}
