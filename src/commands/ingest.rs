//! Ingest command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use motionline::loader::{self, LoadPaths};
use motionline::pipeline::RngJitter;
use motionline::Config;

use super::file_size;

/// Run the pipeline on the raw samples and persist the timeline.
///
/// `seed` overrides the configured jitter seed.
pub fn handle(
    config: &Config,
    raw: Option<PathBuf>,
    output: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mut paths = LoadPaths::from_config(config);
    if let Some(raw) = raw {
        paths.raw = raw;
    }
    if let Some(output) = output {
        paths.processed = output;
    }

    let mut jitter = RngJitter::from_seed_option(seed.or(config.markers.seed));
    let timeline = loader::ingest(config, &paths, &mut jitter)
        .with_context(|| format!("Failed to ingest {:?}", paths.raw))?;

    println!(
        "Built {} tracks, {} keyframes, duration {:.0} ms",
        timeline.track_count(),
        timeline.keyframe_count(),
        timeline.duration()
    );
    println!(
        "Wrote {} ({})",
        paths.processed.display(),
        file_size(&paths.processed)
    );
    Ok(())
}
