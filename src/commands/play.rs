//! Play command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use motionline::loader::{self, LoadPaths, TimelineSource};
use motionline::pipeline::RngJitter;
use motionline::player::{play_timeline, PlaybackResult};
use motionline::Config;

/// Load or build the timeline, then play it in the terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, raw: Option<PathBuf>, timeline: Option<PathBuf>) -> Result<()> {
    let mut paths = LoadPaths::from_config(config);
    if let Some(raw) = raw {
        paths.raw = raw;
    }
    if let Some(timeline) = timeline {
        paths.processed = timeline;
    }

    let mut jitter = RngJitter::from_seed_option(config.markers.seed);
    let loaded = loader::load_or_build(config, &paths, &mut jitter)
        .with_context(|| format!("Failed to prepare timeline from {:?}", paths.raw))?;

    match loaded.source {
        TimelineSource::Persisted => {}
        TimelineSource::Ingested => {
            eprintln!("Built timeline from {}", paths.raw.display())
        }
        TimelineSource::Rebuilt => eprintln!(
            "Rebuilt corrupt timeline {} from {}",
            paths.processed.display(),
            paths.raw.display()
        ),
    }

    match play_timeline(loaded.timeline, config)? {
        PlaybackResult::Finished => println!("Playback finished"),
        PlaybackResult::Interrupted => println!("Playback stopped"),
    }
    Ok(())
}
