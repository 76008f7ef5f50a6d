//! Info command handler

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use motionline::timeline::PersistedTimeline;
use motionline::Config;

use super::file_size;

/// Print a summary of a persisted timeline.
pub fn handle(config: &Config, timeline: Option<PathBuf>) -> Result<()> {
    let path = timeline.unwrap_or_else(|| config.paths.processed.clone());
    print!("{}", summarize(&path)?);
    Ok(())
}

/// Summary text for the timeline at `path`.
///
/// The file is fully decoded, so a corrupt timeline is an error here.
pub fn summarize(path: &Path) -> Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
    let persisted = PersistedTimeline::from_json(&content)
        .with_context(|| format!("Invalid timeline {:?}", path))?;
    let created_at = persisted.created_at;
    let version = persisted.version;
    let timeline = persisted
        .into_timeline()
        .with_context(|| format!("Invalid timeline {:?}", path))?;

    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", path.display(), file_size(path)));
    out.push_str(&format!("  format:    v{}\n", version));
    if let Some(at) = created_at {
        out.push_str(&format!(
            "  created:   {}\n",
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }
    out.push_str(&format!("  tracks:    {}\n", timeline.track_count()));
    out.push_str(&format!("  keyframes: {}\n", timeline.keyframe_count()));
    out.push_str(&format!("  duration:  {:.0} ms\n", timeline.duration()));

    for track in timeline.tracks() {
        out.push_str(&format!(
            "  {:<10} {:<16} {:>5} keyframes, ends at {:.0} ms\n",
            track.id().to_string(),
            track.entity_id(),
            track.len(),
            track.end_time().unwrap_or(0.0)
        ));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use motionline::pipeline::SequenceJitter;
    use motionline::{loader, Pipeline};
    use tempfile::TempDir;

    #[test]
    fn summary_lists_tracks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timeline.json");

        let mut jitter = SequenceJitter::zero();
        let timeline = Pipeline::from_config(&Config::default(), &mut jitter)
            .run_str("A;0;x;0;100\nA;1;x;1;300\nB;0;x;0;200\n")
            .unwrap();
        loader::persist(&timeline, &path).unwrap();

        let summary = summarize(&path).unwrap();
        assert!(summary.contains("tracks:    2"));
        assert!(summary.contains("track-0"));
        assert!(summary.contains("created:"));
        assert!(summary.contains("duration:  200 ms"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timeline.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(summarize(&path).is_err());
    }
}
