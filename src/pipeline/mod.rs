//! Batch pipeline from raw samples to a keyframe timeline.
//!
//! The stages run in one uninterrupted pass:
//! decode -> aggregate -> normalize -> (synthesize markers + build tracks).
//!
//! # Module Structure
//!
//! - [`normalize`] - projection into display space and relative times
//! - [`markers`] - marker ring synthesis with an injectable jitter source
//! - [`builder`] - keyframe track construction
//!
//! All per-run state (time origin, entity mapping) lives inside a single
//! [`Pipeline::run`] call and is dropped when it returns.

pub mod builder;
pub mod markers;
pub mod normalize;

use std::path::Path;

pub use builder::{build_timeline, build_track};
pub use markers::{
    JitterSource, MarkerDescriptor, MarkerSynthesizer, RngJitter, SequenceJitter, MARKER_COUNT,
};
pub use normalize::{global_mean_y, normalize, NormalizedPath, NormalizedSample, Projection};

use crate::config::Config;
use crate::error::PipelineError;
use crate::samples::{EntityPaths, RawSample, SampleReader};
use crate::timeline::Timeline;

/// One batch run's inputs: projection, marker profile, and randomness.
pub struct Pipeline<'a> {
    projection: Projection,
    synthesizer: MarkerSynthesizer,
    jitter: &'a mut dyn JitterSource,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        projection: Projection,
        synthesizer: MarkerSynthesizer,
        jitter: &'a mut dyn JitterSource,
    ) -> Self {
        Self {
            projection,
            synthesizer,
            jitter,
        }
    }

    /// Pipeline configured from display, projection, and marker settings.
    pub fn from_config(config: &Config, jitter: &'a mut dyn JitterSource) -> Self {
        Self::new(
            Projection::new(config.display, config.projection),
            MarkerSynthesizer::new(
                config.markers.distances,
                config.markers.jitter_min,
                config.markers.jitter_max,
            ),
            jitter,
        )
    }

    /// Build a timeline from already aggregated paths.
    pub fn build(&mut self, paths: &EntityPaths) -> Result<Timeline, PipelineError> {
        let normalized = normalize(paths, &self.projection)?;
        Ok(build_timeline(
            &normalized,
            &self.synthesizer,
            &mut *self.jitter,
        ))
    }

    /// Aggregate a fallible sample stream and build its timeline.
    ///
    /// The first decode error aborts the run.
    pub fn run<I>(&mut self, samples: I) -> Result<Timeline, PipelineError>
    where
        I: IntoIterator<Item = Result<RawSample, PipelineError>>,
    {
        let paths = EntityPaths::try_collect(samples)?;
        tracing::info!(
            entities = paths.entity_count(),
            samples = paths.sample_count(),
            "Aggregated raw samples"
        );

        let timeline = self.build(&paths)?;
        tracing::info!(
            tracks = timeline.track_count(),
            keyframes = timeline.keyframe_count(),
            duration = timeline.duration(),
            "Built timeline"
        );
        Ok(timeline)
    }

    /// Decode a raw sample file and build its timeline.
    pub fn run_path(&mut self, path: &Path) -> Result<Timeline, PipelineError> {
        self.run(SampleReader::from_path(path)?)
    }

    /// Decode raw sample text and build its timeline.
    pub fn run_str(&mut self, content: &str) -> Result<Timeline, PipelineError> {
        self.run(SampleReader::from_text(content))
    }
}
