//! Projection of physical samples into display space.
//!
//! Two passes over the complete aggregation:
//! 1. the flat mean of `y` over every sample of every entity
//! 2. projection of each sample plus its time offset from the first sample
//!    visited (first entity in first-seen order, its first sample)
//!
//! The raw paths are left untouched; a new collection is returned.

use crate::config::Dimensions;
use crate::error::PipelineError;
use crate::samples::{EntityPaths, RawSample};

/// A sample in display space with a time offset from the batch origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedSample {
    pub x: f64,
    pub y: f64,
    pub relative_time: f64,
}

/// One entity's normalized samples, still in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPath {
    pub entity_id: String,
    pub samples: Vec<NormalizedSample>,
}

/// Mapping from projection space (meters) to display space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub display: Dimensions,
    pub physical: Dimensions,
}

impl Projection {
    pub fn new(display: Dimensions, physical: Dimensions) -> Self {
        Self { display, physical }
    }

    /// Display units per meter, horizontally.
    pub fn width_coefficient(&self) -> f64 {
        self.display.width / self.physical.width
    }

    /// Display units per meter, vertically.
    pub fn height_coefficient(&self) -> f64 {
        self.display.height / self.physical.height
    }

    /// Project a physical point, centering `y` on `mean_y`.
    ///
    /// `x` is not centered: a physical `x` of 0 lands on the display midline.
    pub fn project(&self, x: f64, y: f64, mean_y: f64) -> (f64, f64) {
        (
            x * self.width_coefficient() + self.display.width / 2.0,
            (y - mean_y) * self.height_coefficient() + self.display.height / 2.0,
        )
    }
}

/// Pass 1: arithmetic mean of `y` across all samples of all entities.
///
/// Entities with more samples weigh more; this is not a mean of per-entity
/// means.
pub fn global_mean_y(paths: &EntityPaths) -> Result<f64, PipelineError> {
    let count = paths.sample_count();
    if count == 0 {
        return Err(PipelineError::EmptyDataset);
    }

    let sum: f64 = paths
        .iter()
        .flat_map(|path| path.samples.iter())
        .map(|sample| sample.y)
        .sum();
    Ok(sum / count as f64)
}

/// Pass 2: project every sample and derive its relative time.
///
/// Finite input can still overflow here; any non-finite result is an
/// [`PipelineError::OutOfRange`] so that no unpersistable value reaches the
/// timeline.
pub fn project_paths(
    paths: &EntityPaths,
    projection: &Projection,
    mean_y: f64,
) -> Result<Vec<NormalizedPath>, PipelineError> {
    let mut origin: Option<f64> = None;
    let mut normalized = Vec::with_capacity(paths.entity_count());

    for path in paths.iter() {
        let samples = path
            .samples
            .iter()
            .enumerate()
            .map(|(index, sample)| {
                normalize_sample(sample, projection, mean_y, &mut origin).map_err(|field| {
                    PipelineError::OutOfRange {
                        entity: path.entity_id.clone(),
                        sample: index,
                        field,
                    }
                })
            })
            .collect::<Result<_, _>>()?;

        normalized.push(NormalizedPath {
            entity_id: path.entity_id.clone(),
            samples,
        });
    }
    Ok(normalized)
}

/// Returns the name of the first non-finite field on overflow.
fn normalize_sample(
    sample: &RawSample,
    projection: &Projection,
    mean_y: f64,
    origin: &mut Option<f64>,
) -> Result<NormalizedSample, &'static str> {
    let origin = *origin.get_or_insert(sample.timestamp);
    let (x, y) = projection.project(sample.x, sample.y, mean_y);
    let relative_time = sample.timestamp - origin;

    for (field, value) in [("x", x), ("y", y), ("relative time", relative_time)] {
        if !value.is_finite() {
            return Err(field);
        }
    }

    Ok(NormalizedSample {
        x,
        y,
        relative_time,
    })
}

/// Run both passes.
pub fn normalize(
    paths: &EntityPaths,
    projection: &Projection,
) -> Result<Vec<NormalizedPath>, PipelineError> {
    let mean_y = global_mean_y(paths)?;
    tracing::debug!(
        mean_y,
        samples = paths.sample_count(),
        "Computed global vertical mean"
    );
    project_paths(paths, projection, mean_y)
}
