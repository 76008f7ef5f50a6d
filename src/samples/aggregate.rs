//! Grouping of decoded samples into per-entity paths.

use std::collections::HashMap;

use super::decode::RawSample;
use crate::error::PipelineError;

/// One entity's samples in file arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityPath {
    pub entity_id: String,
    pub samples: Vec<RawSample>,
}

/// Samples grouped by entity id.
///
/// Entities iterate in first-seen order; samples within an entity keep file
/// arrival order. No sorting or deduplication happens here.
#[derive(Debug, Clone, Default)]
pub struct EntityPaths {
    paths: Vec<EntityPath>,
    index: HashMap<String, usize>,
}

impl EntityPaths {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to its entity's path, creating the path on first sight.
    pub fn push(&mut self, sample: RawSample) {
        let slot = match self.index.get(&sample.entity_id) {
            Some(&slot) => slot,
            None => {
                let slot = self.paths.len();
                self.index.insert(sample.entity_id.clone(), slot);
                self.paths.push(EntityPath {
                    entity_id: sample.entity_id.clone(),
                    samples: Vec::new(),
                });
                slot
            }
        };
        self.paths[slot].samples.push(sample);
    }

    /// Aggregate a fallible sample stream, stopping at the first error.
    pub fn try_collect<I>(samples: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = Result<RawSample, PipelineError>>,
    {
        let mut paths = Self::new();
        for sample in samples {
            paths.push(sample?);
        }
        Ok(paths)
    }

    /// Look up one entity's path.
    pub fn get(&self, entity_id: &str) -> Option<&EntityPath> {
        self.index.get(entity_id).map(|&slot| &self.paths[slot])
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityPath> {
        self.paths.iter()
    }

    /// Number of distinct entities.
    pub fn entity_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of samples across all entities.
    pub fn sample_count(&self) -> usize {
        self.paths.iter().map(|p| p.samples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sample_count() == 0
    }
}

impl FromIterator<RawSample> for EntityPaths {
    fn from_iter<T: IntoIterator<Item = RawSample>>(iter: T) -> Self {
        let mut paths = Self::new();
        for sample in iter {
            paths.push(sample);
        }
        paths
    }
}
