//! Marker ring synthesis.
//!
//! Every retained keyframe carries a ring of [`MARKER_COUNT`] radial
//! distances: a base profile with an independent integer jitter added to
//! each entry. The randomness comes from a [`JitterSource`] so builds can be
//! made reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Number of vertices in a marker ring.
pub const MARKER_COUNT: usize = 10;

/// Radial distances of one marker ring, in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerDescriptor(pub [f64; MARKER_COUNT]);

impl MarkerDescriptor {
    pub fn distances(&self) -> &[f64; MARKER_COUNT] {
        &self.0
    }

    /// Mean ring distance.
    pub fn mean(&self) -> f64 {
        self.0.iter().sum::<f64>() / MARKER_COUNT as f64
    }

    /// Element-wise linear blend towards `other` (`t` in `0.0..=1.0`).
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        let mut out = self.0;
        for (value, target) in out.iter_mut().zip(other.0.iter()) {
            *value += (target - *value) * t;
        }
        Self(out)
    }
}

/// Capability to draw a random integer from an inclusive range.
pub trait JitterSource {
    /// Draw a value in `min..=max`. Callers guarantee `min <= max`.
    fn draw(&mut self, min: i32, max: i32) -> i32;
}

/// Jitter drawn from a seeded or entropy-seeded RNG.
pub struct RngJitter {
    rng: StdRng,
}

impl RngJitter {
    /// Reproducible jitter from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is set, entropy-seeded otherwise.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl JitterSource for RngJitter {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        self.rng.gen_range(min..=max)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values outside the requested range are clamped into it. An empty sequence
/// always yields the range's lower bound.
#[derive(Debug, Clone)]
pub struct SequenceJitter {
    values: Vec<i32>,
    next: usize,
}

impl SequenceJitter {
    pub fn new(values: impl Into<Vec<i32>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// A source that always yields zero (when zero is in range).
    pub fn zero() -> Self {
        Self::new(vec![0])
    }

    /// How many values have been drawn so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl JitterSource for SequenceJitter {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        if self.values.is_empty() {
            return min;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(min, max)
    }
}

/// Builds marker rings from a base distance profile.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSynthesizer {
    base: [f64; MARKER_COUNT],
    jitter_min: i32,
    jitter_max: i32,
}

impl MarkerSynthesizer {
    /// # Arguments
    /// * `base` - Base distance of each ring vertex
    /// * `jitter_min`, `jitter_max` - Inclusive jitter bounds (swapped if inverted)
    pub fn new(base: [f64; MARKER_COUNT], jitter_min: i32, jitter_max: i32) -> Self {
        Self {
            base,
            jitter_min: jitter_min.min(jitter_max),
            jitter_max: jitter_min.max(jitter_max),
        }
    }

    /// Draw one ring, one jitter value per vertex in order.
    pub fn synthesize(&self, jitter: &mut dyn JitterSource) -> MarkerDescriptor {
        let mut ring = self.base;
        for distance in ring.iter_mut() {
            *distance += f64::from(jitter.draw(self.jitter_min, self.jitter_max));
        }
        MarkerDescriptor(ring)
    }
}
