//! Configuration loading and defaults.
//!
//! The config file lives at `<config dir>/motionline/config.toml`. A missing
//! file means defaults; a present file may set any subset of fields.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::pipeline::MARKER_COUNT;

/// Width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Marker ring synthesis settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Base radial distance of each ring vertex
    pub distances: [f64; MARKER_COUNT],
    /// Smallest jitter added to a distance (inclusive)
    pub jitter_min: i32,
    /// Largest jitter added to a distance (inclusive)
    pub jitter_max: i32,
    /// Fixed RNG seed for reproducible timelines
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            distances: [40.0; MARKER_COUNT],
            jitter_min: -5,
            jitter_max: 5,
            seed: None,
        }
    }
}

/// Input and output file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Raw `;`-delimited sample file
    pub raw: PathBuf,
    /// Persisted timeline JSON
    pub processed: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            raw: PathBuf::from("assets/motion.csv"),
            processed: PathBuf::from("assets/motion.processed.json"),
        }
    }
}

/// Playback loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Speed multiplier (1.0 = one timeline millisecond per wall millisecond)
    pub speed: f64,
    /// Target frames per second of the render loop
    pub fps: u32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            fps: 30,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display surface size in screen units
    pub display: Dimensions,
    /// Physical capture area in meters
    pub projection: Dimensions,
    pub markers: MarkerConfig,
    pub paths: PathsConfig,
    pub playback: PlaybackConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display: Dimensions::new(1280.0, 720.0),
            projection: Dimensions::new(3.0, 1.75),
            markers: MarkerConfig::default(),
            paths: PathsConfig::default(),
            playback: PlaybackConfig::default(),
        }
    }
}

impl Config {
    /// Default config file location.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("motionline").join("config.toml"))
    }

    /// Load from the default location, falling back to defaults.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from an explicit path, falling back to defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config file: {:?}", path))
    }

    /// Parse and validate TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable by the pipeline and player.
    pub fn validate(&self) -> Result<()> {
        if !self.display.is_valid() {
            bail!("display width and height must be positive");
        }
        if !self.projection.is_valid() {
            bail!("projection width and height must be positive");
        }
        if self
            .markers
            .distances
            .iter()
            .any(|d| !d.is_finite() || *d <= 0.0)
        {
            bail!("marker distances must all be positive");
        }
        if self.markers.jitter_min > self.markers.jitter_max {
            bail!(
                "jitter_min ({}) must not exceed jitter_max ({})",
                self.markers.jitter_min,
                self.markers.jitter_max
            );
        }
        let shortest = self
            .markers
            .distances
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        if shortest + f64::from(self.markers.jitter_min) <= 0.0 {
            bail!(
                "jitter_min ({}) would make the shortest marker distance ({}) non-positive",
                self.markers.jitter_min,
                shortest
            );
        }
        if !(self.playback.speed.is_finite() && self.playback.speed > 0.0) {
            bail!("playback speed must be positive");
        }
        if self.playback.fps == 0 {
            bail!("playback fps must be at least 1");
        }
        Ok(())
    }
}
