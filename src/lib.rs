//! Motionline - tracked motion samples to keyframe timelines
//!
//! Raw `;`-separated samples are decoded, grouped by entity, projected into
//! display space, given jittered marker rings, and turned into one keyframe
//! track per entity. The resulting timeline is persisted as JSON and played
//! back in the terminal.
//!
//! # Modules
//!
//! - [`samples`] - raw row decoding and per-entity aggregation
//! - [`pipeline`] - normalization, marker synthesis, and track building
//! - [`timeline`] - keyframe tracks, interpolation, and the JSON codec
//! - [`loader`] - reuse a persisted timeline or rebuild it
//! - [`player`] - playback cursor, renderer capability, terminal front end
//! - [`config`] - TOML configuration

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod player;
pub mod samples;
pub mod timeline;

pub use config::Config;
pub use error::{CodecError, LoadError, PipelineError};
pub use pipeline::Pipeline;
pub use timeline::Timeline;
