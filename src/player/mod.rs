//! Timeline playback
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackState cursor and shared types (InputResult)
//! - `control`: the play/pause control signal
//! - `session`: Player, the Renderer capability, and per-frame snapshots
//! - `input/`: Keyboard and mouse input handling
//! - `render/`: Canvas renderer, progress bar, and theme
//!
//! # Usage
//!
//! ```no_run
//! use motionline::player::{play_timeline, PlaybackResult};
//! use motionline::{loader, Config};
//! use motionline::pipeline::RngJitter;
//!
//! let config = Config::default();
//! let paths = loader::LoadPaths::from_config(&config);
//! let mut jitter = RngJitter::from_seed_option(config.markers.seed);
//! let loaded = loader::load_or_build(&config, &paths, &mut jitter).unwrap();
//! match play_timeline(loaded.timeline, &config).unwrap() {
//!     PlaybackResult::Finished => println!("Finished"),
//!     PlaybackResult::Interrupted => println!("Stopped by user"),
//! }
//! ```

pub mod control;
pub(crate) mod input;
mod native;
pub mod render;
pub mod session;
pub mod state;

pub use control::{dispatch, ControlSignal};
pub use native::{frame_interval, play_timeline, PlaybackResult};
pub use session::{Frame, Player, Renderer, VisibleEntity};
pub use state::{InputResult, PlaybackState};
