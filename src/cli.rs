//! CLI definitions for motionline
//!
//! This module is shared between the main binary and xtask (for man page
//! generation).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[cfg(not(feature = "release"))]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("MOTIONLINE_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("MOTIONLINE_BUILD_DATE"),
    ")"
);

/// Motionline - play back tracked motion as animated marker rings
#[derive(Parser, Debug)]
#[command(name = "motionline")]
#[command(author, version, long_version = LONG_VERSION, about)]
#[command(
    long_about = "Turn raw motion-tracking samples into a keyframe timeline and play it back \
in the terminal.\n\n\
Raw samples are `;`-separated rows: entity id, x, (ignored), y, timestamp. \
The built timeline is persisted as JSON and reused on the next start; a \
corrupt timeline file is rebuilt from the raw samples.\n\n\
EXAMPLES:\n  \
motionline play                      Load or build the timeline, then play it\n  \
motionline ingest data.csv -o out.json  Rebuild the timeline from raw samples\n  \
motionline info out.json             Show what a timeline contains"
)]
pub struct Cli {
    /// Use this configuration file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play the timeline in the terminal
    #[command(long_about = "Load the persisted timeline, or build it from the raw samples \
when it is missing or corrupt, then play it in the terminal.\n\n\
CONTROLS:\n  \
space / click   Play / pause\n  \
+ / -           Speed up / slow down\n  \
q / Esc         Quit")]
    Play {
        /// Raw sample file (overrides config)
        #[arg(long, value_name = "PATH")]
        raw: Option<PathBuf>,
        /// Persisted timeline file (overrides config)
        #[arg(long, value_name = "PATH")]
        timeline: Option<PathBuf>,
    },

    /// Build a timeline from raw samples and persist it
    Ingest {
        /// Raw sample file (defaults to the configured path)
        #[arg(value_name = "RAW")]
        raw: Option<PathBuf>,
        /// Where to write the timeline (defaults to the configured path)
        #[arg(short, long, value_name = "OUT")]
        output: Option<PathBuf>,
        /// Seed for marker jitter, for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show a summary of a persisted timeline
    Info {
        /// Timeline file (defaults to the configured path)
        #[arg(value_name = "TIMELINE")]
        timeline: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Show the configuration file path
    Path,
}
