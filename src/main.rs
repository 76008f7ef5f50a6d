//! Motionline CLI entry point

mod commands;

use std::io;
use std::path::Path;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use motionline::cli::{Cli, Commands, ConfigCommands};
use motionline::Config;

/// Log to stderr; `RUST_LOG` overrides the default `warn` level.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    match cli.command {
        Commands::Play { raw, timeline } => {
            commands::play::handle(&load_config(&config_path)?, raw, timeline)
        }
        Commands::Ingest { raw, output, seed } => {
            commands::ingest::handle(&load_config(&config_path)?, raw, output, seed)
        }
        Commands::Info { timeline } => {
            commands::info::handle(&load_config(&config_path)?, timeline)
        }
        Commands::Config(ConfigCommands::Show) => {
            commands::config::handle_show(&load_config(&config_path)?)
        }
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(&config_path),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "motionline", &mut io::stdout());
            Ok(())
        }
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let config = Config::load_from(path)?;
    tracing::debug!(path = %path.display(), "Loaded configuration");
    Ok(config)
}
