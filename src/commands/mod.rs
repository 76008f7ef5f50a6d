//! Subcommand handlers

pub mod config;
pub mod info;
pub mod ingest;
pub mod play;

use std::fs;
use std::path::Path;

/// Human-readable size of a file, or "?" when it can't be read.
pub fn file_size(path: &Path) -> String {
    match fs::metadata(path) {
        Ok(meta) => humansize::format_size(meta.len(), humansize::BINARY),
        Err(_) => "?".to_string(),
    }
}
