//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Get the path to the test fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path to a named fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Load a fixture file's content
pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

/// A scratch directory with its own (initially absent) config file, so the
/// user's configuration never leaks into a test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("config.toml")
    }

    /// Copy a fixture into the scratch directory.
    pub fn copy_fixture(&self, name: &str) -> PathBuf {
        let dest = self.path(name);
        fs::copy(fixture_path(name), &dest).expect("Failed to copy fixture");
        dest
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let dest = self.path(name);
        fs::write(&dest, content).expect("Failed to write file");
        dest
    }

    /// The motionline binary, pointed at this environment's config.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_motionline"));
        cmd.arg("--config")
            .arg(self.config_path())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .current_dir(self.dir.path());
        cmd
    }
}

/// Convert a path to a `&str` for command arguments.
pub fn arg(path: &Path) -> &str {
    path.to_str().expect("non-UTF-8 temp path")
}
