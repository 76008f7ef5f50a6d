//! Integration tests for the command line surface

use predicates::prelude::*;

use crate::helpers::TestEnv;

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("ingest"))
        .stdout(predicate::str::contains("info"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn play_help_describes_controls() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--timeline"))
        .stdout(predicate::str::contains("Play / pause"));
}

#[test]
fn version_flag_prints_package_version() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let env = TestEnv::new();
    env.cmd().assert().code(2);
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_honors_flag() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(
            env.dir.path().to_string_lossy().to_string(),
        ));
}

#[test]
fn config_show_prints_defaults_when_file_missing() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[display]"))
        .stdout(predicate::str::contains("width = 1280.0"))
        .stdout(predicate::str::contains("jitter_min = -5"))
        .stdout(predicate::str::contains("[playback]"));
}

#[test]
fn config_show_reflects_file_values() {
    let env = TestEnv::new();
    env.write("config.toml", "[playback]\nspeed = 2.0\nfps = 60\n");

    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fps = 60"));
}

#[test]
fn invalid_config_is_rejected() {
    let env = TestEnv::new();
    env.write("config.toml", "[markers]\njitter_min = 5\njitter_max = -5\n");

    env.cmd()
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("jitter_min"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_for_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("motionline"));
}
