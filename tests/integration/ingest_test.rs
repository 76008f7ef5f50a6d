//! Integration tests for the ingest and info commands

use std::fs;

use predicates::prelude::*;

use motionline::timeline::PersistedTimeline;

use crate::helpers::{arg, TestEnv};

fn decode(path: &std::path::Path) -> PersistedTimeline {
    PersistedTimeline::from_json(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn ingest_writes_timeline_and_prints_summary() {
    let env = TestEnv::new();
    let raw = env.copy_fixture("motion.csv");
    let out = env.path("out/motion.json");

    env.cmd()
        .args(["ingest", arg(&raw), "-o", arg(&out), "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Built 3 tracks, 11 keyframes, duration 400 ms",
        ))
        .stdout(predicate::str::contains("Wrote"));

    let persisted = decode(&out);
    assert!(persisted.created_at.is_some());
    assert_eq!(persisted.tracks.len(), 3);
}

#[test]
fn ingest_uses_configured_paths_by_default() {
    let env = TestEnv::new();
    env.copy_fixture("motion.csv");
    env.write(
        "config.toml",
        "[paths]\nraw = \"motion.csv\"\nprocessed = \"processed.json\"\n",
    );

    env.cmd().arg("ingest").assert().success();

    assert!(env.path("processed.json").exists());
}

#[test]
fn seeded_ingest_is_reproducible() {
    let env = TestEnv::new();
    let raw = env.copy_fixture("motion.csv");
    let first = env.path("first.json");
    let second = env.path("second.json");

    for out in [&first, &second] {
        env.cmd()
            .args(["ingest", arg(&raw), "-o", arg(out), "--seed", "42"])
            .assert()
            .success();
    }

    assert_eq!(decode(&first).tracks, decode(&second).tracks);
}

#[test]
fn malformed_row_aborts_without_output() {
    let env = TestEnv::new();
    let raw = env.copy_fixture("malformed.csv");
    let out = env.path("out.json");

    env.cmd()
        .args(["ingest", arg(&raw), "-o", arg(&out)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));

    assert!(!out.exists());
}

#[test]
fn overflowing_coordinates_abort_without_output() {
    let env = TestEnv::new();
    let raw = env.write("huge.csv", "A;1e308;x;0;0\nA;0;x;0;10\n");
    let out = env.path("out.json");

    env.cmd()
        .args(["ingest", arg(&raw), "-o", arg(&out)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));

    assert!(!out.exists());
}

#[test]
fn empty_input_is_an_error() {
    let env = TestEnv::new();
    let raw = env.write("empty.csv", "\n\n");
    let out = env.path("out.json");

    env.cmd()
        .args(["ingest", arg(&raw), "-o", arg(&out)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No samples"));

    assert!(!out.exists());
}

#[test]
fn missing_raw_file_is_an_error() {
    let env = TestEnv::new();
    let out = env.path("out.json");

    env.cmd()
        .args(["ingest", "nope.csv", "-o", arg(&out)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.csv"));
}

#[test]
fn info_after_ingest() {
    let env = TestEnv::new();
    let raw = env.copy_fixture("motion.csv");
    let out = env.path("motion.json");

    env.cmd()
        .args(["ingest", arg(&raw), "-o", arg(&out)])
        .assert()
        .success();

    env.cmd()
        .args(["info", arg(&out)])
        .assert()
        .success()
        .stdout(predicate::str::contains("tracks:    3"))
        .stdout(predicate::str::contains("keyframes: 11"))
        .stdout(predicate::str::contains("P2"))
        .stdout(predicate::str::contains("track-2"));
}

#[test]
fn info_on_corrupt_timeline_fails() {
    let env = TestEnv::new();
    let corrupt = env.copy_fixture("corrupt.json");

    env.cmd()
        .args(["info", arg(&corrupt)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid timeline"));
}
