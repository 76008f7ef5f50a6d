//! Integration tests for startup loading: reuse, ingest, and corrupt fallback

use std::fs;

use motionline::loader::{self, LoadPaths, Probe, TimelineSource};
use motionline::pipeline::SequenceJitter;
use motionline::{Config, LoadError, Timeline};

use crate::helpers::TestEnv;

fn paths(env: &TestEnv) -> LoadPaths {
    LoadPaths::new(env.copy_fixture("motion.csv"), env.path("motion.json"))
}

#[test]
fn first_start_ingests_and_persists() {
    let env = TestEnv::new();
    let paths = paths(&env);

    let loaded =
        loader::load_or_build(&Config::default(), &paths, &mut SequenceJitter::zero()).unwrap();

    assert_eq!(loaded.source, TimelineSource::Ingested);
    assert_eq!(loaded.timeline.track_count(), 3);
    assert!(paths.processed.exists());
}

#[test]
fn second_start_reuses_persisted_timeline() {
    let env = TestEnv::new();
    let paths = paths(&env);
    let config = Config::default();

    let first = loader::load_or_build(&config, &paths, &mut SequenceJitter::zero()).unwrap();

    // different jitter would change the markers if the pipeline ran again
    let mut jitter = SequenceJitter::new(vec![3]);
    let second = loader::load_or_build(&config, &paths, &mut jitter).unwrap();

    assert_eq!(second.source, TimelineSource::Persisted);
    assert_eq!(second.timeline, first.timeline);
    assert_eq!(jitter.drawn(), 0);
}

#[test]
fn corrupt_timeline_falls_back_to_reingestion() {
    let env = TestEnv::new();
    let paths = paths(&env);
    fs::copy(crate::helpers::fixture_path("corrupt.json"), &paths.processed).unwrap();

    assert!(matches!(
        loader::probe(&paths.processed).unwrap(),
        Probe::Corrupt(_)
    ));

    let loaded =
        loader::load_or_build(&Config::default(), &paths, &mut SequenceJitter::zero()).unwrap();
    assert_eq!(loaded.source, TimelineSource::Rebuilt);

    // the rewritten file decodes to the rebuilt timeline
    let content = fs::read_to_string(&paths.processed).unwrap();
    assert_eq!(Timeline::from_json(&content).unwrap(), loaded.timeline);
}

#[test]
fn timeline_with_wrong_version_is_treated_as_corrupt() {
    let env = TestEnv::new();
    let paths = paths(&env);
    fs::write(&paths.processed, r#"{"version": 99, "tracks": []}"#).unwrap();

    let loaded =
        loader::load_or_build(&Config::default(), &paths, &mut SequenceJitter::zero()).unwrap();
    assert_eq!(loaded.source, TimelineSource::Rebuilt);
}

#[test]
fn malformed_raw_input_is_fatal() {
    let env = TestEnv::new();
    let paths = LoadPaths::new(env.copy_fixture("malformed.csv"), env.path("motion.json"));

    let err = loader::load_or_build(&Config::default(), &paths, &mut SequenceJitter::zero())
        .unwrap_err();

    match err {
        LoadError::Pipeline(e) => assert!(e.is_malformed()),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!paths.processed.exists());
}
