//! End-to-end pipeline properties on realistic input

use motionline::pipeline::{RngJitter, SequenceJitter};
use motionline::player::{ControlSignal, Player};
use motionline::{Config, Pipeline, PipelineError, Timeline};

use crate::helpers::load_fixture;

fn build(text: &str) -> Timeline {
    Pipeline::from_config(&Config::default(), &mut SequenceJitter::zero())
        .run_str(text)
        .unwrap()
}

#[test]
fn every_track_has_exactly_one_start_keyframe() {
    let timeline = build(&load_fixture("motion.csv"));

    for track in timeline.tracks() {
        let at_zero = track.keyframes().iter().filter(|k| k.time == 0.0).count();
        assert_eq!(at_zero, 1, "{} has {} time-0 keyframes", track.id(), at_zero);
    }
}

#[test]
fn keyframe_times_are_unique_per_track() {
    let timeline = build(&load_fixture("motion.csv"));

    for track in timeline.tracks() {
        let mut times: Vec<u64> = track.keyframes().iter().map(|k| k.time.to_bits()).collect();
        let before = times.len();
        times.sort_unstable();
        times.dedup();
        assert_eq!(times.len(), before);
    }
}

#[test]
fn synthesized_start_keyframes_are_hidden_clones() {
    let timeline = build(&load_fixture("motion.csv"));
    let tracks = timeline.tracks();

    // P1 holds the time origin, so its real first sample is at 0
    assert!(tracks[0].keyframe_at(0.0).unwrap().should_render);

    for track in &tracks[1..] {
        let start = track.keyframe_at(0.0).unwrap();
        let first_real = track
            .keyframes()
            .iter()
            .filter(|k| k.time > 0.0)
            .min_by(|a, b| a.time.total_cmp(&b.time))
            .unwrap();

        assert!(!start.should_render);
        assert_eq!((start.x, start.y), (first_real.x, first_real.y));
        assert_eq!(start.markers, first_real.markers);
    }
}

#[test]
fn relative_times_span_entities() {
    let timeline = build("A;0;x;0;100\nB;0;x;0;250\n");
    let b = &timeline.tracks()[1];

    assert!(b.has_keyframe_at(150.0));
    assert_eq!(timeline.duration(), 150.0);
}

#[test]
fn comma_decimals_are_accepted() {
    let timeline = build("D1;1,5;ignored;2,5;100\n");
    assert_eq!(timeline.track_count(), 1);
    assert_eq!(timeline.tracks()[0].entity_id(), "D1");
}

#[test]
fn empty_input_produces_no_timeline() {
    let err = Pipeline::from_config(&Config::default(), &mut SequenceJitter::zero())
        .run_str("\n   \n")
        .unwrap_err();
    assert!(matches!(err, PipelineError::EmptyDataset));
}

#[test]
fn codec_round_trip_is_exact() {
    let mut jitter = RngJitter::seeded(11);
    let timeline = Pipeline::from_config(&Config::default(), &mut jitter)
        .run_str(&load_fixture("motion.csv"))
        .unwrap();

    let json = timeline.to_json().unwrap();
    assert_eq!(Timeline::from_json(&json).unwrap(), timeline);
}

#[test]
fn late_entity_appears_during_playback() {
    let timeline = build(&load_fixture("motion.csv"));
    let mut player = Player::new(timeline, 1.0);

    // only P1 is visible at the start; P2 and P3 start hidden
    assert_eq!(player.frame().entities.len(), 1);

    player.signal(ControlSignal::PlayPause);
    player.tick(100.0);
    assert_eq!(player.frame().entities.len(), 2);

    player.tick(250.0);
    assert_eq!(player.frame().entities.len(), 3);

    assert!(player.tick(100.0));
    assert!(player.state().completed);
}
