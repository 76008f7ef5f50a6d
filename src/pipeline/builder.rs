//! Keyframe track construction from normalized paths.

use super::markers::{JitterSource, MarkerSynthesizer};
use super::normalize::NormalizedPath;
use crate::timeline::{Keyframe, Timeline, TrackId};

/// Build one entity's track and register it in the timeline.
///
/// Samples are visited in arrival order. A sample whose time already has a
/// keyframe is skipped without drawing markers. Afterwards a hidden start
/// keyframe is added if the entity has no sample at time 0.
pub fn build_track(
    timeline: &mut Timeline,
    path: &NormalizedPath,
    synthesizer: &MarkerSynthesizer,
    jitter: &mut dyn JitterSource,
) -> TrackId {
    let mut track = timeline.new_track(path.entity_id.as_str());
    let mut duplicates = 0usize;

    for sample in &path.samples {
        if track.has_keyframe_at(sample.relative_time) {
            duplicates += 1;
            continue;
        }
        let markers = synthesizer.synthesize(jitter);
        track.insert(Keyframe::new(sample.relative_time, sample.x, sample.y, markers));
    }

    if duplicates > 0 {
        tracing::debug!(
            entity = %path.entity_id,
            duplicates,
            "Suppressed keyframes at duplicate times"
        );
    }
    if track.ensure_start_keyframe() {
        tracing::debug!(entity = %path.entity_id, "Synthesized hidden start keyframe");
    }

    let id = track.id();
    timeline.add_track(track);
    id
}

/// Build a timeline with one track per entity, in path order.
pub fn build_timeline(
    paths: &[NormalizedPath],
    synthesizer: &MarkerSynthesizer,
    jitter: &mut dyn JitterSource,
) -> Timeline {
    let mut timeline = Timeline::new();
    for path in paths {
        build_track(&mut timeline, path, synthesizer, jitter);
    }
    timeline
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::markers::SequenceJitter;
    use crate::pipeline::normalize::NormalizedSample;
    use crate::pipeline::MARKER_COUNT;

    fn path(entity: &str, samples: &[(f64, f64, f64)]) -> NormalizedPath {
        NormalizedPath {
            entity_id: entity.to_string(),
            samples: samples
                .iter()
                .map(|&(x, y, relative_time)| NormalizedSample { x, y, relative_time })
                .collect(),
        }
    }

    fn synth() -> MarkerSynthesizer {
        MarkerSynthesizer::new([40.0; MARKER_COUNT], -5, 5)
    }

    #[test]
    fn builds_one_track_per_entity_in_order() {
        let paths = vec![
            path("B", &[(1.0, 1.0, 0.0)]),
            path("A", &[(2.0, 2.0, 10.0)]),
        ];
        let timeline = build_timeline(&paths, &synth(), &mut SequenceJitter::zero());

        let entities: Vec<_> = timeline.tracks().iter().map(|t| t.entity_id()).collect();
        assert_eq!(entities, vec!["B", "A"]);
        assert_ne!(timeline.tracks()[0].id(), timeline.tracks()[1].id());
    }

    #[test]
    fn duplicate_times_keep_first_sample_and_draw_no_markers() {
        let paths = vec![path(
            "A",
            &[(1.0, 1.0, 0.0), (2.0, 2.0, 5.0), (3.0, 3.0, 5.0)],
        )];
        let mut jitter = SequenceJitter::zero();
        let timeline = build_timeline(&paths, &synth(), &mut jitter);

        let track = &timeline.tracks()[0];
        assert_eq!(track.len(), 2);
        assert_eq!(track.keyframe_at(5.0).unwrap().x, 2.0);
        assert_eq!(jitter.drawn(), 2 * MARKER_COUNT);
    }

    #[test]
    fn synthesizes_hidden_start_from_earliest_keyframe() {
        let paths = vec![path("A", &[(9.0, 9.0, 300.0), (4.0, 4.0, 150.0)])];
        let mut jitter = SequenceJitter::new((0..20).map(|i: i32| i % 11 - 5).collect::<Vec<_>>());
        let timeline = build_timeline(&paths, &synth(), &mut jitter);

        let track = &timeline.tracks()[0];
        let start = track.keyframe_at(0.0).unwrap();
        let earliest = track.keyframe_at(150.0).unwrap();

        assert!(!start.should_render);
        assert_eq!((start.x, start.y), (earliest.x, earliest.y));
        assert_eq!(start.markers, earliest.markers);
        // start keyframe is appended after the real ones
        assert_eq!(track.keyframes().last().unwrap().time, 0.0);
    }

    #[test]
    fn natural_zero_keyframe_stays_visible() {
        let paths = vec![path("A", &[(1.0, 1.0, 0.0), (2.0, 2.0, 10.0)])];
        let timeline = build_timeline(&paths, &synth(), &mut SequenceJitter::zero());

        let track = &timeline.tracks()[0];
        assert_eq!(track.len(), 2);
        assert!(track.keyframe_at(0.0).unwrap().should_render);
    }

    #[test]
    fn markers_follow_injected_jitter() {
        let paths = vec![path("A", &[(0.0, 0.0, 0.0)])];
        let mut jitter = SequenceJitter::new(vec![1, 2, 3, 4, 5, -1, -2, -3, -4, -5]);
        let timeline = build_timeline(&paths, &synth(), &mut jitter);

        let markers = timeline.tracks()[0].keyframes()[0].markers;
        assert_eq!(
            markers.0,
            [41.0, 42.0, 43.0, 44.0, 45.0, 39.0, 38.0, 37.0, 36.0, 35.0]
        );
    }
}
