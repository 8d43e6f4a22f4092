//! Property-based tests for the stage matcher and tracker.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated stage sequences and observation streams.

use gesture_stage::builder::TrackerBuilder;
use gesture_stage::core::{
    step, FingerRequirement, GestureStage, HandPose, Level, StageSequence, StepResult,
    TrackerState,
};
use gesture_stage::effects::{GestureStageTracker, Notification};
use proptest::prelude::*;

type TestTracker = GestureStageTracker<Option<HandPose>, Vec<Notification>>;

prop_compose! {
    fn arbitrary_requirement()(variant in 0..3u8) -> FingerRequirement {
        match variant {
            0 => FingerRequirement::Extended,
            1 => FingerRequirement::NotExtended,
            _ => FingerRequirement::Either,
        }
    }
}

prop_compose! {
    fn arbitrary_stage()(requirements in prop::array::uniform5(arbitrary_requirement())) -> GestureStage {
        GestureStage::new(requirements)
    }
}

prop_compose! {
    fn arbitrary_pose()(bits in 0..32u8) -> HandPose {
        HandPose::from_bits(bits)
    }
}

fn arbitrary_observation() -> impl Strategy<Value = Option<HandPose>> {
    prop::option::weighted(0.85, arbitrary_pose())
}

fn tracker_for(stages: Vec<GestureStage>) -> TestTracker {
    TrackerBuilder::new()
        .stages(stages)
        .build(None, Vec::new())
        .unwrap()
}

fn stage_codes(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| n.code().is_some()).count()
}

proptest! {
    #[test]
    fn matcher_is_a_per_finger_and(stage in arbitrary_stage(), pose in arbitrary_pose()) {
        let expected = stage
            .requirements()
            .iter()
            .zip(pose.extended())
            .all(|(requirement, extended)| match requirement {
                FingerRequirement::Either => true,
                FingerRequirement::Extended => extended,
                FingerRequirement::NotExtended => !extended,
            });
        prop_assert_eq!(stage.matches(&pose), expected);
    }

    #[test]
    fn step_is_deterministic(
        stages in prop::collection::vec(arbitrary_stage(), 1..4),
        observation in arbitrary_observation(),
        level_index in -1isize..4,
        active in any::<bool>(),
    ) {
        let sequence = StageSequence::new(stages).unwrap();
        let level = Level::from_index(level_index, sequence.stage_count()).unwrap_or(Level::Reset);
        let state = TrackerState { level, active };

        let first = step(&sequence, state, observation.as_ref());
        let second = step(&sequence, state, observation.as_ref());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn level_moves_up_by_one_resets_or_holds(
        stages in prop::collection::vec(arbitrary_stage(), 1..4),
        observations in prop::collection::vec(arbitrary_observation(), 1..40),
    ) {
        let mut tracker = tracker_for(stages);

        for observation in observations {
            let before = tracker.level_index();
            *tracker.source_mut() = observation;
            tracker.tick();
            let after = tracker.level_index();

            prop_assert!(
                after == before || after == before + 1 || after == -1,
                "level jumped from {} to {}", before, after
            );
        }
    }

    #[test]
    fn one_stage_code_per_transition(
        stages in prop::collection::vec(arbitrary_stage(), 1..4),
        observations in prop::collection::vec(arbitrary_observation(), 1..40),
    ) {
        let mut tracker = tracker_for(stages);

        for observation in observations {
            let level_before = tracker.level();
            let codes_before = stage_codes(tracker.sink());

            *tracker.source_mut() = observation;
            let result = tracker.tick();

            let emitted = stage_codes(tracker.sink()) - codes_before;
            let changed = tracker.level() != level_before;
            prop_assert_eq!(emitted, usize::from(changed));
            prop_assert_eq!(result.is_transition(), changed);
        }

        prop_assert_eq!(stage_codes(tracker.sink()), tracker.history().len());
    }

    #[test]
    fn completion_code_matches_recorded_completions(
        stages in prop::collection::vec(arbitrary_stage(), 1..3),
        observations in prop::collection::vec(arbitrary_observation(), 1..60),
    ) {
        let mut tracker = tracker_for(stages);
        for observation in observations {
            *tracker.source_mut() = observation;
            tracker.tick();
        }

        let completes = tracker
            .sink()
            .iter()
            .filter(|n| n.code() == Some("complete"))
            .count();
        prop_assert_eq!(completes, tracker.history().completions());
    }

    #[test]
    fn exact_poses_walk_every_level_in_order(
        poses in prop::collection::vec(arbitrary_pose(), 1..5),
    ) {
        let stages: Vec<GestureStage> = poses.iter().map(GestureStage::exact).collect();
        let mut tracker = tracker_for(stages);

        *tracker.source_mut() = Some(poses[0]);
        prop_assert_eq!(tracker.tick(), StepResult::Initialized);

        for (i, pose) in poses.iter().enumerate() {
            *tracker.source_mut() = Some(*pose);
            prop_assert!(matches!(tracker.tick(), StepResult::Advanced { .. }), "expected StepResult::Advanced");
            prop_assert_eq!(tracker.level_index(), i as isize + 1);
        }

        prop_assert_eq!(tracker.level(), Level::Completed);
        prop_assert_eq!(stage_codes(tracker.sink()), poses.len() + 1);
    }

    #[test]
    fn untracked_ticks_after_reset_are_silent(
        stages in prop::collection::vec(arbitrary_stage(), 1..4),
        warmup in prop::collection::vec(arbitrary_observation(), 0..20),
        idle in 1usize..20,
    ) {
        let mut tracker = tracker_for(stages);
        for observation in warmup {
            *tracker.source_mut() = observation;
            tracker.tick();
        }

        *tracker.source_mut() = None;
        tracker.tick();
        let settled = tracker.sink().len();

        for _ in 0..idle {
            prop_assert_eq!(tracker.tick(), StepResult::Untracked { reset: false });
        }
        prop_assert_eq!(tracker.sink().len(), settled);
        prop_assert_eq!(tracker.level(), Level::Reset);
    }
}
