//! Gesture-stage tracker: the imperative shell around [`step`].

use super::ports::{HandPoseSource, NotificationSink};
use crate::config::TrackerSettings;
use crate::core::{step, Level, LevelHistory, LevelTransition, StepResult, TrackerState};
use chrono::Utc;
use tracing::{debug, warn};
use uuid::Uuid;

/// Tracks a hand through an ordered sequence of gesture stages.
///
/// Owns its pose source and notification sink. Each call to
/// [`tick`](Self::tick) takes one observation, applies the pure [`step`]
/// rule and notifies the sink when the level changes.
pub struct GestureStageTracker<P, N> {
    id: Uuid,
    settings: TrackerSettings,
    state: TrackerState,
    history: LevelHistory,
    ticks: u64,
    source: P,
    sink: N,
}

impl<P: HandPoseSource, N: NotificationSink> GestureStageTracker<P, N> {
    /// Create an activated tracker in the reset state.
    pub fn new(settings: TrackerSettings, source: P, sink: N) -> Self {
        Self {
            id: Uuid::new_v4(),
            settings,
            state: TrackerState::new(),
            history: LevelHistory::new(),
            ticks: 0,
            source,
            sink,
        }
    }

    /// Run one poll tick.
    pub fn tick(&mut self) -> StepResult {
        let observation = self.source.observe();
        self.ticks += 1;

        let (next, result) = step(self.settings.stages(), self.state, observation.as_ref());
        self.apply(next, result);
        result
    }

    /// Apply a step result: record and notify, then adopt the new state.
    fn apply(&mut self, next: TrackerState, result: StepResult) {
        let previous = self.state;
        self.state = next;

        if let Some(entered) = result.entered_level() {
            self.history = self.history.record(LevelTransition {
                from: previous.level,
                to: entered,
                timestamp: Utc::now(),
                tick: self.ticks,
            });
            debug!(
                tracker = %self.id,
                tick = self.ticks,
                from = %previous.level,
                to = %entered,
                "Gesture level changed"
            );

            match self.settings.codes().code_for(entered) {
                Some(code) => self.sink.on_stage_changed(code),
                None => warn!(tracker = %self.id, level = %entered, "No stage code for level"),
            }
        }

        match (previous.active, next.active) {
            (false, true) => self.sink.on_activated(),
            (true, false) => self.sink.on_deactivated(),
            _ => {}
        }
    }

    /// Deactivate the tracker, discarding its runtime state.
    ///
    /// Fires `on_deactivated` if the tracker was active. No stage code is
    /// emitted. Returns whether it was active.
    pub fn deactivate(&mut self) -> bool {
        let was_active = self.state.active;
        self.state = TrackerState::new();
        if was_active {
            self.sink.on_deactivated();
        }
        debug!(tracker = %self.id, was_active, "Gesture tracker deactivated");
        was_active
    }
}

impl<P, N> GestureStageTracker<P, N> {
    /// Identifier attached to this tracker's log records.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn level(&self) -> Level {
        self.state.level
    }

    /// Numeric level: `-1` reset, `0..N-1` at a stage, `N` completed.
    pub fn level_index(&self) -> isize {
        self.state
            .level
            .index(self.settings.stages().stage_count())
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn settings(&self) -> &TrackerSettings {
        &self.settings
    }

    pub fn history(&self) -> &LevelHistory {
        &self.history
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn source(&self) -> &P {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut P {
        &mut self.source
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut N {
        &mut self.sink
    }

    pub fn into_parts(self) -> (P, N) {
        (self.source, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TrackerBuilder;
    use crate::core::HandPose;
    use crate::effects::Notification;

    const POINT: HandPose = HandPose::new([false, true, false, false, false]);
    const FOUR: HandPose = HandPose::new([false, true, true, true, true]);

    type TestTracker = GestureStageTracker<Option<HandPose>, Vec<Notification>>;

    fn tracker() -> TestTracker {
        TrackerBuilder::new()
            .stages(crate::gesture_stages![
                [NotExtended, Extended, NotExtended, NotExtended, NotExtended],
                [NotExtended, Extended, Extended, Extended, Extended],
            ])
            .build(None, Vec::new())
            .unwrap()
    }

    fn tick_with(tracker: &mut TestTracker, observation: Option<HandPose>) -> StepResult {
        *tracker.source_mut() = observation;
        tracker.tick()
    }

    fn codes(tracker: &TestTracker) -> Vec<&str> {
        tracker.sink().iter().filter_map(Notification::code).collect()
    }

    #[test]
    fn pointing_then_four_fingers_completes() {
        let mut tracker = tracker();

        tick_with(&mut tracker, Some(POINT));
        assert_eq!(tracker.level_index(), 0);
        assert_eq!(codes(&tracker), ["stage-0"]);

        tick_with(&mut tracker, Some(POINT));
        assert_eq!(tracker.level_index(), 1);
        assert_eq!(codes(&tracker), ["stage-0", "stage-1"]);

        tick_with(&mut tracker, Some(FOUR));
        assert_eq!(tracker.level_index(), 2);
        assert_eq!(codes(&tracker), ["stage-0", "stage-1", "complete"]);

        let result = tick_with(&mut tracker, Some(FOUR));
        assert_eq!(result, StepResult::Held);
        assert_eq!(tracker.level_index(), 2);
        assert_eq!(codes(&tracker).len(), 3);
        assert!(tracker.is_active());
    }

    #[test]
    fn at_most_one_stage_notification_per_tick() {
        let mut tracker = tracker();

        for observation in [Some(POINT), Some(POINT), Some(FOUR), None, Some(FOUR)] {
            let before = codes(&tracker).len();
            let result = tick_with(&mut tracker, observation);
            let emitted = codes(&tracker).len() - before;

            assert!(emitted <= 1);
            assert_eq!(emitted == 1, result.is_transition());
        }
    }

    #[test]
    fn mismatch_emits_nothing_and_keeps_level() {
        let mut tracker = tracker();
        tick_with(&mut tracker, Some(POINT));
        let before = tracker.sink().len();

        for _ in 0..10 {
            let result = tick_with(&mut tracker, Some(HandPose::fist()));
            assert_eq!(result, StepResult::Unmatched);
        }

        assert_eq!(tracker.level(), Level::Stage(0));
        assert_eq!(tracker.sink().len(), before);
    }

    #[test]
    fn losing_the_hand_resets_once() {
        let mut tracker = tracker();
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(POINT));
        assert!(tracker.is_active());

        tick_with(&mut tracker, None);
        tick_with(&mut tracker, None);
        tick_with(&mut tracker, None);

        assert_eq!(tracker.level_index(), -1);
        assert_eq!(codes(&tracker), ["stage-0", "stage-1", "reset"]);
        assert_eq!(
            tracker.sink().last(),
            Some(&Notification::Deactivated),
            "reset code is followed by the deactivated signal"
        );
    }

    #[test]
    fn untracked_start_emits_nothing() {
        let mut tracker = tracker();
        for _ in 0..5 {
            tick_with(&mut tracker, None);
        }

        assert!(tracker.sink().is_empty());
        assert!(tracker.history().is_empty());
        assert_eq!(tracker.ticks(), 5);
    }

    #[test]
    fn reacquiring_after_reset_starts_from_first_stage() {
        let mut tracker = tracker();
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, None);

        let result = tick_with(&mut tracker, Some(FOUR));

        assert_eq!(result, StepResult::Initialized);
        assert_eq!(tracker.level(), Level::Stage(0));
        assert_eq!(codes(&tracker).last(), Some(&"stage-0"));
    }

    #[test]
    fn activation_signals_follow_the_active_flag() {
        let mut tracker = tracker();
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(FOUR));

        assert_eq!(
            tracker.sink().as_slice(),
            &[
                Notification::StageChanged("stage-0".to_string()),
                Notification::StageChanged("stage-1".to_string()),
                Notification::Activated,
                Notification::Deactivated,
                Notification::StageChanged("complete".to_string()),
                Notification::Activated,
            ]
        );
    }

    #[test]
    fn completion_is_notified_once_per_run() {
        let mut tracker = tracker();
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(POINT));
        for _ in 0..20 {
            tick_with(&mut tracker, Some(FOUR));
        }

        let completions = codes(&tracker).iter().filter(|&&c| c == "complete").count();
        assert_eq!(completions, 1);
        assert_eq!(tracker.history().completions(), 1);
    }

    #[test]
    fn history_records_path_and_ticks() {
        let mut tracker = tracker();
        tick_with(&mut tracker, None);
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(FOUR));
        tick_with(&mut tracker, None);

        let history = tracker.history();
        assert_eq!(
            history.get_path(),
            vec![
                Level::Reset,
                Level::Stage(0),
                Level::Stage(1),
                Level::Completed,
                Level::Reset
            ]
        );
        let ticks: Vec<u64> = history.transitions().iter().map(|t| t.tick).collect();
        assert_eq!(ticks, [2, 3, 4, 5]);
    }

    #[test]
    fn deactivate_signals_only_when_active() {
        let mut tracker = tracker();
        tick_with(&mut tracker, Some(POINT));
        assert!(!tracker.deactivate());
        assert_eq!(tracker.sink().len(), 1);

        tick_with(&mut tracker, Some(POINT));
        tick_with(&mut tracker, Some(POINT));
        assert!(tracker.is_active());
        let before = tracker.sink().len();

        assert!(tracker.deactivate());
        assert_eq!(tracker.sink().len(), before + 1);
        assert_eq!(tracker.sink().last(), Some(&Notification::Deactivated));
        assert_eq!(tracker.state(), TrackerState::new());
    }

    #[test]
    fn trackers_get_distinct_ids() {
        assert_ne!(tracker().id(), tracker().id());
    }
}
