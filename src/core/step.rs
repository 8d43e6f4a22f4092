//! The stage-progression rule, as a pure function.
//!
//! [`step`] takes the current [`TrackerState`] and one observation and
//! returns the next state plus a [`StepResult`] saying which rule fired.
//! It performs no I/O; the tracker shell applies the result and notifies.

use super::finger::HandPose;
use super::level::{Level, TrackerState};
use super::stage::StageSequence;

/// Which rule a poll tick took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// No hand was tracked. `reset` is true if the level changed to `Reset`.
    Untracked { reset: bool },

    /// A hand appeared while reset; the level entered the first stage.
    Initialized,

    /// The pose satisfied the current stage and the level moved up by one.
    Advanced { from: Level, to: Level },

    /// Already completed and the pose still satisfies the last stage.
    Held,

    /// The pose did not satisfy the current stage.
    Unmatched,
}

impl StepResult {
    /// Level entered by this step, if the level changed.
    pub fn entered_level(&self) -> Option<Level> {
        match *self {
            Self::Untracked { reset: true } => Some(Level::Reset),
            Self::Initialized => Some(Level::Stage(0)),
            Self::Advanced { to, .. } => Some(to),
            Self::Untracked { reset: false } | Self::Held | Self::Unmatched => None,
        }
    }

    /// Whether the level changed.
    pub fn is_transition(&self) -> bool {
        self.entered_level().is_some()
    }
}

/// Compute the next tracker state from one observation (pure).
///
/// At most one level transition happens per call. Entering from `Reset`
/// only initializes the first stage; the pose is matched on the next call.
///
/// # Example
///
/// ```rust
/// use gesture_stage::core::{step, GestureStage, HandPose, Level, StageSequence, StepResult, TrackerState};
///
/// let stages = StageSequence::new(vec![GestureStage::exact(&HandPose::open())]).unwrap();
/// let pose = HandPose::open();
///
/// let (state, result) = step(&stages, TrackerState::new(), Some(&pose));
/// assert_eq!(result, StepResult::Initialized);
///
/// let (state, result) = step(&stages, state, Some(&pose));
/// assert_eq!(result, StepResult::Advanced { from: Level::Stage(0), to: Level::Completed });
/// assert!(state.active);
///
/// let (state, result) = step(&stages, state, None);
/// assert_eq!(result, StepResult::Untracked { reset: true });
/// assert_eq!(state, TrackerState::new());
/// ```
pub fn step(
    stages: &StageSequence,
    state: TrackerState,
    observation: Option<&HandPose>,
) -> (TrackerState, StepResult) {
    let Some(pose) = observation else {
        let next = TrackerState {
            level: Level::Reset,
            active: false,
        };
        return (
            next,
            StepResult::Untracked {
                reset: !state.level.is_reset(),
            },
        );
    };

    let Some(required) = stages.requirement_for(state.level) else {
        let next = TrackerState {
            level: Level::Stage(0),
            active: state.active,
        };
        return (next, StepResult::Initialized);
    };

    if !required.matches(pose) {
        let next = TrackerState {
            active: false,
            ..state
        };
        return (next, StepResult::Unmatched);
    }

    let level = stages.advance(state.level);
    let next = TrackerState {
        level,
        active: true,
    };
    let result = if level == state.level {
        StepResult::Held
    } else {
        StepResult::Advanced {
            from: state.level,
            to: level,
        }
    };
    (next, result)
}
