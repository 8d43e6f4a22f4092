//! Core gesture-stage types and logic.
//!
//! This module contains the pure functional core of the tracker:
//! - Fingers, requirements and observed poses
//! - Gesture stages, the finger-state matcher and stage sequences
//! - Levels, the pure `step` rule and immutable transition history
//!
//! Nothing in this module performs I/O. Polling a hand-pose source and
//! notifying sinks lives in [`crate::effects`].

mod codes;
mod finger;
mod history;
mod level;
mod stage;
mod step;

pub use codes::{StageCodes, DEFAULT_COMPLETED_CODE, DEFAULT_RESET_CODE};
pub use finger::{Finger, FingerRequirement, HandPose, FINGER_COUNT};
pub use history::{LevelHistory, LevelTransition};
pub use level::{Level, TrackerState};
pub use stage::{matches, GestureStage, StageSequence};
pub use step::{step, StepResult};
