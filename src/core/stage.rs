//! Gesture stages and the finger-state matcher.
//!
//! A [`GestureStage`] holds one requirement per finger. Matching a pose
//! against a stage is a pure AND over the five fingers, so it is cheap
//! enough to run on every poll tick.

use super::finger::{Finger, FingerRequirement, HandPose, FINGER_COUNT};
use super::level::Level;
use crate::config::{ConfigError, ConfigViolation};
use serde::{Deserialize, Serialize};

/// Five per-finger requirements, thumb first.
///
/// # Example
///
/// ```rust
/// use gesture_stage::core::{FingerRequirement::*, GestureStage, HandPose};
///
/// let point = GestureStage::new([NotExtended, Extended, NotExtended, NotExtended, NotExtended]);
///
/// assert!(point.matches(&HandPose::new([false, true, false, false, false])));
/// assert!(!point.matches(&HandPose::open()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GestureStage {
    requirements: [FingerRequirement; FINGER_COUNT],
}

impl GestureStage {
    pub const fn new(requirements: [FingerRequirement; FINGER_COUNT]) -> Self {
        Self { requirements }
    }

    /// A stage satisfied by exactly one pose.
    pub fn exact(pose: &HandPose) -> Self {
        let mut requirements = [FingerRequirement::Either; FINGER_COUNT];
        for finger in Finger::ALL {
            requirements[finger.index()] = FingerRequirement::exactly(pose.is_extended(finger));
        }
        Self { requirements }
    }

    /// A stage every pose satisfies.
    pub const fn any() -> Self {
        Self::new([FingerRequirement::Either; FINGER_COUNT])
    }

    pub fn requirement(&self, finger: Finger) -> FingerRequirement {
        self.requirements[finger.index()]
    }

    pub fn requirements(&self) -> &[FingerRequirement; FINGER_COUNT] {
        &self.requirements
    }

    /// Check whether `pose` satisfies every finger requirement (pure).
    pub fn matches(&self, pose: &HandPose) -> bool {
        Finger::ALL
            .iter()
            .all(|&finger| self.requirement(finger).is_satisfied_by(pose.is_extended(finger)))
    }
}

/// Free-function form of [`GestureStage::matches`] over raw flags.
pub fn matches(stage: &GestureStage, observed: [bool; FINGER_COUNT]) -> bool {
    stage.matches(&HandPose::new(observed))
}

/// Ordered, non-empty list of stages a tracker progresses through.
///
/// The sequence is fixed for the lifetime of a tracker. Construction
/// rejects an empty list, so every method can rely on at least one stage.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<GestureStage>", into = "Vec<GestureStage>")]
pub struct StageSequence {
    stages: Vec<GestureStage>,
}

impl StageSequence {
    pub fn new(stages: Vec<GestureStage>) -> Result<Self, ConfigError> {
        if stages.is_empty() {
            return Err(ConfigViolation::EmptyStages.into());
        }
        Ok(Self { stages })
    }

    /// Number of stages, `N`.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stages(&self) -> &[GestureStage] {
        &self.stages
    }

    pub fn get(&self, index: usize) -> Option<&GestureStage> {
        self.stages.get(index)
    }

    /// Requirement the hand must satisfy at `level`.
    ///
    /// `Completed` keeps using the last stage. `Reset` has no requirement,
    /// and neither does a stage index outside the sequence.
    pub fn requirement_for(&self, level: Level) -> Option<&GestureStage> {
        match level {
            Level::Reset => None,
            Level::Stage(l) => self.stages.get(l),
            Level::Completed => self.stages.last(),
        }
    }

    /// The level one step past `level`.
    ///
    /// Never skips: `Stage(L)` goes to `Stage(L + 1)` or, from the last
    /// stage, to `Completed`. `Completed` stays put and `Reset` enters the
    /// first stage.
    pub fn advance(&self, level: Level) -> Level {
        match level {
            Level::Reset => Level::Stage(0),
            Level::Stage(l) if l + 1 < self.stages.len() => Level::Stage(l + 1),
            Level::Stage(_) | Level::Completed => Level::Completed,
        }
    }
}

impl TryFrom<Vec<GestureStage>> for StageSequence {
    type Error = ConfigError;

    fn try_from(stages: Vec<GestureStage>) -> Result<Self, Self::Error> {
        Self::new(stages)
    }
}

impl From<StageSequence> for Vec<GestureStage> {
    fn from(sequence: StageSequence) -> Self {
        sequence.stages
    }
}
