//! Tracker levels and the mutable per-tracker state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position of a tracker within its stage sequence.
///
/// Numerically a level is `-1` ([`Level::Reset`]), `0..N-1`
/// ([`Level::Stage`]) or `N` ([`Level::Completed`]) for a sequence of
/// `N` stages.
///
/// # Example
///
/// ```rust
/// use gesture_stage::core::Level;
///
/// assert_eq!(Level::Reset.index(3), -1);
/// assert_eq!(Level::Stage(1).index(3), 1);
/// assert_eq!(Level::Completed.index(3), 3);
/// assert!(Level::Completed.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Level {
    /// No hand tracked, or tracking was lost.
    #[default]
    Reset,
    /// The hand is expected to satisfy stage `L` next.
    Stage(usize),
    /// Every stage has been passed; held while the last stage keeps matching.
    Completed,
}

impl Level {
    /// Numeric level for a sequence of `stage_count` stages.
    pub fn index(self, stage_count: usize) -> isize {
        match self {
            Self::Reset => -1,
            Self::Stage(l) => l as isize,
            Self::Completed => stage_count as isize,
        }
    }

    /// Inverse of [`Level::index`]. Returns `None` outside `-1..=stage_count`.
    pub fn from_index(index: isize, stage_count: usize) -> Option<Self> {
        match index {
            -1 => Some(Self::Reset),
            i if i >= 0 && (i as usize) < stage_count => Some(Self::Stage(i as usize)),
            i if i >= 0 && i as usize == stage_count => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn is_reset(self) -> bool {
        matches!(self, Self::Reset)
    }

    /// Terminal level: all stages passed.
    pub fn is_final(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reset => write!(f, "reset"),
            Self::Stage(l) => write!(f, "stage {l}"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Runtime state of one tracker.
///
/// Created fresh (reset, inactive) when a tracker activates and replaced
/// once per poll tick. Never shared between trackers.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct TrackerState {
    /// Current level.
    pub level: Level,
    /// Whether the most recent tick satisfied the current requirement.
    pub active: bool,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }
}
