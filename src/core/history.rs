//! Level transition history.
//!
//! Provides immutable tracking of a tracker's level changes over time,
//! following functional programming principles.

use super::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single level change.
///
/// # Example
///
/// ```rust
/// use gesture_stage::core::{Level, LevelTransition};
/// use chrono::Utc;
///
/// let transition = LevelTransition {
///     from: Level::Reset,
///     to: Level::Stage(0),
///     timestamp: Utc::now(),
///     tick: 1,
/// };
/// assert!(transition.is_reset_exit());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelTransition {
    /// The level being left
    pub from: Level,
    /// The level being entered
    pub to: Level,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Poll tick (1-based) that produced the transition
    pub tick: u64,
}

impl LevelTransition {
    /// Tracking (re)acquired: leaving `Reset`.
    pub fn is_reset_exit(&self) -> bool {
        self.from.is_reset() && !self.to.is_reset()
    }

    /// The sequence was just completed.
    pub fn is_completion(&self) -> bool {
        self.to.is_final() && !self.from.is_final()
    }
}

/// Ordered history of level transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use gesture_stage::core::{Level, LevelHistory, LevelTransition};
/// use chrono::Utc;
///
/// let history = LevelHistory::new()
///     .record(LevelTransition {
///         from: Level::Reset,
///         to: Level::Stage(0),
///         timestamp: Utc::now(),
///         tick: 1,
///     })
///     .record(LevelTransition {
///         from: Level::Stage(0),
///         to: Level::Completed,
///         timestamp: Utc::now(),
///         tick: 2,
///     });
///
/// assert_eq!(history.get_path(), vec![Level::Reset, Level::Stage(0), Level::Completed]);
/// assert_eq!(history.completions(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelHistory {
    transitions: Vec<LevelTransition>,
}

impl LevelHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: LevelTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of levels traversed.
    ///
    /// Returns the starting level, then the `to` level of each transition.
    pub fn get_path(&self) -> Vec<Level> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        path.extend(self.transitions.iter().map(|t| t.to));
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// How many times the sequence was completed.
    pub fn completions(&self) -> usize {
        self.transitions.iter().filter(|t| t.is_completion()).count()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[LevelTransition] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&LevelTransition> {
        self.transitions.last()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }
}
