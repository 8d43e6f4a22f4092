//! Builder API for ergonomic tracker construction.
//!
//! This module provides a fluent builder and macros for declaring stage
//! sequences and trackers with minimal boilerplate while keeping every
//! configuration check in one place.

pub mod macros;
pub mod tracker;

pub use tracker::TrackerBuilder;

use crate::config::{ConfigError, TrackerConfig};
use crate::effects::{GestureStageTracker, HandPoseSource, NotificationSink};

/// Build a tracker straight from a JSON configuration document.
///
/// # Example
///
/// ```
/// use gesture_stage::builder::tracker_from_json;
/// use gesture_stage::core::{HandPose, Level};
/// use gesture_stage::effects::Notification;
///
/// let json = r#"{"stages": [["either", "either", "either", "either", "either"]]}"#;
/// let tracker = tracker_from_json(json, None::<HandPose>, Vec::<Notification>::new()).unwrap();
///
/// assert_eq!(tracker.level(), Level::Reset);
/// ```
pub fn tracker_from_json<P, N>(
    json: &str,
    source: P,
    sink: N,
) -> Result<GestureStageTracker<P, N>, ConfigError>
where
    P: HandPoseSource,
    N: NotificationSink,
{
    let config = TrackerConfig::from_json(json)?;
    TrackerBuilder::from_config(&config).build(source, sink)
}
