//! Gesture Stage: staged hand-gesture tracking
//!
//! A tracker walks a hand through an ordered sequence of gesture stages.
//! Each stage asks for a particular set of fingers to be extended, curled
//! or left alone. On every poll tick the tracker reads the current hand
//! pose, and when the pose satisfies the current stage it moves to the
//! next one and sends that level's code to a notification sink (which can
//! drive a serial device, play a sound, and so on).
//!
//! The crate follows a "pure core, imperative shell" layout: the stage
//! matcher and progression rule in [`core`](crate::core) are pure functions, while
//! [`effects`] owns the collaborators and the periodic poll loop.
//!
//! # Core Concepts
//!
//! - **Stage**: five per-finger requirements (`Extended`, `NotExtended`, `Either`)
//! - **Level**: `Reset`, `Stage(L)` or `Completed`
//! - **Notification**: one code per level transition, never repeated while the level holds
//!
//! # Example
//!
//! ```rust
//! use gesture_stage::builder::TrackerBuilder;
//! use gesture_stage::core::{HandPose, Level};
//! use gesture_stage::effects::Notification;
//! use gesture_stage::gesture_stages;
//!
//! let mut tracker = TrackerBuilder::new()
//!     .stages(gesture_stages![
//!         [NotExtended, Extended, NotExtended, NotExtended, NotExtended],
//!         [NotExtended, Extended, Extended, Extended, Extended],
//!     ])
//!     .build(Some(HandPose::new([false, true, false, false, false])), Vec::<Notification>::new())
//!     .unwrap();
//!
//! tracker.tick(); // hand found: stage 0
//! tracker.tick(); // pointing: stage 1
//! *tracker.source_mut() = Some(HandPose::new([false, true, true, true, true]));
//! tracker.tick(); // four fingers: completed
//!
//! assert_eq!(tracker.level(), Level::Completed);
//! let codes: Vec<_> = tracker.sink().iter().filter_map(Notification::code).collect();
//! assert_eq!(codes, ["stage-0", "stage-1", "complete"]);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;

// Re-export commonly used types
pub use builder::TrackerBuilder;
pub use config::{ConfigError, TrackerConfig};
pub use self::core::{FingerRequirement, GestureStage, HandPose, Level, StageSequence};
pub use effects::{
    GestureStageTracker, HandPoseSource, Notification, NotificationSink, TrackerError,
};
