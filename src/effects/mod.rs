//! Effectful tracker operations.
//!
//! This module provides the "imperative shell" around the pure core:
//! reading hand observations, notifying sinks and running the periodic
//! poll loop.
//!
//! # Key Concepts
//!
//! - **Ports**: `HandPoseSource` and `NotificationSink`, injected at construction
//! - **Tracker**: applies the pure `step` rule once per tick and records history
//! - **Poller**: a tokio task that ticks a tracker every period until stopped

mod error;
pub mod poller;
mod ports;
mod sinks;
mod tracker;

pub use error::TrackerError;
pub use poller::PollHandle;
pub use ports::{HandPoseSource, Notification, NotificationSink, SharedHandPose};
pub use sinks::WriterSink;
pub use tracker::GestureStageTracker;
