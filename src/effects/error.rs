//! Runtime error types for the tracker shell.

use thiserror::Error;

/// Errors that can occur while running a tracker.
///
/// Ticks themselves never fail; only the task hosting the poll loop can.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Gesture poll task failed: {0}")]
    PollTaskFailed(#[from] tokio::task::JoinError),
}
