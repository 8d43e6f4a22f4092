//! Collaborator capabilities the tracker depends on.
//!
//! The tracker never talks to a tracking SDK, serial port or audio system
//! directly. It asks a [`HandPoseSource`] for observations and tells a
//! [`NotificationSink`] about level changes; both are injected at
//! construction.

use crate::core::{Finger, HandPose, FINGER_COUNT};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

/// Supplies hand observations on demand.
pub trait HandPoseSource {
    /// Whether a hand is currently tracked.
    fn is_hand_tracked(&self) -> bool;

    /// Whether `finger` is extended. Only meaningful while tracked.
    fn is_finger_extended(&self, finger: Finger) -> bool;

    /// Take one observation: `None` when no hand is tracked.
    ///
    /// Sources that can change between calls should override this to read
    /// all five fingers from one consistent snapshot.
    fn observe(&self) -> Option<HandPose> {
        if !self.is_hand_tracked() {
            return None;
        }
        let mut extended = [false; FINGER_COUNT];
        for finger in Finger::ALL {
            extended[finger.index()] = self.is_finger_extended(finger);
        }
        Some(HandPose::new(extended))
    }
}

/// A bare pose is a permanently tracked hand.
impl HandPoseSource for HandPose {
    fn is_hand_tracked(&self) -> bool {
        true
    }

    fn is_finger_extended(&self, finger: Finger) -> bool {
        self.is_extended(finger)
    }

    fn observe(&self) -> Option<HandPose> {
        Some(*self)
    }
}

/// `None` is an untracked hand.
impl HandPoseSource for Option<HandPose> {
    fn is_hand_tracked(&self) -> bool {
        self.is_some()
    }

    fn is_finger_extended(&self, finger: Finger) -> bool {
        self.is_some_and(|pose| pose.is_extended(finger))
    }

    fn observe(&self) -> Option<HandPose> {
        *self
    }
}

/// Latest-pose cell shared between a tracking callback and a tracker.
///
/// The tracking side calls [`SharedHandPose::publish`] whenever it gets a
/// new frame; the tracker reads the most recent value on each tick.
/// Clones share the same cell.
#[derive(Clone, Debug, Default)]
pub struct SharedHandPose {
    latest: Arc<Mutex<Option<HandPose>>>,
}

impl SharedHandPose {
    /// New cell with no hand tracked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the latest observation (`None` for tracking lost).
    pub fn publish(&self, observation: Option<HandPose>) {
        *self.lock() = observation;
    }

    pub fn set(&self, pose: HandPose) {
        self.publish(Some(pose));
    }

    pub fn clear(&self) {
        self.publish(None);
    }

    /// Copy of the latest observation.
    pub fn snapshot(&self) -> Option<HandPose> {
        *self.lock()
    }

    // A panicking writer can't leave a half-written `Option<HandPose>`.
    fn lock(&self) -> MutexGuard<'_, Option<HandPose>> {
        self.latest
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HandPoseSource for SharedHandPose {
    fn is_hand_tracked(&self) -> bool {
        self.snapshot().is_some()
    }

    fn is_finger_extended(&self, finger: Finger) -> bool {
        self.snapshot().is_some_and(|pose| pose.is_extended(finger))
    }

    fn observe(&self) -> Option<HandPose> {
        self.snapshot()
    }
}

/// Receives the tracker's level-change notifications.
///
/// Called synchronously from the poll tick. Delivery problems (an
/// unplugged serial device, say) are the sink's to handle; the tracker
/// does not wait for or check downstream effects.
pub trait NotificationSink {
    /// The tracker entered a new level; `code` identifies it.
    fn on_stage_changed(&mut self, code: &str);

    /// The current requirement started being satisfied.
    fn on_activated(&mut self) {}

    /// The current requirement stopped being satisfied, tracking was lost
    /// while active, or the tracker was stopped while active.
    fn on_deactivated(&mut self) {}
}

/// Owned form of a sink callback.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "code", rename_all = "kebab-case")]
pub enum Notification {
    StageChanged(String),
    Activated,
    Deactivated,
}

impl Notification {
    /// The stage code, for `StageChanged`.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::StageChanged(code) => Some(code),
            Self::Activated | Self::Deactivated => None,
        }
    }
}

/// Records every notification in order.
impl NotificationSink for Vec<Notification> {
    fn on_stage_changed(&mut self, code: &str) {
        self.push(Notification::StageChanged(code.to_string()));
    }

    fn on_activated(&mut self) {
        self.push(Notification::Activated);
    }

    fn on_deactivated(&mut self) {
        self.push(Notification::Deactivated);
    }
}

/// Forwards notifications to another task.
///
/// A closed receiver is not an error for the tracker; the notification is
/// dropped.
impl NotificationSink for mpsc::UnboundedSender<Notification> {
    fn on_stage_changed(&mut self, code: &str) {
        forward(self, Notification::StageChanged(code.to_string()));
    }

    fn on_activated(&mut self) {
        forward(self, Notification::Activated);
    }

    fn on_deactivated(&mut self) {
        forward(self, Notification::Deactivated);
    }
}

fn forward(tx: &mpsc::UnboundedSender<Notification>, notification: Notification) {
    if tx.send(notification).is_err() {
        tracing::debug!("Notification receiver closed, dropping notification");
    }
}
