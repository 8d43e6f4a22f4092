//! Periodic poll loop driving a tracker on a tokio runtime.
//!
//! One task owns one tracker. Each period the task runs a single tick;
//! between ticks it only waits on the timer and the shutdown signal.

use super::error::TrackerError;
use super::ports::{HandPoseSource, NotificationSink};
use super::tracker::GestureStageTracker;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;
use uuid::Uuid;

/// Handle to a running poll loop.
///
/// Dropping the handle also stops the loop; the tracker is then
/// deactivated and dropped inside the task.
pub struct PollHandle<P, N> {
    tracker_id: Uuid,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<GestureStageTracker<P, N>>,
}

impl<P, N> PollHandle<P, N> {
    pub fn tracker_id(&self) -> Uuid {
        self.tracker_id
    }

    /// Whether the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop polling and get the deactivated tracker back.
    pub async fn stop(self) -> Result<GestureStageTracker<P, N>, TrackerError> {
        // Err means the loop already exited on its own.
        let _ = self.shutdown.send(());
        Ok(self.task.await?)
    }
}

/// Start polling `tracker` every configured period.
///
/// The first tick runs immediately. Must be called from within a tokio
/// runtime.
///
/// # Example
///
/// ```rust
/// use gesture_stage::builder::TrackerBuilder;
/// use gesture_stage::core::{GestureStage, HandPose, Level};
/// use gesture_stage::effects::{poller, Notification};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let tracker = TrackerBuilder::new()
///     .period(Duration::from_millis(10))
///     .stage(GestureStage::exact(&HandPose::open()))
///     .build(HandPose::open(), Vec::<Notification>::new())
///     .unwrap();
///
/// let handle = poller::spawn(tracker);
/// tokio::time::sleep(Duration::from_millis(50)).await;
///
/// let tracker = handle.stop().await.unwrap();
/// assert_eq!(tracker.level(), Level::Reset);
/// assert_eq!(tracker.history().completions(), 1);
/// # }
/// ```
pub fn spawn<P, N>(tracker: GestureStageTracker<P, N>) -> PollHandle<P, N>
where
    P: HandPoseSource + Send + 'static,
    N: NotificationSink + Send + 'static,
{
    let (shutdown, shutdown_rx) = oneshot::channel();
    let tracker_id = tracker.id();
    let task = tokio::spawn(run_poll_loop(tracker, shutdown_rx));

    PollHandle {
        tracker_id,
        shutdown,
        task,
    }
}

async fn run_poll_loop<P, N>(
    mut tracker: GestureStageTracker<P, N>,
    mut shutdown_rx: oneshot::Receiver<()>,
) -> GestureStageTracker<P, N>
where
    P: HandPoseSource,
    N: NotificationSink,
{
    let period = tracker.settings().period();
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        tracker = %tracker.id(),
        period_ms = period.as_millis() as u64,
        stages = tracker.settings().stages().stage_count(),
        "Gesture poller started"
    );

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown_rx => break,
            _ = interval.tick() => {
                tracker.tick();
            }
        }
    }

    tracker.deactivate();
    info!(
        tracker = %tracker.id(),
        ticks = tracker.ticks(),
        "Gesture poller stopped"
    );
    tracker
}
