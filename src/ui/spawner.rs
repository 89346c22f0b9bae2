use std::sync::mpsc::Sender;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::shutdown::ShutdownHandle;
use crate::task::BackgroundTask;
use crate::ui::events::AppEvent;

/// Sequence number of a press. Only used to correlate log lines.
pub type TaskId = u64;

/// Launches one [`BackgroundTask`] per press on the tokio runtime and posts
/// the result back to the UI loop as [`AppEvent::TaskCompleted`].
///
/// The join handle is dropped: nothing waits on a task, and overlapping
/// tasks race to deliver their result.
pub struct TaskSpawner {
    runtime: Handle,
    events: Sender<AppEvent>,
    delay: Duration,
    shutdown: ShutdownHandle,
    next_id: TaskId,
}

impl TaskSpawner {
    pub fn new(
        runtime: Handle,
        events: Sender<AppEvent>,
        delay: Duration,
        shutdown: ShutdownHandle,
    ) -> Self {
        Self {
            runtime,
            events,
            delay,
            shutdown,
            next_id: 1,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn spawn(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;

        let events = self.events.clone();
        let task = BackgroundTask::new(self.delay, self.shutdown.clone());
        tracing::debug!(task_id = id, delay_ms = self.delay.as_millis() as u64, "Spawning background task");

        let _ = self.runtime.spawn(async move {
            let text = task.run().await;
            if events.send(AppEvent::TaskCompleted { id, text }).is_err() {
                tracing::trace!(task_id = id, "Completion dropped (UI loop gone)");
            }
        });

        id
    }
}
