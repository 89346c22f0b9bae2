//! The simulated background operation.
//!
//! A press of the button runs one [`BackgroundTask`]: it waits for the
//! configured delay and then yields [`TASK_RESULT`]. It has no failure path.
//! A shutdown signal cuts the wait short and the result is still returned.

use std::time::Duration;

use crate::shutdown::ShutdownHandle;

/// The string every completed task produces.
pub const TASK_RESULT: &str = "Updated from background task";

/// Delay used when the config does not override it.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

pub struct BackgroundTask {
    delay: Duration,
    shutdown: ShutdownHandle,
}

impl BackgroundTask {
    pub fn new(delay: Duration, shutdown: ShutdownHandle) -> Self {
        Self { delay, shutdown }
    }

    pub async fn run(self) -> String {
        tokio::select! {
            _ = tokio::time::sleep(self.delay) => {}
            _ = self.shutdown.wait() => {
                tracing::debug!("Background wait interrupted by shutdown");
            }
        }
        TASK_RESULT.to_string()
    }
}
