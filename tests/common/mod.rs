//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use bgtask_demo::shutdown::ShutdownCoordinator;
use bgtask_demo::ui::app::App;
use bgtask_demo::ui::events::{AppEvent, EventHandler};
use bgtask_demo::ui::spawner::TaskSpawner;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};
use tempfile::TempDir;
use tokio::runtime::Runtime;

/// An App wired to a real runtime and a detached event channel, the same
/// way the UI loop wires it, minus the terminal.
pub struct Harness {
    pub app: App,
    pub events: EventHandler,
    pub shutdown: ShutdownCoordinator,
    pub runtime: Runtime,
}

pub fn harness(delay: Duration) -> Harness {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .expect("Failed to build runtime");
    let shutdown = ShutdownCoordinator::new();
    let events = EventHandler::detached();
    let spawner = TaskSpawner::new(
        runtime.handle().clone(),
        events.sender(),
        delay,
        shutdown.handle(),
    );
    Harness {
        app: App::new(spawner),
        events,
        shutdown,
        runtime,
    }
}

impl Harness {
    /// Runs the UI side of the loop until no task is in flight.
    /// Returns every DisplayText value observed after a completion.
    pub fn drain_until_idle(&mut self, timeout: Duration) -> Vec<String> {
        let deadline = Instant::now() + timeout;
        let mut observed = Vec::new();
        while self.app.screen().is_busy() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            assert!(!remaining.is_zero(), "tasks did not complete in time");
            match self.events.next(remaining) {
                Ok(AppEvent::TaskCompleted { id, text }) => {
                    self.app.on_task_completed(id, text);
                    observed.push(self.app.screen().display_text().to_string());
                }
                Ok(_) | Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => panic!("event channel closed"),
            }
        }
        observed
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}
