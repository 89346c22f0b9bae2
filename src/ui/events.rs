use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::shutdown::ShutdownHandle;
use crate::ui::spawner::TaskId;

/// Everything the UI loop reacts to. Produced by the input thread, by
/// background tasks and by the signal listener; consumed on the UI thread.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// A background task finished. Sent from a runtime worker thread.
    TaskCompleted { id: TaskId, text: String },
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Channel plus a thread that forwards terminal input and emits ticks.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        let handler = Self::detached();
        let event_tx = handler.sender();

        let spawned = thread::Builder::new()
            .name("ui-input".to_string())
            .spawn(move || input_loop(event_tx, tick_rate, shutdown));
        if let Err(err) = spawned {
            tracing::error!("Failed to start input thread: {}", err);
        }

        handler
    }

    /// Channel only, no terminal input. Used by headless mode and tests.
    pub fn detached() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn input_loop(event_tx: mpsc::Sender<AppEvent>, tick_rate: Duration, shutdown: ShutdownHandle) {
    let mut last_tick = Instant::now();
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        // Short poll so the shutdown flag is checked often
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => event_tx.send(AppEvent::Key(key)),
                Ok(Event::Mouse(mouse)) => event_tx.send(AppEvent::Mouse(mouse)),
                Ok(Event::Resize(cols, rows)) => event_tx.send(AppEvent::Resize(cols, rows)),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!("Terminal read error: {}", err);
                    break;
                }
            },
            Ok(false) => Ok(()),
            Err(err) => {
                tracing::error!("Terminal poll error: {}", err);
                break;
            }
        };
        if forwarded.is_err() {
            // UI loop is gone
            break;
        }

        if last_tick.elapsed() >= tick_rate {
            if event_tx.send(AppEvent::Tick).is_err() {
                break;
            }
            last_tick = Instant::now();
        }
    }
    tracing::debug!("Input thread stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_handler_times_out_without_events() {
        let events = EventHandler::detached();
        let result = events.next(Duration::from_millis(10));
        assert!(matches!(result, Err(mpsc::RecvTimeoutError::Timeout)));
    }

    #[test]
    fn sender_delivers_to_handler() {
        let events = EventHandler::detached();
        events.sender().send(AppEvent::Tick).unwrap();
        assert!(matches!(
            events.next(Duration::from_millis(10)),
            Ok(AppEvent::Tick)
        ));
    }
}
