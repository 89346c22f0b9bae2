use crate::config::Config;
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::spawner::TaskSpawner;
use crate::ui::terminal_guard::setup_terminal;
use std::io::{self, Write};
use std::sync::mpsc::{RecvTimeoutError, Sender};
use tokio::runtime::Handle;

/// Interactive terminal UI. Blocks the calling thread, which becomes the UI
/// thread; background tasks run on `runtime`.
pub fn run(config: &Config, runtime: Handle, shutdown: &ShutdownCoordinator) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate, shutdown.handle());
    spawn_signal_listener(&runtime, events.sender(), shutdown.handle());

    let spawner = TaskSpawner::new(
        runtime,
        events.sender(),
        config.task.delay(),
        shutdown.handle(),
    );
    let mut app = App::new(spawner);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(delay_ms = config.task.delay_ms, "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::TaskCompleted { id, text }) => app.on_task_completed(id, text),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}

/// Presses the button `presses` times without a terminal and writes
/// DisplayText to `out` initially and on every change. Returns once every
/// task has reported back.
pub fn run_headless<W: Write>(
    config: &Config,
    runtime: Handle,
    shutdown: &ShutdownCoordinator,
    presses: usize,
    out: &mut W,
) -> io::Result<()> {
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::detached();
    spawn_signal_listener(&runtime, events.sender(), shutdown.handle());

    let spawner = TaskSpawner::new(
        runtime,
        events.sender(),
        config.task.delay(),
        shutdown.handle(),
    );
    let mut app = App::new(spawner);

    let mut shown = app.screen().display_text().to_string();
    writeln!(out, "{shown}")?;
    out.flush()?;

    for _ in 0..presses {
        app.on_button_press();
    }

    while app.screen().is_busy() {
        match events.next(tick_rate) {
            Ok(AppEvent::TaskCompleted { id, text }) => {
                app.on_task_completed(id, text);
                if app.screen().display_text() != shown {
                    shown = app.screen().display_text().to_string();
                    writeln!(out, "{shown}")?;
                    out.flush()?;
                }
            }
            // The listener already signalled; pending waits are cut short
            // and still report back
            Ok(_) | Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    Ok(())
}

/// On SIGINT/SIGTERM, signals shutdown so pending background waits end,
/// then tells the UI loop with [`AppEvent::Shutdown`].
fn spawn_signal_listener(runtime: &Handle, events: Sender<AppEvent>, shutdown: ShutdownHandle) {
    let _ = runtime.spawn(async move {
        wait_for_signal().await;
        tracing::info!("Received OS signal");
        shutdown.signal();
        let _ = events.send(AppEvent::Shutdown);
    });
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(err) => {
            tracing::warn!("Failed to register SIGTERM handler: {}", err);
            ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    ctrl_c().await;
}

/// Never resolves if the handler cannot be installed.
async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to register Ctrl+C handler: {}", err);
        std::future::pending::<()>().await;
    }
}
