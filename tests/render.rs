//! Drawing into ratatui's TestBackend.

mod common;

use bgtask_demo::task::TASK_RESULT;
use bgtask_demo::ui::render::draw;
use bgtask_demo::ui::screen::{BUTTON_LABEL, INITIAL_TEXT};
use common::*;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

fn rendered(h: &Harness) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| draw(frame, &h.app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn before_completion_shows_waiting_and_button() {
    let h = harness(Duration::from_millis(10));
    let screen = rendered(&h);
    assert!(screen.contains(INITIAL_TEXT));
    assert!(screen.contains(BUTTON_LABEL));
    assert!(!screen.contains(TASK_RESULT));
}

#[test]
fn while_running_still_shows_waiting() {
    let mut h = harness(Duration::from_secs(30));
    h.app.on_button_press();
    let screen = rendered(&h);
    assert!(screen.contains(INITIAL_TEXT));
    assert!(screen.contains("1 task running"));
    h.shutdown.signal();
}

#[test]
fn after_completion_shows_result() {
    let mut h = harness(Duration::from_millis(10));
    h.app.on_button_press();
    h.drain_until_idle(Duration::from_secs(5));

    let screen = rendered(&h);
    assert!(screen.contains(TASK_RESULT));
    assert!(!screen.contains(INITIAL_TEXT));
    assert!(screen.contains("idle"));
}
