//! Press-to-completion behaviour of the App, driven the way the UI loop
//! drives it.

mod common;

use bgtask_demo::task::TASK_RESULT;
use bgtask_demo::ui::events::AppEvent;
use bgtask_demo::ui::screen::{DisplayText, ScreenView, INITIAL_TEXT};
use common::*;
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

#[test]
fn initial_text_is_waiting() {
    let h = harness(Duration::from_millis(10));
    assert_eq!(h.app.screen().display_text(), "Waiting...");
    assert_eq!(h.app.view().label, INITIAL_TEXT);
    assert!(!h.app.screen().is_busy());
}

#[test]
fn single_press_updates_text() {
    let mut h = harness(Duration::from_millis(20));
    h.app.on_button_press();

    let observed = h.drain_until_idle(Duration::from_secs(5));

    assert_eq!(observed, vec![TASK_RESULT.to_string()]);
    assert_eq!(h.app.screen().display_text(), "Updated from background task");
}

#[test]
fn press_does_not_block_and_text_waits_for_task() {
    let mut h = harness(Duration::from_millis(300));

    let start = Instant::now();
    h.app.on_button_press();
    assert!(start.elapsed() < Duration::from_millis(100));

    assert_eq!(h.app.view().label, "Waiting...");
    assert!(matches!(
        h.events.next(Duration::from_millis(50)),
        Err(RecvTimeoutError::Timeout)
    ));
    assert_eq!(h.app.screen().display, DisplayText::Waiting);

    h.drain_until_idle(Duration::from_secs(5));
    assert_eq!(h.app.view().label, TASK_RESULT);
}

#[test]
fn update_lands_after_delay() {
    let delay = Duration::from_millis(150);
    let mut h = harness(delay);

    let start = Instant::now();
    h.app.on_button_press();
    h.drain_until_idle(Duration::from_secs(5));

    assert!(start.elapsed() >= delay);
}

#[test]
fn many_presses_end_with_result() {
    let mut h = harness(Duration::from_millis(30));
    for _ in 0..10 {
        h.app.on_button_press();
    }
    assert_eq!(h.app.screen().in_flight, 10);

    let observed = h.drain_until_idle(Duration::from_secs(5));

    assert_eq!(observed.len(), 10);
    assert!(observed.iter().all(|text| text == TASK_RESULT));
    assert_eq!(h.app.screen().display_text(), TASK_RESULT);
    assert!(!h.app.screen().is_busy());
}

#[test]
fn only_two_values_are_ever_rendered() {
    let mut h = harness(Duration::from_millis(20));
    let mut labels = vec![ScreenView::from_state(h.app.screen()).label];
    for _ in 0..3 {
        h.app.on_button_press();
        labels.push(h.app.view().label);
    }
    labels.extend(h.drain_until_idle(Duration::from_secs(5)));

    assert!(labels
        .iter()
        .all(|label| label == INITIAL_TEXT || label == TASK_RESULT));
}

#[test]
fn shutdown_cuts_pending_task_short() {
    let mut h = harness(Duration::from_secs(30));
    h.app.on_button_press();
    h.shutdown.signal();

    let observed = h.drain_until_idle(Duration::from_secs(5));

    assert_eq!(observed, vec![TASK_RESULT.to_string()]);
}

#[test]
fn completion_after_ui_loop_exit_is_dropped() {
    let mut h = harness(Duration::from_millis(10));
    h.app.on_button_press();
    let runtime = h.runtime;
    drop(h.events);
    // Sending into a closed channel must not panic the worker
    std::thread::sleep(Duration::from_millis(100));
    runtime.shutdown_timeout(Duration::from_secs(1));
}

#[test]
fn unrelated_events_leave_text_alone() {
    let mut h = harness(Duration::from_millis(10));
    h.events.sender().send(AppEvent::Tick).unwrap();
    h.app.on_tick();
    h.app.on_resize(100, 40);
    assert_eq!(h.app.screen().display_text(), INITIAL_TEXT);
    assert_eq!(h.app.size(), Some((100, 40)));
}
