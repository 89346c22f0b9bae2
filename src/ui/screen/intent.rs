//! Intents for the screen.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenIntent {
    /// The button was pressed and a task has been spawned for it.
    ButtonPressed,

    /// A task finished on the runtime and its result reached the UI loop.
    TaskCompleted { text: String },
}

impl Intent for ScreenIntent {}
