//! State for the screen.

use crate::ui::mvi::UiState;

/// What the label shows before any task has completed.
pub const INITIAL_TEXT: &str = "Waiting...";

/// The one piece of user-visible mutable state.
///
/// Either the initial placeholder or the string a finished task returned.
/// `Completed` is only built by the screen reducer from a task completion,
/// and every task returns [`crate::task::TASK_RESULT`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DisplayText {
    #[default]
    Waiting,
    Completed(String),
}

impl DisplayText {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Waiting => INITIAL_TEXT,
            Self::Completed(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScreenState {
    pub display: DisplayText,
    /// Presses whose task has not reported back yet.
    pub in_flight: usize,
}

impl UiState for ScreenState {}

impl ScreenState {
    pub fn display_text(&self) -> &str {
        self.display.as_str()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}
