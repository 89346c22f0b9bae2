//! Pure view model for the screen.

use super::state::ScreenState;

pub const BUTTON_LABEL: &str = "Start Background Task";

/// Everything `draw` needs, derived from [`ScreenState`] alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenView {
    pub label: String,
    pub button: &'static str,
    pub pending: usize,
}

impl ScreenView {
    pub fn from_state(state: &ScreenState) -> Self {
        Self {
            label: state.display_text().to_string(),
            button: BUTTON_LABEL,
            pending: state.in_flight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TASK_RESULT;
    use crate::ui::screen::DisplayText;

    #[test]
    fn initial_view() {
        let view = ScreenView::from_state(&ScreenState::default());
        assert_eq!(view.label, "Waiting...");
        assert_eq!(view.button, "Start Background Task");
        assert_eq!(view.pending, 0);
    }

    #[test]
    fn same_state_same_view() {
        let state = ScreenState {
            display: DisplayText::Completed(TASK_RESULT.to_string()),
            in_flight: 2,
        };
        assert_eq!(ScreenView::from_state(&state), ScreenView::from_state(&state));
    }
}
