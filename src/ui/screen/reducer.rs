//! Reducer for the screen.

use crate::ui::mvi::Reducer;

use super::intent::ScreenIntent;
use super::state::{DisplayText, ScreenState};

/// Screen state transitions.
///
/// Spawning the task for a press is the caller's job. Completions are
/// applied in arrival order, so with overlapping presses the last one to
/// arrive wins.
pub struct ScreenReducer;

impl Reducer for ScreenReducer {
    type State = ScreenState;
    type Intent = ScreenIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ScreenIntent::ButtonPressed => ScreenState {
                in_flight: state.in_flight + 1,
                ..state
            },

            ScreenIntent::TaskCompleted { text } => ScreenState {
                display: DisplayText::Completed(text),
                in_flight: state.in_flight.saturating_sub(1),
            },
        }
    }
}
