//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Folds an intent into a state.
///
/// Reducers never spawn work or touch the terminal. The caller runs side
/// effects around the dispatch.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// (State, Intent) -> State, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
