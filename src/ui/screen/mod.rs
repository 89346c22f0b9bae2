//! The single screen: one label showing DisplayText and one button.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use state::{DisplayText, ScreenState, INITIAL_TEXT};
pub use view::{ScreenView, BUTTON_LABEL};
