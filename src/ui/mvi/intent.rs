//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either something the user did (pressed the button) or
/// something the system reports back to the UI loop (a task finished).
/// `Send` because completions are produced on runtime worker threads.
pub trait Intent: Send + 'static {}
