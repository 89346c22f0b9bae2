//! Base trait for UI state.

/// Marker trait for state owned by the UI loop.
///
/// `Default` gives the initial screen, `PartialEq` lets tests and the loop
/// compare snapshots, `Clone` lets the view read a copy.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
