//! Base trait for UI state in MVI architecture.

/// Marker trait for state owned by a reducer.
///
/// A state value holds everything its view needs to draw. `Default` is the
/// state a feature starts in; `PartialEq` lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
