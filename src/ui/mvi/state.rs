//! Marker trait for UI state snapshots.

/// A snapshot of UI state.
///
/// Snapshots are replaced, never mutated in place, so they need to be
/// cheap to clone and comparable for change detection.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
