//! Marker trait for intents.

/// A requested state transition.
///
/// Intents carry no behavior of their own; a [`Reducer`](super::Reducer)
/// decides what each one does to the state.
pub trait Intent: Send + 'static {}
