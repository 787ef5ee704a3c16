//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Computes the next state from the current one.
///
/// Reducers are the only place transitions happen and must stay pure:
/// no I/O, no publishing, no access to anything but the arguments.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Consume the current state and return the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
