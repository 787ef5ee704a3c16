//! Intents for the shared counter.

use crate::ui::mvi::Intent;

/// Transitions the counter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterIntent {
    /// `count → count + 1`
    Increment,
    /// `count → count - 1`
    Decrement,
}

impl Intent for CounterIntent {}
