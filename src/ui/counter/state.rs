//! Snapshot of the shared counter.

use crate::ui::mvi::UiState;

/// The counter value owned by the provider.
///
/// A fresh state always starts at zero; nothing is carried across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub count: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self { count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_zero() {
        assert_eq!(CounterState::default().count, 0);
    }

    #[test]
    fn new_keeps_value() {
        assert_eq!(CounterState::new(-7).count, -7);
    }
}
