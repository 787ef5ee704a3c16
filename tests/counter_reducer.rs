use counter_context::ui::counter::{CounterIntent, CounterReducer, CounterState};
use counter_context::ui::mvi::Reducer;

#[test]
fn increment_adds_one() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Increment);
    assert_eq!(state.count, 1);
}

#[test]
fn decrement_subtracts_one() {
    let state = CounterReducer::reduce(CounterState::default(), CounterIntent::Decrement);
    assert_eq!(state.count, -1);
}

#[test]
fn inverse_intents_cancel_in_either_order() {
    let start = CounterState::new(41);
    let up_down = CounterReducer::reduce(
        CounterReducer::reduce(start, CounterIntent::Increment),
        CounterIntent::Decrement,
    );
    let down_up = CounterReducer::reduce(
        CounterReducer::reduce(start, CounterIntent::Decrement),
        CounterIntent::Increment,
    );
    assert_eq!(up_down, start);
    assert_eq!(down_up, start);
}

#[test]
fn reduce_does_not_touch_input_snapshot() {
    let start = CounterState::new(3);
    let _ = CounterReducer::reduce(start, CounterIntent::Increment);
    assert_eq!(start.count, 3);
}

#[test]
fn extremes_wrap_instead_of_panicking() {
    let max = CounterReducer::reduce(CounterState::new(i64::MAX), CounterIntent::Increment);
    assert_eq!(max.count, i64::MIN);
    let min = CounterReducer::reduce(CounterState::new(i64::MIN), CounterIntent::Decrement);
    assert_eq!(min.count, i64::MAX);
}
