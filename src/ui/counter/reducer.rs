use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Overflow is out of scope; wrapping keeps the transition total.
        match intent {
            CounterIntent::Increment => CounterState {
                count: state.count.wrapping_add(1),
            },
            CounterIntent::Decrement => CounterState {
                count: state.count.wrapping_sub(1),
            },
        }
    }
}
