//! Root of the counter tree: owns the state and publishes it.

use crate::context::Channel;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState};
use crate::ui::mvi::Reducer;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// The value carried by the counter channel.
///
/// Holds the count together with the triggers that change it. The triggers
/// reach the provider through a weak handle, so a context never keeps its
/// provider alive. The default value is the unset placeholder: no count and
/// triggers that do nothing.
#[derive(Clone, Default)]
pub struct CounterContext {
    count: Option<i64>,
    binding: Option<Weak<RefCell<ProviderInner>>>,
}

impl CounterContext {
    /// Placeholder seen by consumers with no provider above them.
    pub fn unset() -> Self {
        Self::default()
    }

    fn bound(state: CounterState, provider: &Rc<RefCell<ProviderInner>>) -> Self {
        Self {
            count: Some(state.count),
            binding: Some(Rc::downgrade(provider)),
        }
    }

    pub fn count(&self) -> Option<i64> {
        self.count
    }

    /// True while a live provider is behind the triggers.
    pub fn is_bound(&self) -> bool {
        self.binding
            .as_ref()
            .is_some_and(|weak| weak.strong_count() > 0)
    }

    pub fn increment(&self) {
        self.trigger(CounterIntent::Increment);
    }

    pub fn decrement(&self) {
        self.trigger(CounterIntent::Decrement);
    }

    fn trigger(&self, intent: CounterIntent) {
        match self.binding.as_ref().and_then(Weak::upgrade) {
            Some(provider) => dispatch(&provider, intent),
            None => tracing::trace!(?intent, "trigger pressed without a provider"),
        }
    }
}

impl PartialEq for CounterContext {
    fn eq(&self, other: &Self) -> bool {
        let same_binding = match (&self.binding, &other.binding) {
            (Some(a), Some(b)) => Weak::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };
        self.count == other.count && same_binding
    }
}

impl fmt::Debug for CounterContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterContext")
            .field("count", &self.count)
            .field("bound", &self.is_bound())
            .finish()
    }
}

struct ProviderInner {
    state: CounterState,
    channel: Channel<CounterContext>,
}

/// Reduce from the state held right now, then publish.
///
/// The borrow is released before publishing so subscribers may press
/// triggers from inside their callbacks.
fn dispatch(provider: &Rc<RefCell<ProviderInner>>, intent: CounterIntent) {
    let (next, channel) = {
        let mut inner = provider.borrow_mut();
        inner.state = CounterReducer::reduce(inner.state, intent);
        (inner.state, inner.channel.clone())
    };
    tracing::debug!(?intent, count = next.count, "counter transition");
    channel.publish(CounterContext::bound(next, provider));
}

/// Owns the counter and publishes every snapshot into a channel.
///
/// Dropping the provider unbinds the triggers of every context it has
/// published; the channel keeps the last value.
pub struct CounterProvider {
    inner: Rc<RefCell<ProviderInner>>,
}

impl CounterProvider {
    /// Create the provider at count 0 and publish the initial context.
    pub fn mount(channel: &Channel<CounterContext>) -> Self {
        let inner = Rc::new(RefCell::new(ProviderInner {
            state: CounterState::default(),
            channel: channel.clone(),
        }));
        tracing::debug!("counter provider mounted");
        channel.publish(CounterContext::bound(CounterState::default(), &inner));
        Self { inner }
    }

    pub fn state(&self) -> CounterState {
        self.inner.borrow().state
    }

    pub fn dispatch(&self, intent: CounterIntent) {
        dispatch(&self.inner, intent);
    }

    pub fn increment(&self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&self) {
        self.dispatch(CounterIntent::Decrement);
    }
}

impl fmt::Debug for CounterProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CounterProvider")
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_context_has_no_count_and_is_unbound() {
        let ctx = CounterContext::unset();
        assert_eq!(ctx.count(), None);
        assert!(!ctx.is_bound());
        ctx.increment();
        ctx.decrement();
        assert_eq!(ctx.count(), None);
    }

    #[test]
    fn mount_publishes_zero() {
        let channel = Channel::default();
        let provider = CounterProvider::mount(&channel);
        assert_eq!(channel.get().count(), Some(0));
        assert_eq!(channel.version(), 1);
        assert_eq!(provider.state().count, 0);
    }

    #[test]
    fn triggers_from_stale_context_use_latest_state() {
        let channel = Channel::default();
        let provider = CounterProvider::mount(&channel);
        let stale = channel.get();

        stale.increment();
        stale.increment();
        assert_eq!(provider.state().count, 2);
        assert_eq!(channel.get().count(), Some(2));
    }

    #[test]
    fn dropped_provider_unbinds_triggers() {
        let channel = Channel::default();
        let provider = CounterProvider::mount(&channel);
        provider.increment();
        let ctx = channel.get();
        assert!(ctx.is_bound());

        drop(provider);
        assert!(!ctx.is_bound());
        ctx.increment();
        assert_eq!(channel.get().count(), Some(1));
        assert_eq!(channel.version(), 2);
    }

    #[test]
    fn published_context_tracks_state() {
        let channel = Channel::default();
        let provider = CounterProvider::mount(&channel);
        provider.decrement();
        assert_eq!(channel.get().count(), Some(provider.state().count));
        assert!(channel.get().is_bound());
    }
}
