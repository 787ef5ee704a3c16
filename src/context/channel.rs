//! Version-tracked broadcast slot with RAII subscriptions.
//!
//! The channel is single-threaded (`Rc<RefCell<..>>`). Subscribers are held
//! as `Weak` callbacks; the matching strong reference lives in the
//! [`Subscription`] returned to the caller, so dropping the guard is all it
//! takes to unsubscribe. Dead entries are pruned lazily on the next publish.
//!
//! Callbacks run with no borrow held, so a callback may read the channel or
//! publish into it. A publish made while a round of notifications is in
//! flight is queued and delivered once the current round finishes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct ChannelInner<T> {
    value: T,
    version: u64,
    subscribers: Vec<CallbackWeak<T>>,
    /// Values published while `delivering` is set.
    queued: VecDeque<T>,
    delivering: bool,
}

/// A broadcast slot holding the latest published value.
///
/// Cloning a `Channel` yields another handle to the same slot.
pub struct Channel<T> {
    inner: Rc<RefCell<ChannelInner<T>>>,
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Channel")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + Default + 'static> Default for Channel<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> Channel<T> {
    /// Create a channel whose current value is `initial`. Version starts at 0.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ChannelInner {
                value: initial,
                version: 0,
                subscribers: Vec::new(),
                queued: VecDeque::new(),
                delivering: false,
            })),
        }
    }

    /// Clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Number of publishes so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Subscribers whose [`Subscription`] is still alive.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|w| w.strong_count() > 0)
            .count()
    }

    /// Make `value` current and notify every live subscriber.
    ///
    /// Notification is synchronous: when this returns outside of a callback,
    /// all subscribers have seen `value`. Called from inside a callback, the
    /// value is queued behind the round in progress.
    pub fn publish(&self, value: T) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.queued.push_back(value);
            if inner.delivering {
                return;
            }
            inner.delivering = true;
        }
        self.deliver_queued();
    }

    /// Register `callback`. It is invoked right away with the current value
    /// and then once per publish until the returned guard is dropped.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        let current = {
            let mut inner = self.inner.borrow_mut();
            inner.subscribers.push(Rc::downgrade(&strong));
            inner.value.clone()
        };
        strong(&current);
        Subscription {
            _guard: Box::new(strong),
        }
    }

    fn deliver_queued(&self) {
        // Reset even if a callback unwinds, or later publishes would queue forever.
        let _reset = DeliveryReset { inner: &*self.inner };
        loop {
            let (value, callbacks) = {
                let mut inner = self.inner.borrow_mut();
                let Some(value) = inner.queued.pop_front() else {
                    return;
                };
                inner.value = value.clone();
                inner.version += 1;
                inner.subscribers.retain(|w| w.strong_count() > 0);
                let callbacks: Vec<CallbackRc<T>> = inner
                    .subscribers
                    .iter()
                    .filter_map(Weak::upgrade)
                    .collect();
                (value, callbacks)
            };
            for callback in &callbacks {
                callback(&value);
            }
        }
    }
}

/// Ends a delivery round: clears the flag and drops anything a panicking
/// round left queued.
struct DeliveryReset<'a, T> {
    inner: &'a RefCell<ChannelInner<T>>,
}

impl<T> Drop for DeliveryReset<'_, T> {
    fn drop(&mut self) {
        let mut inner = self.inner.borrow_mut();
        inner.delivering = false;
        inner.queued.clear();
    }
}

/// RAII guard for a channel subscriber.
///
/// Holds the only strong reference to the callback; once dropped the
/// channel's weak entry can no longer be upgraded.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    _guard: Box<dyn std::any::Any>,
}

impl Subscription {
    /// Stop receiving publishes. Equivalent to dropping the guard.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
