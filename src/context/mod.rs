//! Explicit context propagation.
//!
//! A [`Channel`] is a named slot that carries one value down a component
//! tree. Providers publish into it, consumers subscribe to it, and it is
//! always passed by reference rather than looked up globally.
//!
//! # Invariants
//!
//! 1. `subscribe` delivers the current value before returning.
//! 2. Every `publish` bumps the version by exactly one and notifies all
//!    live subscribers before returning to the caller.
//! 3. A single subscriber sees publishes in the order they were made,
//!    including publishes made from inside a callback.
//! 4. Dropping a [`Subscription`] stops delivery to its callback.

mod channel;

pub use channel::{Channel, Subscription};
