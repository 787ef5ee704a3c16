//! A counter shared through an explicit context channel.
//!
//! [`ui::provider::CounterProvider`] owns the count and publishes it into a
//! [`context::Channel`]; [`ui::counter_view::CounterView`] subscribes and
//! renders it, several layers away, without the value being passed through
//! anything in between.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod headless;
pub mod logging;
pub mod ui;
