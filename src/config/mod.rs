//! Configuration loaded from TOML and refined by CLI flags.

pub mod loader;
pub mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};
