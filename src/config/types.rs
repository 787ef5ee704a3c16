use serde::{Deserialize, Serialize};

pub const MIN_TICK_RATE_MS: u64 = 10;
pub const MAX_TICK_RATE_MS: u64 = 5_000;

/// Root configuration container. Every section is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Name of the screen region the component tree mounts into.
    pub mount_id: String,
    /// Event loop tick in milliseconds.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mount_id: "root".to_string(),
            tick_rate_ms: 250,
        }
    }
}

/// Logging settings. Logs are only written when `COUNTER_CONTEXT_LOG` names
/// a file; this only picks the level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
