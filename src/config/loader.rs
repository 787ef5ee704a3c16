use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::types::{Config, MAX_TICK_RATE_MS, MIN_TICK_RATE_MS};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/counter-context/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("counter-context").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// - A missing file yields `Config::default()`.
    /// - An existing file is parsed as TOML.
    ///
    /// Values are not validated here: flags may still override them, so
    /// callers run [`Config::validate`] on the merged result.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `ui.mount_id` is non-empty and has no whitespace
    /// - `ui.tick_rate_ms` is within bounds
    /// - `logging.level` parses as a filter directive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mount_id = &self.ui.mount_id;
        if mount_id.is_empty() || mount_id.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Mount id '{}' must be non-empty and contain no whitespace",
                    mount_id
                ),
            });
        }

        let tick = self.ui.tick_rate_ms;
        if !(MIN_TICK_RATE_MS..=MAX_TICK_RATE_MS).contains(&tick) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Tick rate {}ms is outside {}..={}ms",
                    tick, MIN_TICK_RATE_MS, MAX_TICK_RATE_MS
                ),
            });
        }

        if let Err(err) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid log level '{}': {}", self.logging.level, err),
            });
        }

        Ok(())
    }
}
