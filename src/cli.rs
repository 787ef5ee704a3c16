use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Counter shared through an explicit context channel, rendered in the terminal.
#[derive(Debug, Parser)]
#[command(name = "counter-context", version, about)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the mount region id
    #[arg(long, value_name = "ID")]
    pub mount_id: Option<String>,

    /// Override the event loop tick in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_rate_ms: Option<u64>,

    /// Render the counter view without a provider above it
    #[arg(long)]
    pub unprovided: bool,

    /// Run without a terminal: press '+'/'-' triggers from SEQ and print each label
    #[arg(long, value_name = "SEQ", allow_hyphen_values = true)]
    pub headless: Option<String>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply flag overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(mount_id) = &self.mount_id {
            config.ui.mount_id = mount_id.clone();
        }
        if let Some(tick) = self.tick_rate_ms {
            config.ui.tick_rate_ms = tick;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply_to_config() {
        let cli = Cli::parse_from(["counter-context", "--mount-id", "app", "--tick-rate-ms", "100"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.ui.mount_id, "app");
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn no_flags_leave_config_untouched() {
        let cli = Cli::parse_from(["counter-context"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
        assert!(!cli.unprovided);
        assert!(cli.headless.is_none());
    }

    #[test]
    fn headless_accepts_leading_hyphen() {
        let cli = Cli::parse_from(["counter-context", "--headless", "-+-"]);
        assert_eq!(cli.headless.as_deref(), Some("-+-"));
    }
}
