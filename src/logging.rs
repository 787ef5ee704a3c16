use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "COUNTER_CONTEXT_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is off unless `COUNTER_CONTEXT_LOG` is set, since anything on
/// stderr would corrupt the TUI. The file is created as
/// `{path}.{timestamp}.{pid}` so concurrent runs never share a log.
/// `RUST_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) {
    let Some(log_path) = std::env::var(LOG_ENV).ok() else {
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
