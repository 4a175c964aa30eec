//! Logging infrastructure
//!
//! Structured console logging for development and production environments.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `level` - Default log level when `RUST_LOG` is unset ("trace", "debug", "info", ...)
/// * `json_format` - JSON output for production, human-readable for development
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    if json_format {
        let console_layer = fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_current_span(true);
        subscriber.with(console_layer).init();
    } else {
        let console_layer = fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        subscriber.with(console_layer).init();
    }

    tracing::info!(level, json_format, "Logger initialized");
    Ok(())
}
