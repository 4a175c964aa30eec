//! Engine configuration
//!
//! All settings come from environment variables with sensible defaults,
//! so an embedder can run the engine with zero configuration.

use std::env;

/// Runtime configuration for the engine
///
/// # Environment variables
///
/// | Variable         | Default       | Meaning                                  |
/// |------------------|---------------|------------------------------------------|
/// | `ENVIRONMENT`    | `development` | `development` / `production` / `test`    |
/// | `LOG_LEVEL`      | `info`        | Default tracing level when RUST_LOG unset |
/// | `JSON_LOGS`      | `false`       | Structured JSON log output               |
/// | `SEED_DEMO_DATA` | `true`        | Load the demo catalog, accounts, bookings |
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment name
    pub environment: String,
    /// Default log level (`trace`, `debug`, `info`, `warn`, `error`)
    pub log_level: String,
    /// Emit logs as JSON instead of human-readable lines
    pub json_logs: bool,
    /// Populate the engine with the deterministic demo dataset on startup
    pub seed_demo_data: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            json_logs: env::var("JSON_LOGS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    /// Load from environment, then override the fields tests care about
    pub fn with_overrides(environment: impl Into<String>, seed_demo_data: bool) -> Self {
        Self {
            environment: environment.into(),
            seed_demo_data,
            ..Self::from_env()
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_environment_and_seed_flag() {
        let config = Config::with_overrides("test", false);
        assert_eq!(config.environment, "test");
        assert!(!config.seed_demo_data);
        assert!(!config.is_production());
        assert!(!config.is_development());
    }
}
