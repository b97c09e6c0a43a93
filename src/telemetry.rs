//! # Telemetry
//!
//! Installs the global `tracing` subscriber.
//!
//! `RUST_LOG` wins over the configured level when set. Output is
//! human-readable by default and JSON lines when `log.json` is enabled.
//! Logs go to stderr so command output on stdout stays machine-readable.

use crate::config::{ConfigError, LogConfig};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Builds the filter from `RUST_LOG`, falling back to `config.level`.
///
/// # Errors
///
/// Returns `ConfigError::Logging` if the configured level is not a valid
/// filter directive.
pub fn env_filter(config: &LogConfig) -> Result<EnvFilter, ConfigError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| ConfigError::Logging(format!("invalid log level '{}': {}", config.level, e))),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `ConfigError::Logging` if the filter is invalid or a subscriber
/// is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), ConfigError> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))
}
