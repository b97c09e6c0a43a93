//! # Configuration
//!
//! Layered application settings.
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. an optional `freight-quote.toml` (or the path given to [`AppConfig::load_from`])
//! 3. `FREIGHT_QUOTE__<SECTION>__<KEY>` environment variables
//!
//! A `.env` file is read first so its variables take part in step 3. The
//! advisor API key additionally falls back to `GEMINI_API_KEY` and `API_KEY`.
//!
//! # Examples
//!
//! ```
//! use freight_quote::config::AppConfig;
//!
//! let config = AppConfig::from_toml_str(r#"
//!     [log]
//!     level = "debug"
//!
//!     [advisor]
//!     max_quotes = 3
//! "#).unwrap();
//!
//! assert_eq!(config.log.level, "debug");
//! assert_eq!(config.advisor.max_quotes, 3);
//! assert_eq!(config.advisor.model, "gemini-2.5-flash");
//! ```

use crate::application::services::quote_analysis::DEFAULT_MAX_QUOTES;
use crate::domain::DomainError;
use crate::infrastructure::registry::CarrierRegistry;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file stem.
pub const DEFAULT_CONFIG_FILE: &str = "freight-quote";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "FREIGHT_QUOTE";

/// Default text-generation model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default text-generation endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default advisor request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variables consulted for the advisor key, in order.
const API_KEY_FALLBACK_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Layered settings could not be read or deserialized.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// A file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A registry file is not valid TOML for the expected shape.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A registry violates carrier invariants.
    #[error("invalid registry: {0}")]
    InvalidRegistry(#[from] DomainError),

    /// The tracing subscriber could not be installed.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Settings for the quote analysis service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// API credential; analysis is refused without it. Never serialized.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Model name.
    pub model: String,
    /// Service base URL.
    pub base_url: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Maximum number of compatible quotes included in the prompt.
    pub max_quotes: usize,
}

impl AdvisorConfig {
    /// Returns the API key if one is set and non-blank.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.trim().is_empty())
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_quotes: DEFAULT_MAX_QUOTES,
        }
    }
}

impl fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_quotes", &self.max_quotes)
            .finish()
    }
}

/// Carrier registry source.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// TOML file with `[[carriers]]`; the built-in roster when unset.
    pub path: Option<PathBuf>,
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging.
    pub log: LogConfig,
    /// Quote analysis.
    pub advisor: AdvisorConfig,
    /// Carrier registry.
    pub registry: RegistryConfig,
}

impl AppConfig {
    /// Loads `.env`, `freight-quote.toml` (if present) and the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`AppConfig::load`] with an explicit configuration file.
    ///
    /// An explicit file must exist; the default one is optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if a source is missing or malformed.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }

        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app: Self = config.try_deserialize()?;
        app.apply_api_key_fallback(|name| std::env::var(name).ok());
        Ok(app)
    }

    /// Parses configuration from a TOML string, without environment input.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` if the TOML is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Builds the carrier registry this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured registry file cannot be read,
    /// parsed or validated.
    pub fn load_registry(&self) -> Result<CarrierRegistry, ConfigError> {
        match &self.registry.path {
            Some(path) => CarrierRegistry::from_toml_file(path),
            None => Ok(CarrierRegistry::builtin()),
        }
    }

    fn apply_api_key_fallback(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if self.advisor.api_key().is_some() {
            return;
        }
        self.advisor.api_key = API_KEY_FALLBACK_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|value| !value.trim().is_empty());
    }
}
