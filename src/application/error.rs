//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)     - Invalid shipment request
//! ├── Advisor(AdvisorError)   - Text-generation failures
//! ├── Config(ConfigError)     - Settings or registry loading
//! ├── Serialization(String)   - Prompt payload encoding
//! └── NoCompatibleQuotes      - Nothing to analyze
//! ```
//!
//! # Examples
//!
//! ```
//! use freight_quote::application::error::{ApplicationError, GENERIC_ANALYSIS_FAILURE};
//! use freight_quote::infrastructure::advisor::AdvisorError;
//!
//! let err: ApplicationError = AdvisorError::timeout("slow").into();
//! assert!(err.is_retryable());
//! assert_eq!(err.user_message(), GENERIC_ANALYSIS_FAILURE);
//! ```

use crate::config::ConfigError;
use crate::domain::errors::DomainError;
use crate::infrastructure::advisor::error::AdvisorError;
use crate::infrastructure::advisor::gemini::MISSING_KEY_MESSAGE;
use thiserror::Error;

/// Shown to users when analysis fails for any reason other than a
/// missing credential.
pub const GENERIC_ANALYSIS_FAILURE: &str = "Failed to generate analysis. Please try again.";

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from request validation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Quote advisor failure.
    #[error("advisor error: {0}")]
    Advisor(#[from] AdvisorError),

    /// Configuration or registry failure.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Outcomes could not be encoded for the prompt.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Analysis was requested but no carrier can take the shipment.
    #[error("no compatible quotes to analyze")]
    NoCompatibleQuotes,
}

impl ApplicationError {
    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Advisor(e) => e.is_retryable(),
            _ => false,
        }
    }

    /// Message suitable for end users.
    ///
    /// Advisor failures collapse to a generic retry hint, except a missing
    /// credential, which the user has to fix.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Advisor(AdvisorError::MissingCredential { .. }) => {
                MISSING_KEY_MESSAGE.to_string()
            }
            Self::Advisor(_) | Self::Serialization(_) => GENERIC_ANALYSIS_FAILURE.to_string(),
            Self::NoCompatibleQuotes => "No compatible carriers to analyze.".to_string(),
            Self::Domain(e) => e.to_string(),
            Self::Config(e) => e.to_string(),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
