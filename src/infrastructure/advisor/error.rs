//! # Advisor Errors
//!
//! Error types for the text-generation service behind quote analysis.
//!
//! # Examples
//!
//! ```
//! use freight_quote::infrastructure::advisor::error::AdvisorError;
//!
//! let error = AdvisorError::timeout("request timed out after 30000ms");
//! assert!(error.is_retryable());
//!
//! let error = AdvisorError::authentication("API key not valid");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for quote advisor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    /// No API key is configured; no request was attempted.
    #[error("advisor credential missing: {message}")]
    MissingCredential {
        /// Error message.
        message: String,
    },

    /// Request timed out.
    #[error("advisor timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error, including upstream 5xx responses.
    #[error("advisor connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// The service rejected the credential.
    #[error("advisor authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("advisor rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// The service rejected the request body.
    #[error("advisor invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// Unexpected status or unparseable response body.
    #[error("advisor protocol error: {message}")]
    ProtocolError {
        /// Error message.
        message: String,
    },

    /// The response carried no candidate text.
    #[error("advisor returned no content")]
    EmptyResponse,
}

impl AdvisorError {
    /// Creates a missing credential error.
    #[must_use]
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::MissingCredential {
            message: message.into(),
        }
    }

    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns true if the caller has to fix its credential before retrying.
    #[must_use]
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Self::MissingCredential { .. } | Self::Authentication { .. }
        )
    }
}

/// Result type for advisor operations.
pub type AdvisorResult<T> = Result<T, AdvisorError>;
