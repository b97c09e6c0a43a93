//! # Domain Errors
//!
//! Validation failures for shipment requests and carrier policies.
//!
//! Incompatibility between a carrier and a shipment is not an error; it is
//! a normal quote outcome. These errors only surface at construction
//! boundaries.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for domain validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Weight must be strictly positive.
    #[error("invalid weight: {0} kg (must be greater than zero)")]
    InvalidWeight(Decimal),

    /// Volume must not be negative.
    #[error("invalid volume: {0} cbm (must not be negative)")]
    InvalidVolume(Decimal),

    /// A numeric field is above its accepted maximum.
    #[error("{field} {value} exceeds the maximum of {max}")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// Supplied value.
        value: Decimal,
        /// Largest accepted value.
        max: Decimal,
    },

    /// A location field was blank.
    #[error("{0} must not be empty")]
    EmptyLocation(&'static str),

    /// A carrier policy violates its invariants.
    #[error("invalid carrier '{carrier}': {message}")]
    InvalidCarrier {
        /// Carrier identifier.
        carrier: String,
        /// What is wrong with it.
        message: String,
    },
}

impl DomainError {
    /// Creates an invalid carrier error.
    #[must_use]
    pub fn invalid_carrier(carrier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCarrier {
            carrier: carrier.into(),
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
