//! # Carrier Registry
//!
//! The immutable roster of carrier policies evaluated for every request.
//!
//! The registry is built once at startup, either from the built-in roster
//! or from a TOML file, and passed explicitly to the evaluator. It has no
//! mutation API, so a single instance can be shared behind an `Arc`.
//!
//! # Examples
//!
//! ```
//! use freight_quote::infrastructure::registry::CarrierRegistry;
//!
//! let registry = CarrierRegistry::builtin();
//! assert_eq!(registry.len(), 7);
//! assert_eq!(registry.as_slice()[0].id(), "kerry_zjg");
//! ```

pub mod builtin;

use crate::config::ConfigError;
use crate::domain::entities::carrier::CarrierPolicy;
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Ordered, read-only collection of carrier policies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarrierRegistry {
    carriers: Vec<CarrierPolicy>,
}

impl CarrierRegistry {
    /// Creates a registry from untrusted policies.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCarrier` if any policy is invalid or two
    /// policies share an id.
    pub fn new(carriers: Vec<CarrierPolicy>) -> DomainResult<Self> {
        {
            let mut seen = HashSet::with_capacity(carriers.len());
            for carrier in &carriers {
                carrier.validate()?;
                if !seen.insert(carrier.id()) {
                    return Err(DomainError::invalid_carrier(carrier.id(), "duplicate id"));
                }
            }
        }
        Ok(Self { carriers })
    }

    /// The seven built-in carrier contracts.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            carriers: builtin::carriers(),
        }
    }

    /// Parses a registry from TOML text with `[[carriers]]` tables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` on malformed input and
    /// `ConfigError::InvalidRegistry` if a carrier is invalid.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let parsed: Self = toml::from_str(toml)?;
        Ok(Self::new(parsed.carriers)?)
    }

    /// Reads and parses a registry file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`CarrierRegistry::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let registry = Self::from_toml_str(&contents)?;
        tracing::info!(
            path = %path.display(),
            carriers = registry.len(),
            "loaded carrier registry"
        );
        Ok(registry)
    }

    /// The carriers in registry order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[CarrierPolicy] {
        &self.carriers
    }

    /// Iterates the carriers in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, CarrierPolicy> {
        self.carriers.iter()
    }

    /// Number of carriers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.carriers.len()
    }

    /// Returns true if there are no carriers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.carriers.is_empty()
    }
}

impl AsRef<[CarrierPolicy]> for CarrierRegistry {
    fn as_ref(&self) -> &[CarrierPolicy] {
        &self.carriers
    }
}

impl<'a> IntoIterator for &'a CarrierRegistry {
    type Item = &'a CarrierPolicy;
    type IntoIter = std::slice::Iter<'a, CarrierPolicy>;

    fn into_iter(self) -> Self::IntoIter {
        self.carriers.iter()
    }
}
