//! # Carrier Policy
//!
//! Capabilities and pricing rules of a single carrier contract.
//!
//! A policy is built once at startup and never mutated. It is a pair of
//! capability sets (what the carrier accepts) and embedded fee rules (how
//! it charges).
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::carrier::CarrierPolicy;
//! use freight_quote::domain::entities::fee_rule::FeeRule;
//! use freight_quote::domain::value_objects::{BusinessLine, CargoType, TransportMode};
//! use rust_decimal::Decimal;
//!
//! let carrier = CarrierPolicy::builder("anji", "Anji (安吉)", "Shanghai")
//!     .lines([BusinessLine::Sci])
//!     .cargo_types([CargoType::Ndg])
//!     .modes([TransportMode::Ltl])
//!     .pickup(FeeRule::below_weight(Decimal::from(5000), Decimal::from(150), Decimal::from(150)))
//!     .build();
//!
//! assert!(carrier.supports_line(BusinessLine::Sci));
//! assert!(!carrier.supports_cargo_type(CargoType::Dg));
//! ```

use crate::domain::entities::fee_rule::{CarrierFeeRules, FeeRule, InsuranceRule};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{BillingBasis, BusinessLine, CargoType, TransportMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A carrier's capabilities and pricing rules.
///
/// # Invariants
///
/// - `id` and `name` are non-empty
/// - `split_point_kg` is non-negative
/// - fee rule amounts are non-negative
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierPolicy {
    id: String,
    name: String,
    base_location: String,
    #[serde(default)]
    billing_basis: BillingBasis,
    split_point_kg: Decimal,
    supported_lines: Vec<BusinessLine>,
    supported_types: Vec<CargoType>,
    supported_modes: Vec<TransportMode>,
    #[serde(default)]
    rules: CarrierFeeRules,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    note: Option<String>,
}

impl CarrierPolicy {
    /// Starts a builder for a carrier.
    #[must_use]
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        base_location: impl Into<String>,
    ) -> CarrierPolicyBuilder {
        CarrierPolicyBuilder::new(id, name, base_location)
    }

    /// Checks the policy invariants.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCarrier` describing the first violation.
    pub fn validate(&self) -> DomainResult<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::invalid_carrier(&self.name, "id is empty"));
        }
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_carrier(&self.id, "name is empty"));
        }
        if self.split_point_kg.is_sign_negative() {
            return Err(DomainError::invalid_carrier(
                &self.id,
                format!("split point {} is negative", self.split_point_kg),
            ));
        }
        if !self.rules.pickup.has_non_negative_amounts() {
            return Err(DomainError::invalid_carrier(&self.id, "pickup fee is negative"));
        }
        if !self.rules.delivery.has_non_negative_amounts() {
            return Err(DomainError::invalid_carrier(&self.id, "delivery fee is negative"));
        }
        Ok(())
    }

    /// Stable identifier.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name; also drives location affinity.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// City the carrier operates from.
    #[inline]
    #[must_use]
    pub fn base_location(&self) -> &str {
        &self.base_location
    }

    /// Contractual billing basis.
    #[inline]
    #[must_use]
    pub fn billing_basis(&self) -> BillingBasis {
        self.billing_basis
    }

    /// At or below this chargeable weight, small-shipment pricing applies.
    #[inline]
    #[must_use]
    pub fn split_point_kg(&self) -> Decimal {
        self.split_point_kg
    }

    /// Supported business lines.
    #[inline]
    #[must_use]
    pub fn supported_lines(&self) -> &[BusinessLine] {
        &self.supported_lines
    }

    /// Supported cargo types.
    #[inline]
    #[must_use]
    pub fn supported_types(&self) -> &[CargoType] {
        &self.supported_types
    }

    /// Supported transport modes.
    #[inline]
    #[must_use]
    pub fn supported_modes(&self) -> &[TransportMode] {
        &self.supported_modes
    }

    /// Embedded fee schedule.
    #[inline]
    #[must_use]
    pub fn rules(&self) -> &CarrierFeeRules {
        &self.rules
    }

    /// Operational note, if any.
    #[inline]
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns true if the business line is accepted.
    #[must_use]
    pub fn supports_line(&self, line: BusinessLine) -> bool {
        self.supported_lines.contains(&line)
    }

    /// Returns true if the cargo type is accepted.
    #[must_use]
    pub fn supports_cargo_type(&self, cargo_type: CargoType) -> bool {
        self.supported_types.contains(&cargo_type)
    }

    /// Returns true if the transport mode is accepted.
    #[must_use]
    pub fn supports_mode(&self, mode: TransportMode) -> bool {
        self.supported_modes.contains(&mode)
    }
}

impl fmt::Display for CarrierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] @ {}", self.name, self.id, self.base_location)
    }
}

/// Builder for [`CarrierPolicy`].
///
/// Defaults: net billing, split point 0, nothing supported, all fees waived.
#[derive(Debug, Clone)]
#[must_use]
pub struct CarrierPolicyBuilder {
    policy: CarrierPolicy,
}

impl CarrierPolicyBuilder {
    /// Creates a builder.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_location: impl Into<String>,
    ) -> Self {
        Self {
            policy: CarrierPolicy {
                id: id.into(),
                name: name.into(),
                base_location: base_location.into(),
                billing_basis: BillingBasis::default(),
                split_point_kg: Decimal::ZERO,
                supported_lines: Vec::new(),
                supported_types: Vec::new(),
                supported_modes: Vec::new(),
                rules: CarrierFeeRules::default(),
                note: None,
            },
        }
    }

    /// Sets the billing basis.
    pub fn billing_basis(mut self, basis: BillingBasis) -> Self {
        self.policy.billing_basis = basis;
        self
    }

    /// Sets the small-shipment split point.
    pub fn split_point_kg(mut self, split_point_kg: Decimal) -> Self {
        self.policy.split_point_kg = split_point_kg;
        self
    }

    /// Sets the supported business lines.
    pub fn lines(mut self, lines: impl IntoIterator<Item = BusinessLine>) -> Self {
        self.policy.supported_lines = lines.into_iter().collect();
        self
    }

    /// Sets the supported cargo types.
    pub fn cargo_types(mut self, types: impl IntoIterator<Item = CargoType>) -> Self {
        self.policy.supported_types = types.into_iter().collect();
        self
    }

    /// Sets the supported transport modes.
    pub fn modes(mut self, modes: impl IntoIterator<Item = TransportMode>) -> Self {
        self.policy.supported_modes = modes.into_iter().collect();
        self
    }

    /// Sets the fee schedule description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.policy.rules.description = description.into();
        self
    }

    /// Sets the pickup fee rule.
    pub fn pickup(mut self, rule: FeeRule) -> Self {
        self.policy.rules.pickup = rule;
        self
    }

    /// Sets the delivery fee rule.
    pub fn delivery(mut self, rule: FeeRule) -> Self {
        self.policy.rules.delivery = rule;
        self
    }

    /// Sets the insurance rule.
    pub fn insurance(mut self, rule: InsuranceRule) -> Self {
        self.policy.rules.insurance = rule;
        self
    }

    /// Sets the operational note.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.policy.note = Some(note.into());
        self
    }

    /// Finishes the policy. Use [`CarrierPolicy::validate`] for untrusted input.
    #[must_use]
    pub fn build(self) -> CarrierPolicy {
        self.policy
    }
}
