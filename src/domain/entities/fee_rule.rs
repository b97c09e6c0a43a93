//! # Fee Rules
//!
//! Carrier-specific surcharge behaviour carried as data.
//!
//! Each carrier embeds its own pickup, delivery and insurance rules so the
//! evaluator never branches on carrier identity. Rules are pure and total:
//! any weight and cargo type yields a non-negative amount.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::entities::fee_rule::FeeRule;
//! use freight_quote::domain::value_objects::CargoType;
//! use rust_decimal::Decimal;
//!
//! let pickup = FeeRule::below_weight(Decimal::from(5000), Decimal::from(400), Decimal::from(300));
//! assert_eq!(pickup.fee(Decimal::from(600), CargoType::Dg), Decimal::from(400));
//! assert_eq!(pickup.fee(Decimal::from(600), CargoType::Ndg), Decimal::from(300));
//! assert_eq!(pickup.fee(Decimal::from(5000), CargoType::Dg), Decimal::ZERO);
//! ```

use crate::domain::value_objects::CargoType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A pickup or delivery surcharge rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeeRule {
    /// No separate fee; included in the freight.
    #[default]
    Waived,
    /// Fixed amount per ticket.
    Flat {
        /// Fee in CNY.
        amount: Decimal,
    },
    /// Charged only while the chargeable weight is below a threshold.
    BelowWeight {
        /// At or above this weight the fee is waived.
        threshold_kg: Decimal,
        /// Fee for dangerous goods.
        dangerous: Decimal,
        /// Fee for general goods.
        general: Decimal,
    },
}

impl FeeRule {
    /// Creates a flat per-ticket fee.
    #[must_use]
    pub fn flat(amount: Decimal) -> Self {
        Self::Flat { amount }
    }

    /// Creates a fee that applies below `threshold_kg`, priced by cargo type.
    #[must_use]
    pub fn below_weight(threshold_kg: Decimal, dangerous: Decimal, general: Decimal) -> Self {
        Self::BelowWeight {
            threshold_kg,
            dangerous,
            general,
        }
    }

    /// Evaluates the rule for a chargeable weight and cargo type.
    #[must_use]
    pub fn fee(&self, weight_kg: Decimal, cargo_type: CargoType) -> Decimal {
        let amount = match self {
            Self::Waived => Decimal::ZERO,
            Self::Flat { amount } => *amount,
            Self::BelowWeight {
                threshold_kg,
                dangerous,
                general,
            } => {
                if weight_kg >= *threshold_kg {
                    Decimal::ZERO
                } else if cargo_type.is_dangerous() {
                    *dangerous
                } else {
                    *general
                }
            }
        };
        amount.max(Decimal::ZERO)
    }

    /// Returns true if every configured amount is non-negative.
    #[must_use]
    pub fn has_non_negative_amounts(&self) -> bool {
        match self {
            Self::Waived => true,
            Self::Flat { amount } => !amount.is_sign_negative(),
            Self::BelowWeight {
                dangerous, general, ..
            } => !dangerous.is_sign_negative() && !general.is_sign_negative(),
        }
    }
}

impl fmt::Display for FeeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Waived => write!(f, "waived"),
            Self::Flat { amount } => write!(f, "{} per ticket", amount),
            Self::BelowWeight {
                threshold_kg,
                dangerous,
                general,
            } if dangerous == general => write!(f, "{} below {}kg", general, threshold_kg),
            Self::BelowWeight {
                threshold_kg,
                dangerous,
                general,
            } => write!(
                f,
                "DG {} / NDG {} below {}kg",
                dangerous, general, threshold_kg
            ),
        }
    }
}

/// Insurance premium rule, applied to a declared cargo value.
///
/// Every built-in carrier waives insurance.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InsuranceRule {
    /// No premium.
    #[default]
    Waived,
    /// Premium as a fraction of the declared value.
    ValueRate {
        /// Fraction of value, e.g. `0.003`.
        rate: Decimal,
    },
}

impl InsuranceRule {
    /// Premium for a declared value. Never negative.
    #[must_use]
    pub fn premium(&self, declared_value: Decimal) -> Decimal {
        match self {
            Self::Waived => Decimal::ZERO,
            Self::ValueRate { rate } => declared_value.saturating_mul(*rate).max(Decimal::ZERO),
        }
    }
}

/// The fee schedule embedded in a carrier policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CarrierFeeRules {
    /// Human-readable summary of the schedule.
    #[serde(default)]
    pub description: String,
    /// Pickup surcharge.
    #[serde(default)]
    pub pickup: FeeRule,
    /// Delivery surcharge.
    #[serde(default)]
    pub delivery: FeeRule,
    /// Insurance premium.
    #[serde(default)]
    pub insurance: InsuranceRule,
}

impl CarrierFeeRules {
    /// Pickup fee for a chargeable weight.
    #[inline]
    #[must_use]
    pub fn pickup(&self, weight_kg: Decimal, cargo_type: CargoType) -> Decimal {
        self.pickup.fee(weight_kg, cargo_type)
    }

    /// Delivery fee for a chargeable weight.
    #[inline]
    #[must_use]
    pub fn delivery(&self, weight_kg: Decimal, cargo_type: CargoType) -> Decimal {
        self.delivery.fee(weight_kg, cargo_type)
    }

    /// Insurance premium for a declared value.
    #[inline]
    #[must_use]
    pub fn insurance(&self, declared_value: Decimal) -> Decimal {
        self.insurance.premium(declared_value)
    }
}
