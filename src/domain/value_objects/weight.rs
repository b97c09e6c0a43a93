//! # Chargeable Weight
//!
//! Billing weight derived from actual weight and cargo volume.
//!
//! Carriers bill on the greater of the actual weight and the volumetric
//! weight. Volume converts at a 1:3 ratio, i.e. one cubic metre counts as
//! 333.33 kg.
//!
//! # Examples
//!
//! ```
//! use freight_quote::domain::value_objects::weight::ChargeableWeight;
//! use rust_decimal::Decimal;
//!
//! let weight = ChargeableWeight::compute(Decimal::from(600), Decimal::new(15, 1));
//! assert_eq!(weight.volumetric_kg(), Decimal::new(49_995, 2));
//! assert_eq!(weight.kg(), Decimal::from(600));
//! assert!(!weight.is_volumetric());
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms billed per cubic metre of cargo (333.33).
pub const VOLUMETRIC_KG_PER_CBM: Decimal = Decimal::from_parts(33_333, 0, 0, false, 2);

/// Actual, volumetric and chargeable weight of a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeableWeight {
    actual_kg: Decimal,
    volumetric_kg: Decimal,
    chargeable_kg: Decimal,
}

impl ChargeableWeight {
    /// Computes `max(weight_kg, volume_cbm * 333.33)`.
    ///
    /// Inputs are not validated; negative or zero values flow through the
    /// arithmetic unchanged. The product saturates at the `Decimal` range.
    #[must_use]
    pub fn compute(weight_kg: Decimal, volume_cbm: Decimal) -> Self {
        let volumetric_kg = volume_cbm.saturating_mul(VOLUMETRIC_KG_PER_CBM);
        Self {
            actual_kg: weight_kg,
            volumetric_kg,
            chargeable_kg: weight_kg.max(volumetric_kg),
        }
    }

    /// The billing weight in kilograms.
    #[inline]
    #[must_use]
    pub fn kg(&self) -> Decimal {
        self.chargeable_kg
    }

    /// The declared weight in kilograms.
    #[inline]
    #[must_use]
    pub fn actual_kg(&self) -> Decimal {
        self.actual_kg
    }

    /// The volume-derived weight in kilograms.
    #[inline]
    #[must_use]
    pub fn volumetric_kg(&self) -> Decimal {
        self.volumetric_kg
    }

    /// Returns true when volume, not mass, drives the billing weight.
    #[inline]
    #[must_use]
    pub fn is_volumetric(&self) -> bool {
        self.volumetric_kg > self.actual_kg
    }
}

impl fmt::Display for ChargeableWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}kg", self.chargeable_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actual_weight_wins_when_heavier() {
        let weight = ChargeableWeight::compute(Decimal::from(600), Decimal::new(15, 1));
        assert_eq!(weight.kg(), Decimal::from(600));
        assert_eq!(weight.volumetric_kg(), Decimal::new(49_995, 2));
    }

    #[test]
    fn volume_wins_when_bulky() {
        let weight = ChargeableWeight::compute(Decimal::from(100), Decimal::from(3));
        assert_eq!(weight.kg(), Decimal::new(99_999, 2));
        assert!(weight.is_volumetric());
    }

    #[test]
    fn zero_volume_uses_actual_weight() {
        let weight = ChargeableWeight::compute(Decimal::from(42), Decimal::ZERO);
        assert_eq!(weight.kg(), Decimal::from(42));
        assert_eq!(weight.actual_kg(), Decimal::from(42));
    }

    #[test]
    fn huge_volume_saturates() {
        let weight = ChargeableWeight::compute(Decimal::ONE, Decimal::MAX / Decimal::from(100));
        assert_eq!(weight.volumetric_kg(), Decimal::MAX);
        assert_eq!(weight.kg(), Decimal::MAX);
    }

    #[test]
    fn conversion_constant() {
        assert_eq!(VOLUMETRIC_KG_PER_CBM, Decimal::new(33_333, 2));
    }
}
