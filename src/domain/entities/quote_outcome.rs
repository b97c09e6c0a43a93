//! # Quote Outcome
//!
//! The per-carrier result of evaluating a shipment request.
//!
//! Every carrier produces exactly one outcome: either a priced
//! [`CostBreakdown`] or an [`Incompatibility`] listing why the carrier cannot
//! take the shipment.

use crate::domain::value_objects::{BusinessLine, CURRENCY, CargoType, TransportMode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priced quote for a compatible carrier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Freight before surcharges, rounded to 2 dp.
    pub base_freight: Decimal,
    /// Pickup surcharge as computed by the carrier rule.
    pub pickup_fee: Decimal,
    /// Delivery surcharge as computed by the carrier rule.
    pub delivery_fee: Decimal,
    /// Sum of the above, rounded to 2 dp after summation.
    pub total: Decimal,
    /// Always `CNY`.
    pub currency: String,
    /// How the price was derived, in order.
    pub notes: Vec<String>,
}

impl CostBreakdown {
    /// All-zero breakdown with no notes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            base_freight: Decimal::ZERO,
            pickup_fee: Decimal::ZERO,
            delivery_fee: Decimal::ZERO,
            total: Decimal::ZERO,
            currency: CURRENCY.to_string(),
            notes: Vec::new(),
        }
    }
}

impl Default for CostBreakdown {
    fn default() -> Self {
        Self::empty()
    }
}

/// A single reason a carrier cannot service a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum IncompatibilityReason {
    /// Business line not in the carrier's contract.
    UnsupportedBusinessLine {
        /// Requested line.
        line: BusinessLine,
    },
    /// Cargo type not accepted.
    UnsupportedCargoType {
        /// Requested cargo type.
        cargo_type: CargoType,
    },
    /// Transport mode not offered.
    UnsupportedMode {
        /// Requested mode.
        mode: TransportMode,
    },
    /// Origin is outside the region a city-bound carrier picks up from.
    OutsideOperatingRegion {
        /// Region label, e.g. `Jinan`.
        region: String,
    },
}

impl fmt::Display for IncompatibilityReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedBusinessLine { line } => {
                write!(f, "Does not support business line {}", line)
            }
            Self::UnsupportedCargoType { cargo_type } => {
                write!(f, "Does not support cargo type {}", cargo_type)
            }
            Self::UnsupportedMode { mode } => write!(f, "Does not support mode {}", mode),
            Self::OutsideOperatingRegion { region } => {
                write!(f, "Carrier operates primarily from {}", region)
            }
        }
    }
}

/// Non-empty list of reasons, rendered joined with `", "`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incompatibility {
    reasons: Vec<IncompatibilityReason>,
}

impl Incompatibility {
    /// Wraps the reasons; `None` when there are none.
    #[must_use]
    pub fn from_reasons(reasons: Vec<IncompatibilityReason>) -> Option<Self> {
        if reasons.is_empty() {
            None
        } else {
            Some(Self { reasons })
        }
    }

    /// The individual reasons, in check order.
    #[inline]
    #[must_use]
    pub fn reasons(&self) -> &[IncompatibilityReason] {
        &self.reasons
    }
}

impl fmt::Display for Incompatibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, reason) in self.reasons.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", reason)?;
        }
        Ok(())
    }
}

/// Compatible-with-price or incompatible-with-reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuoteVerdict {
    /// Carrier can take the shipment.
    Compatible(CostBreakdown),
    /// Carrier cannot take the shipment.
    Incompatible(Incompatibility),
}

/// Result of evaluating one carrier against one request.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::entities::quote_outcome::{CostBreakdown, QuoteOutcome};
/// use rust_decimal::Decimal;
///
/// let mut breakdown = CostBreakdown::empty();
/// breakdown.total = Decimal::from(900);
/// let outcome = QuoteOutcome::compatible("rongyun", "Rongyun (嵘芸)", breakdown);
///
/// assert!(outcome.is_compatible());
/// assert_eq!(outcome.total(), Decimal::from(900));
/// assert!(outcome.incompatibility_reason().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteOutcome {
    carrier_id: String,
    carrier_name: String,
    verdict: QuoteVerdict,
}

impl QuoteOutcome {
    /// Creates a priced outcome.
    #[must_use]
    pub fn compatible(
        carrier_id: impl Into<String>,
        carrier_name: impl Into<String>,
        breakdown: CostBreakdown,
    ) -> Self {
        Self {
            carrier_id: carrier_id.into(),
            carrier_name: carrier_name.into(),
            verdict: QuoteVerdict::Compatible(breakdown),
        }
    }

    /// Creates a rejected outcome.
    #[must_use]
    pub fn incompatible(
        carrier_id: impl Into<String>,
        carrier_name: impl Into<String>,
        incompatibility: Incompatibility,
    ) -> Self {
        Self {
            carrier_id: carrier_id.into(),
            carrier_name: carrier_name.into(),
            verdict: QuoteVerdict::Incompatible(incompatibility),
        }
    }

    /// Identifier of the carrier.
    #[inline]
    #[must_use]
    pub fn carrier_id(&self) -> &str {
        &self.carrier_id
    }

    /// Display name of the carrier.
    #[inline]
    #[must_use]
    pub fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    /// The verdict.
    #[inline]
    #[must_use]
    pub fn verdict(&self) -> &QuoteVerdict {
        &self.verdict
    }

    /// Returns true if the carrier can take the shipment.
    #[inline]
    #[must_use]
    pub fn is_compatible(&self) -> bool {
        matches!(self.verdict, QuoteVerdict::Compatible(_))
    }

    /// Price breakdown, for compatible outcomes.
    #[must_use]
    pub fn breakdown(&self) -> Option<&CostBreakdown> {
        match &self.verdict {
            QuoteVerdict::Compatible(breakdown) => Some(breakdown),
            QuoteVerdict::Incompatible(_) => None,
        }
    }

    /// Reasons, for incompatible outcomes.
    #[must_use]
    pub fn incompatibility(&self) -> Option<&Incompatibility> {
        match &self.verdict {
            QuoteVerdict::Compatible(_) => None,
            QuoteVerdict::Incompatible(incompatibility) => Some(incompatibility),
        }
    }

    /// Reasons joined with `", "`, for incompatible outcomes.
    #[must_use]
    pub fn incompatibility_reason(&self) -> Option<String> {
        self.incompatibility().map(ToString::to_string)
    }

    /// Quoted total; zero when incompatible.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.breakdown().map_or(Decimal::ZERO, |b| b.total)
    }
}

impl fmt::Display for QuoteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            QuoteVerdict::Compatible(breakdown) => write!(
                f,
                "{}: {} {}",
                self.carrier_name, breakdown.total, breakdown.currency
            ),
            QuoteVerdict::Incompatible(incompatibility) => {
                write!(f, "{}: unavailable ({})", self.carrier_name, incompatibility)
            }
        }
    }
}
