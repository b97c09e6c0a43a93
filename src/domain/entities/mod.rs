//! # Domain Entities
//!
//! ## Inputs
//!
//! - [`ShipmentRequest`]: what the caller wants to ship
//! - [`CarrierPolicy`]: what a carrier accepts and how it charges
//!
//! ## Outputs
//!
//! - [`QuoteOutcome`]: per-carrier verdict with price or reasons

pub mod carrier;
pub mod fee_rule;
pub mod quote_outcome;
pub mod shipment;

pub use carrier::{CarrierPolicy, CarrierPolicyBuilder};
pub use fee_rule::{CarrierFeeRules, FeeRule, InsuranceRule};
pub use quote_outcome::{
    CostBreakdown, Incompatibility, IncompatibilityReason, QuoteOutcome, QuoteVerdict,
};
pub use shipment::{
    KNOWN_CITIES, MAX_VOLUME_CBM, MAX_WEIGHT_KG, ShipmentRequest, ShipmentRequestBuilder,
    is_known_city,
};
