//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! ## Domain Enums
//!
//! - [`BusinessLine`], [`CargoType`], [`TransportMode`], [`BillingBasis`]
//!
//! ## Pricing Inputs
//!
//! - [`ChargeableWeight`]: greater of actual and volumetric weight
//! - [`RateTier`]: per-kg base rate selection
//!
//! ## Arithmetic
//!
//! - [`round_money`]: two-decimal rounding for quoted amounts

pub mod arithmetic;
pub mod enums;
pub mod rate_tier;
pub mod weight;

pub use arithmetic::{CURRENCY, format_fixed2, round_money};
pub use enums::{BillingBasis, BusinessLine, CargoType, ParseEnumError, TransportMode};
pub use rate_tier::{HUB_LOCATION, RateTier};
pub use weight::{ChargeableWeight, VOLUMETRIC_KG_PER_CBM};
