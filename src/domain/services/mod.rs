//! # Domain Services
//!
//! Rule logic that spans a request and a carrier policy.
//!
//! ## Services
//!
//! - [`compatibility`]: capability and location-affinity filtering
//! - [`pricing`]: chargeable weight, rate tier and fee computation

pub mod compatibility;
pub mod pricing;

pub use compatibility::{LOCATION_AFFINITIES, LocationAffinity, OriginMatch, check_compatibility};
pub use pricing::{PricingTier, price};
