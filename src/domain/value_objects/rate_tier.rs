//! # Rate Tiers
//!
//! Per-kilogram base rates applied above a carrier's split point.
//!
//! | Tier | Key | RMB/kg |
//! |---|---|---|
//! | [`RateTier::SameRegion`] | `same_region` | 0.8 |
//! | [`RateTier::LongDistance`] | `long_distance` | 3.2 |
//! | [`RateTier::Default`] | `default` | 1.5 |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Carriers based here never receive the long-distance rate.
pub const HUB_LOCATION: &str = "Shanghai";

/// Base rate tier for a shipment/carrier pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateTier {
    /// Origin and destination are the same city.
    SameRegion,
    /// Origin is away from a non-hub carrier's base.
    LongDistance,
    /// Everything else.
    Default,
}

impl RateTier {
    /// Selects the tier for a lane and a carrier base.
    ///
    /// Same-region wins over everything. Long distance applies only when the
    /// origin differs from the carrier base and that base is not the hub.
    ///
    /// # Examples
    ///
    /// ```
    /// use freight_quote::domain::value_objects::rate_tier::RateTier;
    ///
    /// assert_eq!(RateTier::select("Jinan", "Jinan", "Shanghai"), RateTier::SameRegion);
    /// assert_eq!(RateTier::select("Wuhan", "Beijing", "Jinan"), RateTier::LongDistance);
    /// assert_eq!(RateTier::select("Wuhan", "Beijing", "Shanghai"), RateTier::Default);
    /// ```
    #[must_use]
    pub fn select(origin: &str, destination: &str, base_location: &str) -> Self {
        if origin == destination {
            Self::SameRegion
        } else if origin != base_location && base_location != HUB_LOCATION {
            Self::LongDistance
        } else {
            Self::Default
        }
    }

    /// Rate in RMB per chargeable kilogram.
    #[inline]
    #[must_use]
    pub const fn rate_per_kg(self) -> Decimal {
        match self {
            Self::SameRegion => Decimal::from_parts(8, 0, 0, false, 1),
            Self::LongDistance => Decimal::from_parts(32, 0, 0, false, 1),
            Self::Default => Decimal::from_parts(15, 0, 0, false, 1),
        }
    }

    /// Lookup key of the tier.
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::SameRegion => "same_region",
            Self::LongDistance => "long_distance",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for RateTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_region_beats_base_mismatch() {
        assert_eq!(
            RateTier::select("Guangzhou", "Guangzhou", "Jinan"),
            RateTier::SameRegion
        );
    }

    #[test]
    fn hub_carriers_never_long_distance() {
        assert_eq!(
            RateTier::select("Chengdu", "Wuhan", HUB_LOCATION),
            RateTier::Default
        );
    }

    #[test]
    fn origin_at_base_is_default() {
        assert_eq!(
            RateTier::select("Guangzhou", "Beijing", "Guangzhou"),
            RateTier::Default
        );
    }

    #[test]
    fn origin_away_from_base_is_long_distance() {
        assert_eq!(
            RateTier::select("Shenzhen", "Shanghai", "Guangzhou"),
            RateTier::LongDistance
        );
    }

    #[test]
    fn rates() {
        assert_eq!(RateTier::SameRegion.rate_per_kg(), Decimal::new(8, 1));
        assert_eq!(RateTier::LongDistance.rate_per_kg(), Decimal::new(32, 1));
        assert_eq!(RateTier::Default.rate_per_kg(), Decimal::new(15, 1));
        assert_eq!(RateTier::Default.rate_per_kg().to_string(), "1.5");
    }
}
