//! # Compatibility Checks
//!
//! Decides whether a carrier can take a shipment at all.
//!
//! Four checks run in order and every failure is collected:
//!
//! 1. business line
//! 2. cargo type
//! 3. transport mode
//! 4. location affinity
//!
//! Location affinity is keyed on the carrier's display name. A carrier whose
//! name mentions a city-bound region only picks up from that region. The
//! match is case-sensitive, and only the request origin is considered:
//!
//! | Name contains | Origin must |
//! |---|---|
//! | `Zhangjiagang` | contain `Zhangjiagang` |
//! | `Jinan` | contain `Jinan` |
//! | `South China` | equal `Guangzhou` or `Shenzhen` |

use crate::domain::entities::carrier::CarrierPolicy;
use crate::domain::entities::quote_outcome::IncompatibilityReason;
use crate::domain::entities::shipment::ShipmentRequest;

/// How a request origin is matched against a city-bound carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginMatch {
    /// Origin must contain the substring.
    Contains(&'static str),
    /// Origin must equal one of the cities exactly.
    OneOf(&'static [&'static str]),
}

impl OriginMatch {
    /// Returns true if the origin satisfies the rule.
    #[must_use]
    pub fn matches(self, origin: &str) -> bool {
        match self {
            Self::Contains(fragment) => origin.contains(fragment),
            Self::OneOf(cities) => cities.contains(&origin),
        }
    }
}

/// A name marker that binds a carrier to an operating region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationAffinity {
    /// Substring of the carrier display name that triggers the rule.
    pub name_marker: &'static str,
    /// Rule the request origin must satisfy.
    pub origin: OriginMatch,
    /// Region label used in the rejection reason.
    pub region: &'static str,
}

impl LocationAffinity {
    /// Returns true if the carrier name carries this marker.
    #[must_use]
    pub fn applies_to(&self, carrier_name: &str) -> bool {
        carrier_name.contains(self.name_marker)
    }
}

/// The city-bound regions known to the rule set.
pub static LOCATION_AFFINITIES: [LocationAffinity; 3] = [
    LocationAffinity {
        name_marker: "Zhangjiagang",
        origin: OriginMatch::Contains("Zhangjiagang"),
        region: "Zhangjiagang",
    },
    LocationAffinity {
        name_marker: "Jinan",
        origin: OriginMatch::Contains("Jinan"),
        region: "Jinan",
    },
    LocationAffinity {
        name_marker: "South China",
        origin: OriginMatch::OneOf(&["Guangzhou", "Shenzhen"]),
        region: "South China (Guangzhou/Shenzhen)",
    },
];

/// Collects every reason the carrier cannot take the request.
///
/// An empty result means the carrier is compatible.
#[must_use]
pub fn check_compatibility(
    request: &ShipmentRequest,
    carrier: &CarrierPolicy,
) -> Vec<IncompatibilityReason> {
    let mut reasons = Vec::new();

    if !carrier.supports_line(request.business_line()) {
        reasons.push(IncompatibilityReason::UnsupportedBusinessLine {
            line: request.business_line(),
        });
    }
    if !carrier.supports_cargo_type(request.cargo_type()) {
        reasons.push(IncompatibilityReason::UnsupportedCargoType {
            cargo_type: request.cargo_type(),
        });
    }
    if !carrier.supports_mode(request.mode()) {
        reasons.push(IncompatibilityReason::UnsupportedMode {
            mode: request.mode(),
        });
    }

    reasons.extend(location_affinity_reasons(carrier.name(), request.origin()));
    reasons
}

/// Region rejections for a carrier name and request origin.
pub fn location_affinity_reasons<'a>(
    carrier_name: &'a str,
    origin: &'a str,
) -> impl Iterator<Item = IncompatibilityReason> + 'a {
    LOCATION_AFFINITIES
        .iter()
        .filter(move |affinity| affinity.applies_to(carrier_name))
        .filter(move |affinity| !affinity.origin.matches(origin))
        .map(|affinity| IncompatibilityReason::OutsideOperatingRegion {
            region: affinity.region.to_string(),
        })
}
