//! # Pricing
//!
//! Computes the cost breakdown for a compatible carrier.
//!
//! ```text
//! chargeable = max(weight, volume * 333.33)
//! base       = 150 + chargeable * 0.5          if chargeable <= split point
//!            = chargeable * rate(tier)         otherwise
//! total      = round2(base + pickup + delivery)
//! ```

use crate::domain::entities::carrier::CarrierPolicy;
use crate::domain::entities::quote_outcome::CostBreakdown;
use crate::domain::entities::shipment::ShipmentRequest;
use crate::domain::value_objects::{
    CURRENCY, ChargeableWeight, RateTier, format_fixed2, round_money,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed part of the small-shipment price, in CNY.
pub const SMALL_SHIPMENT_BASE_FEE: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Per-kilogram part of the small-shipment price, in CNY.
pub const SMALL_SHIPMENT_RATE_PER_KG: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Note attached when the small-shipment formula is used.
pub const SMALL_SHIPMENT_NOTE: &str = "Applied 'Small Shipment' fixed pricing structure.";

/// Which freight formula applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tier", content = "rate", rename_all = "snake_case")]
pub enum PricingTier {
    /// Flat small-shipment price.
    SmallShipment,
    /// Chargeable weight times the tier rate.
    PerKg(RateTier),
}

impl PricingTier {
    /// Chooses the formula; the split point itself is still a small shipment.
    #[must_use]
    pub fn select(chargeable_kg: Decimal, split_point_kg: Decimal, rate: RateTier) -> Self {
        if chargeable_kg <= split_point_kg {
            Self::SmallShipment
        } else {
            Self::PerKg(rate)
        }
    }

    /// Unrounded base freight for a chargeable weight.
    #[must_use]
    pub fn base_freight(self, chargeable_kg: Decimal) -> Decimal {
        match self {
            Self::SmallShipment => {
                SMALL_SHIPMENT_BASE_FEE
                    .saturating_add(chargeable_kg.saturating_mul(SMALL_SHIPMENT_RATE_PER_KG))
            }
            Self::PerKg(rate) => chargeable_kg.saturating_mul(rate.rate_per_kg()),
        }
    }

    /// Explanation line for the breakdown notes.
    #[must_use]
    pub fn note(self, chargeable_kg: Decimal) -> String {
        match self {
            Self::SmallShipment => SMALL_SHIPMENT_NOTE.to_string(),
            Self::PerKg(rate) => format!(
                "LTL pricing: {}kg @ {} RMB/kg",
                format_fixed2(chargeable_kg),
                rate.rate_per_kg()
            ),
        }
    }
}

/// Prices a request with a carrier's rules.
///
/// Compatibility is not checked here; callers filter first. Never fails.
///
/// # Examples
///
/// ```
/// use freight_quote::domain::entities::carrier::CarrierPolicy;
/// use freight_quote::domain::entities::shipment::ShipmentRequest;
/// use freight_quote::domain::services::pricing::price;
/// use rust_decimal::Decimal;
///
/// let carrier = CarrierPolicy::builder("rongyun", "Rongyun", "Shanghai")
///     .split_point_kg(Decimal::from(500))
///     .build();
/// let request = ShipmentRequest::builder("Shanghai", "Beijing")
///     .weight_kg(Decimal::from(600))
///     .build()
///     .unwrap();
///
/// let breakdown = price(&request, &carrier);
/// assert_eq!(breakdown.base_freight, Decimal::from(900));
/// assert_eq!(breakdown.notes[0], "LTL pricing: 600.00kg @ 1.5 RMB/kg");
/// ```
#[must_use]
pub fn price(request: &ShipmentRequest, carrier: &CarrierPolicy) -> CostBreakdown {
    let weight = ChargeableWeight::compute(request.weight_kg(), request.volume_cbm());
    let chargeable_kg = weight.kg();

    let rate = RateTier::select(
        request.origin(),
        request.destination(),
        carrier.base_location(),
    );
    let tier = PricingTier::select(chargeable_kg, carrier.split_point_kg(), rate);

    let base_freight = tier.base_freight(chargeable_kg);
    let mut notes = vec![tier.note(chargeable_kg)];

    let rules = carrier.rules();
    let pickup_fee = rules.pickup(chargeable_kg, request.cargo_type());
    let delivery_fee = rules.delivery(chargeable_kg, request.cargo_type());

    if pickup_fee > Decimal::ZERO {
        notes.push(format!("Pickup Fee: {}", pickup_fee));
    }
    if delivery_fee > Decimal::ZERO {
        notes.push(format!("Delivery Fee: {}", delivery_fee));
    }
    if let Some(note) = carrier.note() {
        notes.push(format!("Note: {}", note));
    }

    CostBreakdown {
        base_freight: round_money(base_freight),
        pickup_fee,
        delivery_fee,
        total: round_money(
            base_freight
                .saturating_add(pickup_fee)
                .saturating_add(delivery_fee),
        ),
        currency: CURRENCY.to_string(),
        notes,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::entities::fee_rule::FeeRule;
    use crate::domain::value_objects::CargoType;

    fn carrier(base: &str, split: i64) -> CarrierPolicy {
        CarrierPolicy::builder("test", "Test Carrier", base)
            .split_point_kg(Decimal::from(split))
            .build()
    }

    fn request(origin: &str, destination: &str, weight: Decimal, volume: Decimal) -> ShipmentRequest {
        ShipmentRequest::builder(origin, destination)
            .weight_kg(weight)
            .volume_cbm(volume)
            .build()
            .unwrap()
    }

    mod tiers {
        use super::*;

        #[test]
        fn split_point_is_inclusive() {
            let breakdown = price(
                &request("Shanghai", "Beijing", Decimal::from(500), Decimal::ZERO),
                &carrier("Shanghai", 500),
            );
            assert_eq!(breakdown.base_freight, Decimal::from(400));
            assert_eq!(breakdown.notes[0], SMALL_SHIPMENT_NOTE);
        }

        #[test]
        fn just_above_split_point_uses_rate() {
            let breakdown = price(
                &request("Shanghai", "Beijing", Decimal::from(501), Decimal::ZERO),
                &carrier("Shanghai", 500),
            );
            assert_eq!(breakdown.base_freight, Decimal::new(7515, 1));
            assert_eq!(breakdown.notes[0], "LTL pricing: 501.00kg @ 1.5 RMB/kg");
        }

        #[test]
        fn zero_split_point_always_per_kg() {
            let tier = PricingTier::select(Decimal::ONE, Decimal::ZERO, RateTier::Default);
            assert_eq!(tier, PricingTier::PerKg(RateTier::Default));
        }

        #[test]
        fn same_region_rate() {
            let breakdown = price(
                &request("Jinan", "Jinan", Decimal::from(1000), Decimal::ZERO),
                &carrier("Guangzhou", 0),
            );
            assert_eq!(breakdown.base_freight, Decimal::from(800));
            assert_eq!(breakdown.notes[0], "LTL pricing: 1000.00kg @ 0.8 RMB/kg");
        }

        #[test]
        fn long_distance_rate() {
            let breakdown = price(
                &request("Shenzhen", "Shanghai", Decimal::from(1000), Decimal::ZERO),
                &carrier("Guangzhou", 499),
            );
            assert_eq!(breakdown.base_freight, Decimal::from(3200));
        }

        #[test]
        fn hub_carrier_keeps_default_rate_away_from_base() {
            let breakdown = price(
                &request("Chengdu", "Wuhan", Decimal::from(1000), Decimal::ZERO),
                &carrier("Shanghai", 0),
            );
            assert_eq!(breakdown.base_freight, Decimal::from(1500));
        }
    }

    mod fees_and_notes {
        use super::*;

        #[test]
        fn fees_use_chargeable_weight() {
            // 100 kg but 10 cbm: 3333.3 kg chargeable, above the 3000 kg pickup threshold
            let carrier = CarrierPolicy::builder("x", "X", "Shanghai")
                .pickup(FeeRule::below_weight(
                    Decimal::from(3000),
                    Decimal::from(400),
                    Decimal::from(300),
                ))
                .build();
            let breakdown = price(
                &request("Shanghai", "Beijing", Decimal::from(100), Decimal::from(10)),
                &carrier,
            );
            assert_eq!(breakdown.pickup_fee, Decimal::ZERO);
            assert_eq!(breakdown.notes.len(), 1);
        }

        #[test]
        fn notes_in_order() {
            let carrier = CarrierPolicy::builder("x", "X", "Shanghai")
                .pickup(FeeRule::flat(Decimal::from(400)))
                .delivery(FeeRule::flat(Decimal::from(350)))
                .note("Call ahead.")
                .build();
            let breakdown = price(
                &request("Shanghai", "Beijing", Decimal::from(600), Decimal::ZERO),
                &carrier,
            );
            assert_eq!(
                breakdown.notes,
                vec![
                    "LTL pricing: 600.00kg @ 1.5 RMB/kg".to_string(),
                    "Pickup Fee: 400".to_string(),
                    "Delivery Fee: 350".to_string(),
                    "Note: Call ahead.".to_string(),
                ]
            );
            assert_eq!(breakdown.total, Decimal::from(1650));
            assert_eq!(breakdown.currency, "CNY");
        }

        #[test]
        fn cargo_type_drives_tiered_fee() {
            let carrier = CarrierPolicy::builder("x", "X", "Shanghai")
                .pickup(FeeRule::below_weight(
                    Decimal::from(5000),
                    Decimal::from(400),
                    Decimal::from(300),
                ))
                .build();
            let request = ShipmentRequest::builder("Shanghai", "Beijing")
                .cargo_type(CargoType::Ndg)
                .weight_kg(Decimal::from(600))
                .build()
                .unwrap();
            assert_eq!(price(&request, &carrier).pickup_fee, Decimal::from(300));
        }
    }

    mod rounding {
        use super::*;

        #[test]
        fn base_and_total_round_half_up() {
            // 1 cbm = 333.33 kg, 333.33 * 1.5 = 499.995
            let carrier = CarrierPolicy::builder("x", "X", "Shanghai")
                .pickup(FeeRule::flat(Decimal::from(150)))
                .build();
            let breakdown = price(
                &request("Shanghai", "Beijing", Decimal::from(100), Decimal::ONE),
                &carrier,
            );
            assert_eq!(breakdown.base_freight, Decimal::new(50_000, 2));
            assert_eq!(breakdown.total, Decimal::new(65_000, 2));
            assert_eq!(breakdown.notes[0], "LTL pricing: 333.33kg @ 1.5 RMB/kg");
        }

        #[test]
        fn total_equals_rounded_sum() {
            let carrier = CarrierPolicy::builder("x", "X", "Guangzhou")
                .delivery(FeeRule::flat(Decimal::from(150)))
                .build();
            let breakdown = price(
                &request("Wuhan", "Beijing", Decimal::new(12_345, 2), Decimal::ZERO),
                &carrier,
            );
            // 123.45 * 3.2 = 395.04
            assert_eq!(breakdown.base_freight, Decimal::new(39_504, 2));
            assert_eq!(
                breakdown.total,
                round_money(breakdown.base_freight + breakdown.pickup_fee + breakdown.delivery_fee)
            );
        }
    }

    mod extremes {
        use super::*;
        use serde_json::json;

        fn unchecked(weight: Decimal, volume: Decimal) -> ShipmentRequest {
            serde_json::from_value(json!({
                "origin": "Shanghai",
                "destination": "Beijing",
                "businessLine": "SCI",
                "cargoType": "DG",
                "mode": "LTL",
                "weightKg": weight.to_string(),
                "volumeCbm": volume.to_string(),
            }))
            .unwrap()
        }

        #[test]
        fn max_weight_saturates_total() {
            let carrier = CarrierPolicy::builder("x", "X", "Shanghai")
                .pickup(FeeRule::flat(Decimal::from(400)))
                .build();
            let breakdown = price(&unchecked(Decimal::MAX, Decimal::ZERO), &carrier);
            assert_eq!(breakdown.base_freight, Decimal::MAX);
            assert_eq!(breakdown.pickup_fee, Decimal::from(400));
            assert_eq!(breakdown.total, Decimal::MAX);
        }

        #[test]
        fn huge_volume_saturates_per_kg_freight() {
            let breakdown = price(
                &unchecked(Decimal::ONE, Decimal::MAX / Decimal::from(100)),
                &carrier("Shanghai", 500),
            );
            assert_eq!(breakdown.base_freight, Decimal::MAX);
            assert_eq!(breakdown.total, Decimal::MAX);
        }
    }
}
