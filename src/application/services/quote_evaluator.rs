//! # Quote Evaluator
//!
//! Evaluates a shipment request against every carrier in a registry.
//!
//! Each carrier yields exactly one [`QuoteOutcome`]. Carriers that fail
//! the capability or location checks are reported with their reasons and
//! are never priced. The result is ranked by
//! [`rank_outcomes`](crate::application::services::ranking::rank_outcomes).
//!
//! Evaluation is pure and synchronous; the same inputs always produce the
//! same output.
//!
//! # Examples
//!
//! ```
//! use freight_quote::application::services::quote_evaluator::evaluate;
//! use freight_quote::domain::entities::shipment::ShipmentRequest;
//! use freight_quote::domain::value_objects::CargoType;
//! use freight_quote::infrastructure::registry::CarrierRegistry;
//! use rust_decimal::Decimal;
//!
//! let registry = CarrierRegistry::builtin();
//! let request = ShipmentRequest::builder("Shanghai", "Beijing")
//!     .cargo_type(CargoType::Ndg)
//!     .weight_kg(Decimal::from(600))
//!     .volume_cbm(Decimal::new(15, 1))
//!     .build()
//!     .unwrap();
//!
//! let outcomes = evaluate(&request, registry.as_slice());
//! assert_eq!(outcomes.len(), 7);
//! assert_eq!(outcomes[0].carrier_id(), "rongyun");
//! assert_eq!(outcomes[0].total(), Decimal::from(900));
//! ```

use crate::application::services::ranking::{best_outcome, rank_outcomes};
use crate::domain::entities::carrier::CarrierPolicy;
use crate::domain::entities::quote_outcome::{Incompatibility, QuoteOutcome};
use crate::domain::entities::shipment::ShipmentRequest;
use crate::domain::services::compatibility::check_compatibility;
use crate::domain::services::pricing::price;

/// Evaluates `request` against every carrier and ranks the outcomes.
///
/// Never fails: unsupported combinations become incompatible outcomes.
#[must_use]
pub fn evaluate(request: &ShipmentRequest, registry: &[CarrierPolicy]) -> Vec<QuoteOutcome> {
    let mut outcomes: Vec<QuoteOutcome> = registry
        .iter()
        .map(|carrier| evaluate_carrier(request, carrier))
        .collect();
    rank_outcomes(&mut outcomes);

    let compatible = outcomes.iter().filter(|o| o.is_compatible()).count();
    tracing::info!(
        origin = request.origin(),
        destination = request.destination(),
        carriers = outcomes.len(),
        compatible,
        best = best_outcome(&outcomes).map(QuoteOutcome::carrier_id),
        "evaluated shipment request"
    );

    outcomes
}

/// Evaluates `request` against a single carrier.
#[must_use]
pub fn evaluate_carrier(request: &ShipmentRequest, carrier: &CarrierPolicy) -> QuoteOutcome {
    let reasons = check_compatibility(request, carrier);

    match Incompatibility::from_reasons(reasons) {
        Some(incompatibility) => {
            tracing::debug!(
                carrier = carrier.id(),
                reasons = %incompatibility,
                "carrier incompatible"
            );
            QuoteOutcome::incompatible(carrier.id(), carrier.name(), incompatibility)
        }
        None => {
            let breakdown = price(request, carrier);
            tracing::debug!(
                carrier = carrier.id(),
                base_freight = %breakdown.base_freight,
                pickup_fee = %breakdown.pickup_fee,
                delivery_fee = %breakdown.delivery_fee,
                total = %breakdown.total,
                "carrier priced"
            );
            QuoteOutcome::compatible(carrier.id(), carrier.name(), breakdown)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{BusinessLine, CargoType, TransportMode};
    use crate::infrastructure::registry::CarrierRegistry;
    use rust_decimal::Decimal;

    fn request(origin: &str, destination: &str, cargo: CargoType, kg: i64) -> ShipmentRequest {
        ShipmentRequest::builder(origin, destination)
            .cargo_type(cargo)
            .weight_kg(Decimal::from(kg))
            .volume_cbm(Decimal::new(15, 1))
            .build()
            .unwrap()
    }

    fn ids(outcomes: &[QuoteOutcome]) -> Vec<&str> {
        outcomes.iter().map(QuoteOutcome::carrier_id).collect()
    }

    mod single_carrier {
        use super::*;

        #[test]
        fn incompatible_carrier_is_not_priced() {
            let registry = CarrierRegistry::builtin();
            let rongyun = registry.iter().find(|c| c.id() == "rongyun").unwrap();
            let outcome = evaluate_carrier(
                &request("Shanghai", "Beijing", CargoType::Dg, 600),
                rongyun,
            );
            assert!(outcome.breakdown().is_none());
            assert_eq!(
                outcome.incompatibility_reason().as_deref(),
                Some("Does not support cargo type DG")
            );
        }

        #[test]
        fn compatible_carrier_carries_notes() {
            let registry = CarrierRegistry::builtin();
            let kerry = registry.iter().find(|c| c.id() == "kerry_zjg").unwrap();
            let outcome = evaluate_carrier(
                &request("Zhangjiagang", "Beijing", CargoType::Ndg, 600),
                kerry,
            );
            let breakdown = outcome.breakdown().unwrap();
            assert_eq!(breakdown.base_freight, Decimal::from(900));
            assert_eq!(
                breakdown.notes,
                vec![
                    "LTL pricing: 600.00kg @ 1.5 RMB/kg".to_string(),
                    "Note: For large weights (8-10t), FTL is suggested.".to_string(),
                ]
            );
        }
    }

    mod registry_wide {
        use super::*;

        #[test]
        fn shanghai_to_guangzhou_dg() {
            let registry = CarrierRegistry::builtin();
            let outcomes = evaluate(
                &request("Shanghai", "Guangzhou", CargoType::Dg, 600),
                registry.as_slice(),
            );

            assert_eq!(
                ids(&outcomes),
                vec![
                    "lianqiang",
                    "kerry_zjg",
                    "rongyun",
                    "xinhong_south",
                    "xinhong_jinan",
                    "sinotrans",
                    "anji"
                ]
            );

            let lianqiang = outcomes[0].breakdown().unwrap();
            assert_eq!(lianqiang.base_freight, Decimal::from(900));
            assert_eq!(lianqiang.pickup_fee, Decimal::from(400));
            assert_eq!(lianqiang.delivery_fee, Decimal::from(350));
            assert_eq!(lianqiang.total, Decimal::from(1650));

            assert_eq!(
                outcomes[5].incompatibility_reason().as_deref(),
                Some("Does not support business line SCI, Does not support cargo type DG")
            );
            assert!(outcomes[1..].iter().all(|o| !o.is_compatible()));
        }

        #[test]
        fn shanghai_to_beijing_ndg_sorted_by_total() {
            let registry = CarrierRegistry::builtin();
            let outcomes = evaluate(
                &request("Shanghai", "Beijing", CargoType::Ndg, 600),
                registry.as_slice(),
            );
            let totals: Vec<(&str, Decimal)> = outcomes
                .iter()
                .filter(|o| o.is_compatible())
                .map(|o| (o.carrier_id(), o.total()))
                .collect();
            assert_eq!(
                totals,
                vec![
                    ("rongyun", Decimal::from(900)),
                    ("anji", Decimal::from(1050)),
                    ("lianqiang", Decimal::from(1400)),
                ]
            );
        }

        #[test]
        fn equal_totals_keep_registry_order() {
            let registry = CarrierRegistry::builtin();
            let request = ShipmentRequest::builder("Zhangjiagang", "Beijing")
                .cargo_type(CargoType::Ndg)
                .weight_kg(Decimal::from(400))
                .build()
                .unwrap();
            let outcomes = evaluate(&request, registry.as_slice());
            assert_eq!(&ids(&outcomes)[..4], &["kerry_zjg", "rongyun", "anji", "lianqiang"]);
            assert_eq!(outcomes[0].total(), Decimal::from(350));
            assert_eq!(outcomes[1].total(), Decimal::from(350));
        }

        #[test]
        fn empty_registry_gives_no_outcomes() {
            let outcomes = evaluate(&request("Shanghai", "Beijing", CargoType::Ndg, 600), &[]);
            assert!(outcomes.is_empty());
        }

        #[test]
        fn ftl_narrows_the_field() {
            let registry = CarrierRegistry::builtin();
            let request = ShipmentRequest::builder("Shanghai", "Wuhan")
                .business_line(BusinessLine::Pci)
                .cargo_type(CargoType::Ndg)
                .mode(TransportMode::Ftl)
                .weight_kg(Decimal::from(2000))
                .build()
                .unwrap();
            let outcomes = evaluate(&request, registry.as_slice());
            let compatible: Vec<&str> = outcomes
                .iter()
                .filter(|o| o.is_compatible())
                .map(QuoteOutcome::carrier_id)
                .collect();
            // 3000 + 200 delivery vs 3000 + 300 pickup + 200 delivery
            assert_eq!(compatible, vec!["sinotrans", "lianqiang"]);
        }
    }

    mod best {
        use super::*;

        #[test]
        fn cheapest_compatible_leads() {
            let registry = CarrierRegistry::builtin();
            let outcomes = evaluate(
                &request("Shanghai", "Beijing", CargoType::Ndg, 600),
                registry.as_slice(),
            );
            let best = best_outcome(&outcomes).unwrap();
            assert_eq!(best.carrier_id(), "rongyun");
            assert_eq!(best.carrier_id(), outcomes[0].carrier_id());
        }

        #[test]
        fn none_when_nothing_fits() {
            let carriers = [
                CarrierPolicy::builder("a", "A", "Shanghai").build(),
                CarrierPolicy::builder("b", "B", "Wuhan").build(),
            ];
            let outcomes = evaluate(
                &request("Shanghai", "Beijing", CargoType::Ndg, 600),
                &carriers,
            );
            assert_eq!(outcomes.len(), 2);
            assert!(best_outcome(&outcomes).is_none());
        }
    }
}
