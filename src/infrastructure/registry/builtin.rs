//! Built-in carrier contracts.
//!
//! Mirrors `data/carriers.toml`; a test keeps the two in sync.

use crate::domain::entities::carrier::CarrierPolicy;
use crate::domain::entities::fee_rule::FeeRule;
use crate::domain::value_objects::{BillingBasis, BusinessLine, CargoType, TransportMode};
use rust_decimal::Decimal;

const SMALL_TICKET_SPLIT_KG: i64 = 500;

fn kg(value: i64) -> Decimal {
    Decimal::from(value)
}

fn cny(value: i64) -> Decimal {
    Decimal::from(value)
}

/// The built-in roster in registry order.
#[must_use]
pub fn carriers() -> Vec<CarrierPolicy> {
    vec![
        CarrierPolicy::builder("kerry_zjg", "Zhangjiagang Kerry (张家港嘉里)", "Zhangjiagang")
            .lines([BusinessLine::Sci, BusinessLine::Phi])
            .cargo_types([CargoType::Dg, CargoType::Ndg])
            .modes([TransportMode::Ftl, TransportMode::Ltl])
            .billing_basis(BillingBasis::Net)
            .split_point_kg(kg(SMALL_TICKET_SPLIT_KG))
            .description("Integrated warehousing/distribution. No separate pickup/delivery fees.")
            .note("For large weights (8-10t), FTL is suggested.")
            .build(),
        CarrierPolicy::builder("lianqiang", "Lianqiang (联强)", "Shanghai")
            .lines([
                BusinessLine::Sci,
                BusinessLine::Pci,
                BusinessLine::Fbi,
                BusinessLine::Phi,
            ])
            .cargo_types([CargoType::Dg, CargoType::Ndg])
            .modes([TransportMode::Ftl, TransportMode::Ltl])
            .billing_basis(BillingBasis::Gross)
            .split_point_kg(kg(SMALL_TICKET_SPLIT_KG))
            .description("Separate pickup/delivery fees based on weight tiers.")
            .pickup(FeeRule::below_weight(kg(5000), cny(400), cny(300)))
            .delivery(FeeRule::below_weight(kg(5000), cny(350), cny(200)))
            .build(),
        CarrierPolicy::builder("rongyun", "Rongyun (嵘芸)", "Shanghai")
            .lines([BusinessLine::Sci])
            .cargo_types([CargoType::Ndg])
            .modes([TransportMode::Ltl])
            .billing_basis(BillingBasis::Net)
            .split_point_kg(kg(SMALL_TICKET_SPLIT_KG))
            .description("Integrated warehousing. No separate fees.")
            .build(),
        CarrierPolicy::builder("xinhong_south", "Xinhong South China (鑫虹华南)", "Guangzhou")
            .lines([BusinessLine::Sci])
            .cargo_types([CargoType::Dg, CargoType::Ndg])
            .modes([TransportMode::Ftl, TransportMode::Ltl])
            .billing_basis(BillingBasis::Net)
            .split_point_kg(kg(499))
            .description("Pickup fee <3t. Delivery fee applies per ticket.")
            .pickup(FeeRule::below_weight(kg(3000), cny(400), cny(300)))
            .delivery(FeeRule::flat(cny(150)))
            .build(),
        CarrierPolicy::builder("xinhong_jinan", "Xinhong Jinan (鑫虹济南)", "Jinan")
            .lines([BusinessLine::Sci])
            .cargo_types([CargoType::Dg, CargoType::Ndg])
            .modes([TransportMode::Ltl])
            .billing_basis(BillingBasis::Net)
            .split_point_kg(kg(SMALL_TICKET_SPLIT_KG))
            .description("Pickup fee <3t. No delivery fee.")
            .pickup(FeeRule::below_weight(kg(3000), cny(400), cny(300)))
            .build(),
        CarrierPolicy::builder("sinotrans", "Sinotrans (中外运)", "Shanghai")
            .lines([BusinessLine::Fbi, BusinessLine::Pci])
            .cargo_types([CargoType::Ndg])
            .modes([TransportMode::Ftl, TransportMode::Ltl])
            .billing_basis(BillingBasis::Gross)
            .split_point_kg(Decimal::ZERO)
            .description("Fixed delivery fee 200/ticket.")
            .delivery(FeeRule::flat(cny(200)))
            .build(),
        CarrierPolicy::builder("anji", "Anji (安吉)", "Shanghai")
            .lines([BusinessLine::Sci])
            .cargo_types([CargoType::Ndg])
            .modes([TransportMode::Ltl])
            .billing_basis(BillingBasis::Net)
            .split_point_kg(Decimal::ZERO)
            .description("Per kg pricing. Pickup fee <5t 150 RMB.")
            .pickup(FeeRule::below_weight(kg(5000), cny(150), cny(150)))
            .build(),
    ]
}
