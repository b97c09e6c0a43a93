//! # freight-quote
//!
//! Rule-based freight quote engine for domestic shipments.
//!
//! A [`ShipmentRequest`](domain::entities::ShipmentRequest) is evaluated
//! against every [`CarrierPolicy`](domain::entities::CarrierPolicy) in a
//! [`CarrierRegistry`](infrastructure::registry::CarrierRegistry). Each
//! carrier yields one [`QuoteOutcome`](domain::entities::QuoteOutcome):
//! either a cost breakdown in CNY or the reasons it cannot take the
//! shipment. Compatible outcomes come first, cheapest first.
//!
//! ## Layers
//!
//! - [`domain`]: requests, carrier policies, fee rules and pricing
//! - [`application`]: evaluation, ranking and optional quote analysis
//! - [`infrastructure`]: registry loading and the text-generation adapter
//! - [`config`], [`telemetry`]: settings and logging
//!
//! ## Quick start
//!
//! ```
//! use freight_quote::domain::entities::ShipmentRequest;
//! use freight_quote::domain::value_objects::CargoType;
//! use freight_quote::infrastructure::registry::CarrierRegistry;
//! use rust_decimal::Decimal;
//!
//! let registry = CarrierRegistry::builtin();
//! let request = ShipmentRequest::builder("Shanghai", "Guangzhou")
//!     .cargo_type(CargoType::Dg)
//!     .weight_kg(Decimal::from(600))
//!     .volume_cbm(Decimal::new(15, 1))
//!     .build()
//!     .unwrap();
//!
//! let outcomes = freight_quote::evaluate(&request, registry.as_slice());
//! let best = &outcomes[0];
//! assert_eq!(best.carrier_id(), "lianqiang");
//! assert_eq!(best.total(), Decimal::from(1650));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;

pub use application::services::quote_evaluator::evaluate;
