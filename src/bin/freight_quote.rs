//! `freight-quote` command-line front end.
//!
//! Evaluates one shipment against the carrier registry and prints the
//! ranked quotes, optionally followed by an advisor recommendation.

use anyhow::Context;
use clap::Parser;
use freight_quote::application::ApplicationError;
use freight_quote::application::services::QuoteAnalysisService;
use freight_quote::config::AppConfig;
use freight_quote::domain::entities::{QuoteOutcome, QuoteVerdict, ShipmentRequest, is_known_city};
use freight_quote::domain::value_objects::{
    BusinessLine, CargoType, TransportMode, format_fixed2,
};
use freight_quote::evaluate;
use freight_quote::infrastructure::advisor::GeminiAdvisor;
use freight_quote::telemetry;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::sync::Arc;

/// Rank carrier quotes for a domestic shipment.
#[derive(Parser, Debug)]
#[command(name = "freight-quote", version)]
struct Args {
    /// Pickup city.
    #[arg(long, default_value = "Shanghai")]
    origin: String,

    /// Delivery city.
    #[arg(long, default_value = "Guangzhou")]
    destination: String,

    /// Business line: SCI, PHI, PCI or FBI.
    #[arg(long, default_value = "SCI")]
    business_line: BusinessLine,

    /// Cargo type: DG or NDG.
    #[arg(long, default_value = "DG")]
    cargo_type: CargoType,

    /// Transport mode: LTL or FTL.
    #[arg(long, default_value = "LTL")]
    mode: TransportMode,

    /// Actual weight in kilograms.
    #[arg(long, default_value = "600")]
    weight_kg: Decimal,

    /// Volume in cubic meters.
    #[arg(long, default_value = "1.5")]
    volume_cbm: Decimal,

    /// Configuration file; `freight-quote.toml` is used when present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Carrier registry file, overriding the configured one.
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Print outcomes as JSON.
    #[arg(long)]
    json: bool,

    /// Ask the configured advisor for a recommendation.
    #[arg(long)]
    analyze: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_from(args.config.as_deref())?;
    if let Some(path) = &args.registry {
        config.registry.path = Some(path.clone());
    }
    telemetry::init_tracing(&config.log)?;

    let registry = config
        .load_registry()
        .context("failed to load carrier registry")?;

    for city in [&args.origin, &args.destination] {
        if !is_known_city(city) {
            tracing::warn!(city = %city, "unknown city, location rules may not apply");
        }
    }

    let request = ShipmentRequest::new(
        args.origin.trim(),
        args.destination.trim(),
        args.business_line,
        args.cargo_type,
        args.mode,
        args.weight_kg,
        args.volume_cbm,
    )
    .context("invalid shipment request")?;

    let outcomes = evaluate(&request, registry.as_slice());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
    } else {
        print_outcomes(&request, &outcomes);
    }

    if args.analyze {
        let advisor = GeminiAdvisor::from_config(&config.advisor)?;
        let service = QuoteAnalysisService::new(Arc::new(advisor), config.advisor.max_quotes);

        match service.analyze(&request, &outcomes).await {
            Ok(analysis) => {
                println!();
                println!("AI Recommendation");
                println!("{}", analysis);
            }
            Err(ApplicationError::NoCompatibleQuotes) => {
                eprintln!("{}", ApplicationError::NoCompatibleQuotes.user_message());
            }
            Err(e) => {
                let message = e.user_message();
                return Err(anyhow::Error::new(e).context(message));
            }
        }
    }

    Ok(())
}

fn print_outcomes(request: &ShipmentRequest, outcomes: &[QuoteOutcome]) {
    let weight = request.chargeable_weight();
    println!("{}", request);
    println!(
        "Chargeable weight: {} kg{}",
        format_fixed2(weight.kg()),
        if weight.is_volumetric() { " (volumetric)" } else { "" }
    );
    println!();

    let mut rank = 0;
    for outcome in outcomes {
        match outcome.verdict() {
            QuoteVerdict::Compatible(breakdown) => {
                rank += 1;
                println!(
                    "{:>2}. {:<36} {:>10} {}",
                    rank,
                    outcome.carrier_name(),
                    format_fixed2(breakdown.total),
                    breakdown.currency
                );
                println!(
                    "    base {}  pickup {}  delivery {}",
                    format_fixed2(breakdown.base_freight),
                    format_fixed2(breakdown.pickup_fee),
                    format_fixed2(breakdown.delivery_fee)
                );
                for note in &breakdown.notes {
                    println!("    - {}", note);
                }
            }
            QuoteVerdict::Incompatible(incompatibility) => {
                println!(
                    "  x {:<36} unavailable: {}",
                    outcome.carrier_name(),
                    incompatibility
                );
            }
        }
    }
}
