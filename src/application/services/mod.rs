//! # Application Services
//!
//! Services that orchestrate domain rules and infrastructure.
//!
//! - [`quote_evaluator`]: evaluate a request against a registry
//! - [`ranking`]: presentation order of outcomes
//! - [`quote_analysis`]: optional advisor recommendation

pub mod quote_analysis;
pub mod quote_evaluator;
pub mod ranking;

pub use quote_analysis::{AnalysisPrompt, NO_ANALYSIS, QuoteAnalysisService};
pub use quote_evaluator::{evaluate, evaluate_carrier};
pub use ranking::{best_outcome, compare_outcomes, rank_outcomes};
