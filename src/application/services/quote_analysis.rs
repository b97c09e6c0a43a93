//! # Quote Analysis
//!
//! Asks a [`QuoteAdvisor`] for a short recommendation over the evaluated
//! quotes.
//!
//! Analysis is optional and strictly downstream of evaluation: it reads the
//! ranked outcomes and never changes them. It is only offered when at least
//! one carrier is compatible.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::quote_outcome::QuoteOutcome;
use crate::domain::entities::shipment::ShipmentRequest;
use crate::infrastructure::advisor::error::AdvisorError;
use crate::infrastructure::advisor::traits::QuoteAdvisor;
use std::fmt;
use std::sync::Arc;

/// Returned when the advisor answers with nothing.
pub const NO_ANALYSIS: &str = "No analysis generated.";

/// Default number of compatible quotes included in a prompt.
pub const DEFAULT_MAX_QUOTES: usize = 4;

/// Prompt text sent to the advisor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt(String);

impl AnalysisPrompt {
    /// Builds the prompt from a request and its ranked outcomes.
    ///
    /// Only the first `max_quotes` compatible outcomes are included, as
    /// pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Serialization` if the outcomes cannot be
    /// encoded.
    pub fn build(
        request: &ShipmentRequest,
        outcomes: &[QuoteOutcome],
        max_quotes: usize,
    ) -> ApplicationResult<Self> {
        let quotes: Vec<&QuoteOutcome> = outcomes
            .iter()
            .filter(|outcome| outcome.is_compatible())
            .take(max_quotes)
            .collect();
        let quotes_json = serde_json::to_string_pretty(&quotes)
            .map_err(|e| ApplicationError::serialization(e.to_string()))?;

        Ok(Self(format!(
            "You are a logistics expert for domestic freight in China. \
             Analyze the following transport quotes.\n\
             \n\
             Shipment Details:\n\
             - Origin: {origin}\n\
             - Destination: {destination}\n\
             - Weight: {weight} kg\n\
             - Type: {cargo_type}\n\
             - Business Line: {business_line}\n\
             \n\
             Quotes Generated:\n\
             {quotes_json}\n\
             \n\
             Please provide a concise recommendation.\n\
             1. Identify the most cost-effective option.\n\
             2. Highlight any specific risks or notes (e.g. specialized DG carriers vs General).\n\
             3. Mention if the price difference is significant.\n\
             Keep it under 150 words. Format as Markdown.",
            origin = request.origin(),
            destination = request.destination(),
            weight = request.weight_kg(),
            cargo_type = request.cargo_type(),
            business_line = request.business_line(),
        )))
    }

    /// The prompt text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnalysisPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Produces a recommendation for a set of evaluated quotes.
#[derive(Debug, Clone)]
pub struct QuoteAnalysisService {
    advisor: Arc<dyn QuoteAdvisor>,
    max_quotes: usize,
}

impl QuoteAnalysisService {
    /// Creates a service sending at most `max_quotes` compatible quotes.
    #[must_use]
    pub fn new(advisor: Arc<dyn QuoteAdvisor>, max_quotes: usize) -> Self {
        Self {
            advisor,
            max_quotes,
        }
    }

    /// Creates a service with [`DEFAULT_MAX_QUOTES`].
    #[must_use]
    pub fn with_defaults(advisor: Arc<dyn QuoteAdvisor>) -> Self {
        Self::new(advisor, DEFAULT_MAX_QUOTES)
    }

    /// Maximum number of quotes sent per prompt.
    #[must_use]
    pub fn max_quotes(&self) -> usize {
        self.max_quotes
    }

    /// Analyzes ranked outcomes for `request`.
    ///
    /// A blank or empty advisor response yields [`NO_ANALYSIS`].
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NoCompatibleQuotes` if no outcome is
    /// compatible, otherwise any advisor failure.
    pub async fn analyze(
        &self,
        request: &ShipmentRequest,
        outcomes: &[QuoteOutcome],
    ) -> ApplicationResult<String> {
        if !outcomes.iter().any(QuoteOutcome::is_compatible) {
            return Err(ApplicationError::NoCompatibleQuotes);
        }

        let prompt = AnalysisPrompt::build(request, outcomes, self.max_quotes)?;

        match self.advisor.analyze(prompt.as_str()).await {
            Ok(text) if text.trim().is_empty() => Ok(NO_ANALYSIS.to_string()),
            Ok(text) => Ok(text),
            Err(AdvisorError::EmptyResponse) => Ok(NO_ANALYSIS.to_string()),
            Err(e) => {
                tracing::warn!(
                    advisor = self.advisor.name(),
                    error = %e,
                    retryable = e.is_retryable(),
                    "quote analysis failed"
                );
                Err(e.into())
            }
        }
    }
}
