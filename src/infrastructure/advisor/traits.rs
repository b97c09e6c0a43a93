//! # Quote Advisor Trait
//!
//! Port definition for the text-generation service that comments on a set
//! of quotes.

use crate::infrastructure::advisor::error::AdvisorResult;
use async_trait::async_trait;
use std::fmt;

/// A service that turns an analysis prompt into free-form advice.
///
/// Implementations must be cheap to share across tasks; the application
/// holds them behind an `Arc`.
#[async_trait]
pub trait QuoteAdvisor: Send + Sync + fmt::Debug {
    /// Short adapter name used in logs.
    fn name(&self) -> &str;

    /// Sends the prompt and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns an [`AdvisorError`](crate::infrastructure::advisor::error::AdvisorError)
    /// if no credential is configured or the exchange fails.
    async fn analyze(&self, prompt: &str) -> AdvisorResult<String>;
}
