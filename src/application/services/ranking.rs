//! # Outcome Ranking
//!
//! Orders evaluated outcomes for presentation.
//!
//! Compatible outcomes come first, cheapest total first. Incompatible
//! outcomes follow in the order they were produced. The sort is stable, so
//! equal totals keep registry order.

use crate::domain::entities::quote_outcome::QuoteOutcome;
use std::cmp::Ordering;

/// Compares two outcomes by presentation order.
#[must_use]
pub fn compare_outcomes(a: &QuoteOutcome, b: &QuoteOutcome) -> Ordering {
    match (a.breakdown(), b.breakdown()) {
        (Some(a), Some(b)) => a.total.cmp(&b.total),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts outcomes in place by [`compare_outcomes`].
pub fn rank_outcomes(outcomes: &mut [QuoteOutcome]) {
    outcomes.sort_by(compare_outcomes);
}

/// The cheapest compatible outcome of a ranked slice.
#[must_use]
pub fn best_outcome(ranked: &[QuoteOutcome]) -> Option<&QuoteOutcome> {
    ranked.first().filter(|outcome| outcome.is_compatible())
}
