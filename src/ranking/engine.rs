//! Weighted scoring and stable ranking.

use super::types::{Alternative, ScoredAlternative};
use crate::error::DecisionError;

/// Scores one alternative against a weight vector.
///
/// The score vector must have exactly one entry per weight; a length
/// mismatch means the caller failed to re-index alternatives after a
/// criteria-set change and is reported as an error rather than silently
/// padded or truncated.
pub fn score(alternative: &Alternative, weights: &[f64]) -> Result<ScoredAlternative, DecisionError> {
    if alternative.scores.len() != weights.len() {
        return Err(DecisionError::DimensionMismatch {
            name: alternative.name.clone(),
            expected: weights.len(),
            actual: alternative.scores.len(),
        });
    }

    let contributions: Vec<f64> = alternative
        .scores
        .iter()
        .zip(weights)
        .map(|(s, w)| s * w)
        .collect();
    let total = contributions.iter().sum();

    Ok(ScoredAlternative {
        alternative: alternative.clone(),
        contributions,
        total,
    })
}

/// Scores every alternative, preserving input order.
pub fn score_all(
    alternatives: &[Alternative],
    weights: &[f64],
) -> Result<Vec<ScoredAlternative>, DecisionError> {
    alternatives.iter().map(|alt| score(alt, weights)).collect()
}

/// Orders scored alternatives by weighted total, highest first.
///
/// The sort is stable: equal totals keep their original insertion order.
/// Nothing is dropped or deduplicated. `total_cmp` keeps the order
/// deterministic even if a caller-supplied NaN score produced a NaN total
/// (NaN gets a fixed position in the total order instead of an arbitrary
/// one).
pub fn rank(mut scored: Vec<ScoredAlternative>) -> Vec<ScoredAlternative> {
    scored.sort_by(|a, b| b.total.total_cmp(&a.total));
    scored
}
