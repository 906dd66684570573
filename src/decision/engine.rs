//! Full pipeline evaluation.

use super::snapshot::DecisionSnapshot;
use crate::error::DecisionError;
use crate::ranking::{rank, score_all, ScoredAlternative};
use crate::stats::{summarize, StatsSummary};
use crate::weights::{check_consistency, derive_weights, ConsistencyMetrics};

/// Everything derived from one snapshot.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionOutcome {
    /// Criteria weights, index-aligned with the snapshot's criteria.
    pub weights: Vec<f64>,

    /// Consistency of the pairwise judgments behind those weights.
    pub consistency: ConsistencyMetrics,

    /// Scored alternatives ordered by weighted total, highest first.
    pub ranking: Vec<ScoredAlternative>,

    /// Statistics over the weighted totals, in alternative insertion
    /// order (not ranking order).
    pub stats: StatsSummary,
}

/// Recomputes the full outcome for a snapshot.
///
/// One idempotent pure function over the complete input state: derives
/// weights, checks consistency, scores and ranks the alternatives, and
/// summarizes the totals. Callers invoke it on every input change; there
/// is no caching and no hidden state, so the result always reflects
/// exactly the snapshot passed in.
pub fn evaluate(snapshot: &DecisionSnapshot) -> Result<DecisionOutcome, DecisionError> {
    let weights = derive_weights(snapshot.matrix());
    let consistency = check_consistency(snapshot.matrix(), &weights);

    let scored = score_all(snapshot.alternatives(), &weights)?;
    let totals: Vec<f64> = scored.iter().map(|s| s.total).collect();
    let ranking = rank(scored);
    let stats = summarize(&totals, snapshot.sample_std_dev());

    Ok(DecisionOutcome {
        weights,
        consistency,
        ranking,
        stats,
    })
}
