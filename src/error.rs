//! Crate error type.
//!
//! Errors cover structural contract violations only (bad indices, duplicate
//! names, mismatched score-vector lengths). Numeric degeneracy is never an
//! error: invalid ratios are coerced to the neutral judgment 1 and
//! near-zero denominators are epsilon-guarded, so every computation returns
//! finite values.

use thiserror::Error;

/// Errors produced when building or evaluating a decision snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// A criteria set must contain at least one criterion.
    #[error("criteria set must contain at least one criterion")]
    EmptyCriteria,

    /// Criterion names are the identity of the index space and must be unique.
    #[error("duplicate criterion name: {0:?}")]
    DuplicateCriterion(String),

    /// A criterion index was outside the current criteria set.
    #[error("criterion index {index} out of range for {count} criteria")]
    CriterionOutOfRange { index: usize, count: usize },

    /// Removing the last criterion would leave an empty index space.
    #[error("cannot remove the last remaining criterion")]
    LastCriterion,

    /// An alternative index was outside the current alternative list.
    #[error("alternative index {index} out of range for {count} alternatives")]
    AlternativeOutOfRange { index: usize, count: usize },

    /// An alternative's score vector does not match the criteria count.
    ///
    /// The caller must re-index alternatives whenever the criteria set
    /// changes; the engine never pads or truncates silently.
    #[error("alternative {name:?} has {actual} scores but {expected} criteria are defined")]
    DimensionMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}
