//! Criteria weighting.
//!
//! Derives a normalized weight vector from a pairwise judgment matrix and
//! measures the internal consistency of the judgments:
//!
//! - **Derivation**: the additive column-normalize / row-average
//!   approximation of the principal eigenvector (intentionally not an
//!   iterative eigensolve).
//! - **Consistency**: λmax, consistency index, and consistency ratio
//!   against the size-matched random-index baseline. Advisory only — the
//!   engine reports the metric but never refuses to compute weights.

mod consistency;
mod derive;

pub use consistency::{check_consistency, random_index, ConsistencyMetrics, ACCEPTABLE_CR};
pub use derive::derive_weights;
