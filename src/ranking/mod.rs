//! Alternative scoring and ranking.
//!
//! Combines a derived weight vector with each alternative's raw scores
//! into a weighted total (the dot product of scores and weights), then
//! orders alternatives by total with a stable descending sort.

mod engine;
mod types;

pub use engine::{rank, score, score_all};
pub use types::{Alternative, ScoredAlternative};
