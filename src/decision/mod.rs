//! Snapshot state and the pull-based evaluation pipeline.
//!
//! A [`DecisionSnapshot`] is the single caller-owned state object: ordered
//! criteria, the pairwise judgment matrix, the alternatives, and the
//! sample/population toggle. Its mutators keep every structure
//! index-aligned (adding or removing a criterion re-indexes the matrix and
//! all score vectors atomically).
//!
//! [`evaluate`] is the one engine entry point: a pure, idempotent function
//! from a snapshot to weights, consistency metrics, the full ranking, and
//! the totals statistics. The input layer calls it whenever anything
//! changes; there is no internal caching.

mod criteria;
mod engine;
mod snapshot;

pub use criteria::CriteriaSet;
pub use engine::{evaluate, DecisionOutcome};
pub use snapshot::DecisionSnapshot;
