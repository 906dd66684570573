//! Analytic Hierarchy Process decision engine.
//!
//! Supports multi-criteria decision making: weigh criteria against each
//! other through pairwise ratio judgments, score candidate alternatives
//! against those criteria, and receive a ranked outcome with a statistical
//! summary of how decisively the leader wins.
//!
//! - **Pairwise**: reciprocal judgment matrix over the discrete 1–9
//!   comparison scale; only the upper triangle is stored, so the
//!   reciprocal invariant is structural.
//! - **Weights**: column-normalize / row-average eigenvector approximation
//!   plus λmax/CI/CR consistency metrics against the random-index table.
//! - **Ranking**: weighted totals (dot product of scores and weights) with
//!   a stable descending sort.
//! - **Stats**: mean, sample/population standard deviation, z-scores, and
//!   normal-CDF tail probabilities via the Abramowitz–Stegun error-function
//!   approximation.
//! - **Decision**: the caller-owned snapshot (criteria + ratios +
//!   alternatives + toggle) and the single pull-based
//!   [`evaluate`](decision::evaluate) entry point.
//!
//! # Architecture
//!
//! Every stage is a pure, synchronous function of its inputs — no I/O, no
//! shared mutable state, no caching. Presentation and input collection
//! live in external layers that own a [`decision::DecisionSnapshot`],
//! mutate it through its re-indexing-safe methods, and re-evaluate on
//! every change. Data flow:
//!
//! matrix → weights → {consistency, scoring} → ranking, and the scored
//! totals → stats.

pub mod decision;
pub mod error;
pub mod pairwise;
pub mod ranking;
pub mod stats;
pub mod weights;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::DecisionError;
