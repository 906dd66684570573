//! Pairwise comparison judgments.
//!
//! The leaf data structure of the engine: a reciprocal matrix of ratios
//! expressing how much more important one criterion is than another, drawn
//! from the discrete 1–9 comparison scale and its reciprocals.
//!
//! - Only the strict upper triangle is stored; the diagonal and lower
//!   triangle are derived, making the reciprocal invariant structural.
//! - Invalid ratios (non-positive, non-finite) are coerced to the neutral
//!   judgment 1 rather than rejected, so the matrix is always well-formed.
//!
//! # References
//!
//! Saaty (1980), *The Analytic Hierarchy Process*

mod matrix;
mod scale;

pub use matrix::PairwiseMatrix;
pub use scale::{is_scale_ratio, sanitize_ratio, COMPARISON_SCALE};
