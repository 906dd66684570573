//! Descriptive statistics over weighted totals.
//!
//! Computes how decisively the leading alternative wins: mean and standard
//! deviation (sample or population) of the totals, plus a z-score and
//! normal-CDF tail probabilities for each alternative. The normal CDF is
//! built on the Abramowitz–Stegun error-function approximation.

mod erf;
mod summary;

pub use erf::{erf, normal_cdf};
pub use summary::{summarize, StatsSummary, TotalStats};
