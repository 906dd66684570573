//! Descriptive statistics over weighted totals.

use super::erf::normal_cdf;

/// Denominator floor when the standard deviation is zero (all totals
/// equal). Keeps z-scores finite instead of producing NaN.
const STD_DEV_EPSILON: f64 = 1e-12;

/// Standardized position of one total within the distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TotalStats {
    /// The weighted total this entry describes.
    pub total: f64,

    /// Deviation from the mean in units of standard deviation.
    pub z_score: f64,

    /// Φ(z): probability of observing a total at or below this one.
    pub cumulative: f64,

    /// 1 − Φ(z): upper-tail probability.
    pub upper_tail: f64,
}

/// Summary statistics over a set of weighted totals.
///
/// Entries are index-aligned with the input totals (alternative insertion
/// order), independent of any ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsSummary {
    pub mean: f64,

    /// Sample (n−1 divisor) or population (n divisor) standard deviation,
    /// per the `sample` flag.
    pub std_dev: f64,

    /// Whether the sample variant was used.
    pub sample: bool,

    /// One entry per input total, in input order.
    pub entries: Vec<TotalStats>,
}

/// Computes mean, standard deviation, and per-total z-scores with normal
/// tail probabilities.
///
/// An empty input yields a mean and standard deviation of 0 by convention
/// (there is nothing to summarize) and no entries. In sample mode the
/// variance divisor is `max(1, n - 1)`, so a single observation has
/// variance 0 instead of dividing by zero.
pub fn summarize(totals: &[f64], sample: bool) -> StatsSummary {
    let n = totals.len();
    if n == 0 {
        return StatsSummary {
            mean: 0.0,
            std_dev: 0.0,
            sample,
            entries: Vec::new(),
        };
    }

    let mean = totals.iter().sum::<f64>() / n as f64;

    let divisor = if sample { (n - 1).max(1) } else { n } as f64;
    let variance = totals.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / divisor;
    let std_dev = variance.sqrt();

    let entries = totals
        .iter()
        .map(|&total| {
            let z_score = (total - mean) / std_dev.max(STD_DEV_EPSILON);
            let cumulative = normal_cdf(z_score);
            TotalStats {
                total,
                z_score,
                cumulative,
                upper_tail: 1.0 - cumulative,
            }
        })
        .collect();

    StatsSummary {
        mean,
        std_dev,
        sample,
        entries,
    }
}
