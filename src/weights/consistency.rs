//! Consistency metrics for a judgment matrix.
//!
//! Measures how far a matrix deviates from perfectly transitive judgments
//! (where `A[i][k] == A[i][j] * A[j][k]` for all i, j, k). λmax is
//! approximated as the mean of `(A·w)_i / w_i`, which equals n exactly for
//! a perfectly consistent matrix.
//!
//! # References
//!
//! Saaty (1980), *The Analytic Hierarchy Process* — random-index table and
//! the CR ≤ 0.10 acceptability convention.

use crate::pairwise::PairwiseMatrix;

/// Random consistency index for matrices of size 1..=10.
///
/// Sizes above 10 reuse the n=10 value. Fixed system parameter, not
/// user-editable.
const RANDOM_INDEX: [f64; 10] = [0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49];

/// Consistency ratios at or below this threshold are considered acceptable.
pub const ACCEPTABLE_CR: f64 = 0.10;

/// Denominator floor guarding against a zero weight. Numerical safety
/// clamp only, not a semantic default.
const WEIGHT_EPSILON: f64 = 1e-12;

/// Random consistency index for an n×n matrix.
pub fn random_index(n: usize) -> f64 {
    if n == 0 {
        0.0
    } else {
        RANDOM_INDEX[n.min(RANDOM_INDEX.len()) - 1]
    }
}

/// Derived consistency snapshot for one (matrix, weights) pair.
///
/// Advisory only: a high ratio flags the judgments for user review, it
/// never prevents weights from being derived or used.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsistencyMetrics {
    /// Principal eigenvalue approximation. `None` below 3 criteria, where
    /// consistency is trivial and the measure is undefined.
    pub lambda_max: Option<f64>,

    /// Consistency index: `(λmax - n) / (n - 1)`.
    pub consistency_index: f64,

    /// Consistency ratio: CI divided by the size-matched random index.
    pub consistency_ratio: f64,
}

impl ConsistencyMetrics {
    /// True when the consistency ratio is within the conventional 0.10
    /// acceptability threshold.
    pub fn is_acceptable(&self) -> bool {
        self.consistency_ratio <= ACCEPTABLE_CR
    }
}

/// Computes λmax, CI, and CR for a matrix and its derived weights.
///
/// `weights` must be the vector derived from `matrix` (index-aligned,
/// length equal to the matrix size). Matrices below size 3 are trivially
/// consistent: λmax is undefined and CI = CR = 0.
pub fn check_consistency(matrix: &PairwiseMatrix, weights: &[f64]) -> ConsistencyMetrics {
    let n = matrix.size();
    debug_assert_eq!(weights.len(), n);

    if n < 3 {
        return ConsistencyMetrics {
            lambda_max: None,
            consistency_index: 0.0,
            consistency_ratio: 0.0,
        };
    }

    // y = A·w, then λ_i = y_i / w_i with an epsilon-guarded denominator
    let mut lambda_sum = 0.0;
    for i in 0..n {
        let mut y_i = 0.0;
        for (j, w) in weights.iter().enumerate() {
            y_i += matrix.get(i, j) * w;
        }
        lambda_sum += y_i / weights[i].max(WEIGHT_EPSILON);
    }
    let lambda_max = lambda_sum / n as f64;

    let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
    let ri = random_index(n);
    let consistency_ratio = if ri > 0.0 {
        consistency_index / ri
    } else {
        0.0
    };

    ConsistencyMetrics {
        lambda_max: Some(lambda_max),
        consistency_index,
        consistency_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::derive_weights;

    #[test]
    fn test_random_index_table() {
        assert!((random_index(1) - 0.0).abs() < 1e-12);
        assert!((random_index(3) - 0.58).abs() < 1e-12);
        assert!((random_index(10) - 1.49).abs() < 1e-12);
        // Sizes above 10 reuse the n=10 value
        assert!((random_index(15) - 1.49).abs() < 1e-12);
        assert!((random_index(0) - 0.0).abs() < 1e-12);
    }

    #[test]
    fn test_small_matrices_are_trivially_consistent() {
        for n in 1..3 {
            let m = PairwiseMatrix::neutral(n);
            let metrics = check_consistency(&m, &derive_weights(&m));
            assert_eq!(metrics.lambda_max, None);
            assert!((metrics.consistency_index - 0.0).abs() < 1e-12);
            assert!((metrics.consistency_ratio - 0.0).abs() < 1e-12);
            assert!(metrics.is_acceptable());
        }
    }

    #[test]
    fn test_perfectly_consistent_matrix() {
        // A[i][k] == A[i][j] * A[j][k]: ratios 2, 4, 2
        let mut m = PairwiseMatrix::neutral(3);
        m.set(0, 1, 2.0);
        m.set(0, 2, 4.0);
        m.set(1, 2, 2.0);

        let metrics = check_consistency(&m, &derive_weights(&m));
        let lambda = metrics.lambda_max.expect("n >= 3 must define lambda_max");
        assert!((lambda - 3.0).abs() < 1e-6, "lambda_max = {lambda}");
        assert!(metrics.consistency_ratio.abs() < 1e-6);
        assert!(metrics.is_acceptable());
    }

    #[test]
    fn test_worked_scenario_metrics() {
        let mut m = PairwiseMatrix::neutral(3);
        m.set(0, 1, 1.0 / 3.0);
        m.set(0, 2, 1.0 / 5.0);
        m.set(1, 2, 1.0 / 2.0);

        let metrics = check_consistency(&m, &derive_weights(&m));
        let lambda = metrics.lambda_max.expect("lambda_max defined for n=3");
        assert!((lambda - 3.003).abs() < 2e-3, "lambda_max = {lambda}");
        assert!(
            (metrics.consistency_index - 0.002).abs() < 1e-3,
            "CI = {}",
            metrics.consistency_index
        );
        assert!(
            (metrics.consistency_ratio - 0.003).abs() < 2e-3,
            "CR = {}",
            metrics.consistency_ratio
        );
        assert!(metrics.is_acceptable());
    }

    #[test]
    fn test_inconsistent_matrix_flagged_not_rejected() {
        // Circular preference: 0 > 1, 1 > 2, but 2 > 0
        let mut m = PairwiseMatrix::neutral(3);
        m.set(0, 1, 9.0);
        m.set(1, 2, 9.0);
        m.set(0, 2, 1.0 / 9.0);

        let weights = derive_weights(&m);
        let metrics = check_consistency(&m, &weights);
        assert!(!metrics.is_acceptable(), "circular judgments must be flagged");
        // Weights are still produced and still sum to 1
        let sum: f64 = weights.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(metrics.lambda_max.unwrap().is_finite());
    }
}
