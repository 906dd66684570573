//! Weight derivation from a pairwise matrix.

use crate::pairwise::PairwiseMatrix;

/// Derives a criteria-weight vector from a pairwise judgment matrix.
///
/// Uses the standard additive approximation (column-normalize, then
/// row-average) rather than an exact principal-eigenvector solve:
///
/// 1. Sum each column.
/// 2. Divide each entry by its column sum (a zero column contributes 0 —
///    a degenerate guard that cannot trigger while the positivity
///    invariant holds).
/// 3. Average each row of the normalized matrix.
///
/// The result is index-aligned with the criteria and sums to 1 (up to
/// floating-point rounding) whenever every column sum is positive. A 1×1
/// matrix yields `[1.0]`.
pub fn derive_weights(matrix: &PairwiseMatrix) -> Vec<f64> {
    let n = matrix.size();
    let mut column_sums = vec![0.0; n];
    for j in 0..n {
        for i in 0..n {
            column_sums[j] += matrix.get(i, j);
        }
    }

    let mut weights = vec![0.0; n];
    for (i, weight) in weights.iter_mut().enumerate() {
        let mut row_sum = 0.0;
        for j in 0..n {
            if column_sums[j] > 0.0 {
                row_sum += matrix.get(i, j) / column_sums[j];
            }
        }
        *weight = row_sum / n as f64;
    }
    weights
}
