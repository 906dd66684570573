//! Reciprocal pairwise judgment matrix.

use super::scale::sanitize_ratio;

/// An n×n matrix of pairwise comparison ratios between criteria.
///
/// Only the strict upper triangle (i < j) is stored; the diagonal is fixed
/// at 1 and the lower triangle is derived as the reciprocal of its mirror
/// cell. Reciprocal symmetry (`A[i][j] * A[j][i] == 1`) is therefore
/// structural rather than a convention callers must maintain.
///
/// Orientation: `A[i][j] > 1` means row criterion `i` is more important
/// than column criterion `j`.
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseMatrix {
    n: usize,
    /// Upper-triangle ratios in row-major order: (0,1), (0,2), …, (n-2,n-1).
    upper: Vec<f64>,
}

impl PairwiseMatrix {
    /// Creates an n×n matrix with every judgment set to the neutral ratio 1.
    pub fn neutral(n: usize) -> Self {
        Self {
            n,
            upper: vec![1.0; n * n.saturating_sub(1) / 2],
        }
    }

    /// Number of criteria (matrix dimension).
    pub fn size(&self) -> usize {
        self.n
    }

    /// Position of upper-triangle cell (i, j), i < j, in row-major storage.
    fn offset(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < j && j < self.n);
        i * self.n - i * (i + 1) / 2 + (j - i - 1)
    }

    /// Returns the ratio at (row, col).
    ///
    /// The diagonal is always 1; lower-triangle cells are the reciprocal of
    /// their mirror. Panics if either index is out of range.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "index out of range");
        match row.cmp(&col) {
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Less => self.upper[self.offset(row, col)],
            std::cmp::Ordering::Greater => 1.0 / self.upper[self.offset(col, row)],
        }
    }

    /// Sets the judgment ratio for the (row, col) pair.
    ///
    /// The ratio is sanitized first (non-positive or non-finite values
    /// become 1). Setting (row, col) with row > col stores the reciprocal
    /// in the mirrored upper-triangle cell, preserving the row-dominance
    /// orientation. Setting a diagonal cell is a no-op (it stays 1).
    /// Panics if either index is out of range.
    pub fn set(&mut self, row: usize, col: usize, ratio: f64) {
        assert!(row < self.n && col < self.n, "index out of range");
        let ratio = sanitize_ratio(ratio);
        match row.cmp(&col) {
            std::cmp::Ordering::Equal => {}
            std::cmp::Ordering::Less => {
                let at = self.offset(row, col);
                self.upper[at] = ratio;
            }
            std::cmp::Ordering::Greater => {
                let at = self.offset(col, row);
                self.upper[at] = 1.0 / ratio;
            }
        }
    }

    /// Iterates over the stored upper-triangle entries as `(i, j, ratio)`.
    pub fn upper_triangle(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.n)
            .flat_map(move |i| (i + 1..self.n).map(move |j| (i, j)))
            .map(move |(i, j)| (i, j, self.upper[self.offset(i, j)]))
    }

    /// Returns a copy grown by one criterion.
    ///
    /// The new index compares as neutral (ratio 1) against every existing
    /// criterion.
    pub fn grow(&self) -> PairwiseMatrix {
        let mut next = PairwiseMatrix::neutral(self.n + 1);
        for (i, j, ratio) in self.upper_triangle() {
            let at = next.offset(i, j);
            next.upper[at] = ratio;
        }
        next
    }

    /// Returns a copy with criterion index `k` removed.
    ///
    /// A single deterministic re-index transform: every stored pair
    /// referencing `k` is dropped, and indices above `k` shift down by one.
    /// Panics if `k` is out of range or the matrix has size 0.
    pub fn remove_index(&self, k: usize) -> PairwiseMatrix {
        assert!(k < self.n, "index out of range");
        let mut next = PairwiseMatrix::neutral(self.n - 1);
        for (i, j, ratio) in self.upper_triangle() {
            if i == k || j == k {
                continue;
            }
            let i2 = if i > k { i - 1 } else { i };
            let j2 = if j > k { j - 1 } else { j };
            let at = next.offset(i2, j2);
            next.upper[at] = ratio;
        }
        next
    }
}
