//! Caller-owned decision state.

use super::criteria::CriteriaSet;
use crate::error::DecisionError;
use crate::pairwise::PairwiseMatrix;
use crate::ranking::Alternative;

/// The complete input state for one decision: criteria, pairwise
/// judgments, alternatives, and the standard-deviation mode.
///
/// The snapshot is owned and mutated by the input layer; the engine only
/// reads it through [`evaluate`](crate::decision::evaluate). Every mutator
/// keeps the structures index-aligned — growing or removing a criterion
/// re-indexes the matrix and every score vector in the same call, so a
/// consistent snapshot can never tear.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionSnapshot {
    criteria: CriteriaSet,
    matrix: PairwiseMatrix,
    alternatives: Vec<Alternative>,
    sample_std_dev: bool,
}

impl DecisionSnapshot {
    /// Creates a snapshot with neutral judgments and no alternatives.
    ///
    /// Sample standard deviation is the default mode.
    pub fn new(criteria: CriteriaSet) -> Self {
        let n = criteria.len();
        Self {
            criteria,
            matrix: PairwiseMatrix::neutral(n),
            alternatives: Vec::new(),
            sample_std_dev: true,
        }
    }

    /// Builds a snapshot from the sparse exchange form: ordered names, a
    /// sparse `(i, j, ratio)` list (unspecified pairs default to 1),
    /// alternatives, and the sample/population toggle.
    ///
    /// Pair indices are validated against the criteria count; ratios go
    /// through the usual sanitization. Alternative score lengths are
    /// validated up front so a malformed input fails here rather than at
    /// evaluation time.
    pub fn from_parts<I, S>(
        names: I,
        ratios: &[(usize, usize, f64)],
        alternatives: Vec<Alternative>,
        sample_std_dev: bool,
    ) -> Result<Self, DecisionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut snapshot = Self::new(CriteriaSet::new(names)?);
        snapshot.sample_std_dev = sample_std_dev;
        for &(i, j, ratio) in ratios {
            snapshot.set_ratio(i, j, ratio)?;
        }
        for alternative in alternatives {
            snapshot.add_alternative(alternative)?;
        }
        Ok(snapshot)
    }

    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    pub fn matrix(&self) -> &PairwiseMatrix {
        &self.matrix
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn sample_std_dev(&self) -> bool {
        self.sample_std_dev
    }

    /// Selects sample (true) or population (false) standard deviation.
    pub fn set_sample_std_dev(&mut self, sample: bool) {
        self.sample_std_dev = sample;
    }

    /// Sets the judgment ratio between two criteria.
    ///
    /// `ratio > 1` means criterion `row` is more important than criterion
    /// `col`; the reciprocal cell is maintained automatically. Setting a
    /// diagonal pair is a no-op.
    pub fn set_ratio(&mut self, row: usize, col: usize, ratio: f64) -> Result<(), DecisionError> {
        let n = self.criteria.len();
        for index in [row, col] {
            if index >= n {
                return Err(DecisionError::CriterionOutOfRange { index, count: n });
            }
        }
        self.matrix.set(row, col, ratio);
        Ok(())
    }

    /// Appends a criterion, returning its index.
    ///
    /// The new criterion compares as neutral against every existing one,
    /// and every alternative gains a zero score for it.
    pub fn add_criterion(&mut self, name: impl Into<String>) -> Result<usize, DecisionError> {
        let index = self.criteria.push(name)?;
        self.matrix = self.matrix.grow();
        for alternative in &mut self.alternatives {
            alternative.scores.push(0.0);
        }
        Ok(index)
    }

    /// Removes the criterion at `index`, returning its name.
    ///
    /// One deterministic re-index transform: pairwise entries referencing
    /// the criterion are dropped, higher pair indices shift down, and every
    /// alternative's score vector splices out the matching position.
    pub fn remove_criterion(&mut self, index: usize) -> Result<String, DecisionError> {
        let name = self.criteria.remove(index)?;
        self.matrix = self.matrix.remove_index(index);
        for alternative in &mut self.alternatives {
            if index < alternative.scores.len() {
                alternative.scores.remove(index);
            }
        }
        Ok(name)
    }

    /// Adds an alternative, validating its score vector length.
    pub fn add_alternative(&mut self, alternative: Alternative) -> Result<(), DecisionError> {
        let expected = self.criteria.len();
        if alternative.scores.len() != expected {
            return Err(DecisionError::DimensionMismatch {
                name: alternative.name,
                expected,
                actual: alternative.scores.len(),
            });
        }
        self.alternatives.push(alternative);
        Ok(())
    }

    /// Removes the alternative at `index`, returning it.
    pub fn remove_alternative(&mut self, index: usize) -> Result<Alternative, DecisionError> {
        if index >= self.alternatives.len() {
            return Err(DecisionError::AlternativeOutOfRange {
                index,
                count: self.alternatives.len(),
            });
        }
        Ok(self.alternatives.remove(index))
    }

    /// Sets one raw score for one alternative.
    pub fn set_score(
        &mut self,
        alternative: usize,
        criterion: usize,
        value: f64,
    ) -> Result<(), DecisionError> {
        if alternative >= self.alternatives.len() {
            return Err(DecisionError::AlternativeOutOfRange {
                index: alternative,
                count: self.alternatives.len(),
            });
        }
        if criterion >= self.criteria.len() {
            return Err(DecisionError::CriterionOutOfRange {
                index: criterion,
                count: self.criteria.len(),
            });
        }
        self.alternatives[alternative].scores[criterion] = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::derive_weights;

    fn worked_snapshot() -> DecisionSnapshot {
        DecisionSnapshot::from_parts(
            ["Cost", "Performance", "Reliability"],
            &[
                (0, 1, 1.0 / 3.0),
                (0, 2, 1.0 / 5.0),
                (1, 2, 1.0 / 2.0),
            ],
            vec![
                Alternative::new("A", vec![8.0, 6.0, 7.0]),
                Alternative::new("B", vec![6.0, 9.0, 8.0]),
                Alternative::new("C", vec![9.0, 5.0, 6.0]),
            ],
            true,
        )
        .expect("valid snapshot")
    }

    #[test]
    fn test_new_snapshot_is_neutral() {
        let snapshot = DecisionSnapshot::new(CriteriaSet::new(["a", "b"]).unwrap());
        assert!((snapshot.matrix().get(0, 1) - 1.0).abs() < 1e-12);
        assert!(snapshot.alternatives().is_empty());
        assert!(snapshot.sample_std_dev());
    }

    #[test]
    fn test_from_parts_defaults_unspecified_pairs_to_one() {
        let snapshot = DecisionSnapshot::from_parts(
            ["a", "b", "c"],
            &[(0, 1, 4.0)],
            Vec::new(),
            false,
        )
        .unwrap();
        assert!((snapshot.matrix().get(0, 1) - 4.0).abs() < 1e-12);
        assert!((snapshot.matrix().get(0, 2) - 1.0).abs() < 1e-12);
        assert!((snapshot.matrix().get(1, 2) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_parts_rejects_bad_pair_index() {
        let err = DecisionSnapshot::from_parts(
            ["a", "b"],
            &[(0, 7, 2.0)],
            Vec::new(),
            true,
        )
        .unwrap_err();
        assert_eq!(err, DecisionError::CriterionOutOfRange { index: 7, count: 2 });
    }

    #[test]
    fn test_add_alternative_validates_length() {
        let mut snapshot = DecisionSnapshot::new(CriteriaSet::new(["a", "b"]).unwrap());
        let err = snapshot
            .add_alternative(Alternative::new("bad", vec![1.0]))
            .unwrap_err();
        assert!(matches!(err, DecisionError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_add_criterion_reindexes_everything() {
        let mut snapshot = worked_snapshot();
        let index = snapshot.add_criterion("Support").unwrap();
        assert_eq!(index, 3);
        assert_eq!(snapshot.matrix().size(), 4);
        // New pairs are neutral; old judgments survive
        assert!((snapshot.matrix().get(0, 3) - 1.0).abs() < 1e-12);
        assert!((snapshot.matrix().get(0, 1) - 1.0 / 3.0).abs() < 1e-12);
        for alternative in snapshot.alternatives() {
            assert_eq!(alternative.scores.len(), 4);
            assert!((alternative.scores[3] - 0.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_remove_criterion_reindexes_everything() {
        let mut snapshot = worked_snapshot();
        assert_eq!(snapshot.remove_criterion(1).unwrap(), "Performance");

        assert_eq!(snapshot.criteria().len(), 2);
        assert_eq!(snapshot.matrix().size(), 2);
        // Surviving pair (0,2) became (0,1)
        assert!((snapshot.matrix().get(0, 1) - 1.0 / 5.0).abs() < 1e-12);
        // Score position 1 spliced out of every alternative
        assert_eq!(snapshot.alternatives()[0].scores, vec![8.0, 7.0]);
        assert_eq!(snapshot.alternatives()[1].scores, vec![6.0, 8.0]);
    }

    #[test]
    fn test_removal_matches_restricted_derivation() {
        // Removing k and deriving must equal deriving over a matrix built
        // from the same non-k pairs from the start.
        let mut snapshot = worked_snapshot();
        snapshot.remove_criterion(1).unwrap();
        let removed_weights = derive_weights(snapshot.matrix());

        let restricted = DecisionSnapshot::from_parts(
            ["Cost", "Reliability"],
            &[(0, 1, 1.0 / 5.0)],
            Vec::new(),
            true,
        )
        .unwrap();
        let restricted_weights = derive_weights(restricted.matrix());

        for (a, b) in removed_weights.iter().zip(&restricted_weights) {
            assert!((a - b).abs() < 1e-12, "{a} != {b}");
        }
    }

    #[test]
    fn test_set_score_bounds() {
        let mut snapshot = worked_snapshot();
        snapshot.set_score(0, 2, 9.5).unwrap();
        assert!((snapshot.alternatives()[0].scores[2] - 9.5).abs() < 1e-12);

        assert!(matches!(
            snapshot.set_score(9, 0, 1.0),
            Err(DecisionError::AlternativeOutOfRange { .. })
        ));
        assert!(matches!(
            snapshot.set_score(0, 9, 1.0),
            Err(DecisionError::CriterionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_remove_alternative() {
        let mut snapshot = worked_snapshot();
        let removed = snapshot.remove_alternative(1).unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(snapshot.alternatives().len(), 2);
        assert!(snapshot.remove_alternative(5).is_err());
    }
}
