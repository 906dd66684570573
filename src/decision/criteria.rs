//! Ordered criteria names.

use crate::error::DecisionError;

/// An ordered set of unique criterion names.
///
/// The order defines the index space used by the pairwise matrix, the
/// weight vector, and every alternative's score vector. The engine only
/// reads a criteria snapshot; mutation happens through the owning
/// [`DecisionSnapshot`](crate::decision::DecisionSnapshot), which
/// re-indexes all dependent structures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaSet {
    names: Vec<String>,
}

impl CriteriaSet {
    /// Builds a criteria set from ordered names.
    ///
    /// Fails on an empty list or a duplicate name.
    pub fn new<I, S>(names: I) -> Result<Self, DecisionError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self { names: Vec::new() };
        for name in names {
            set.push(name)?;
        }
        if set.names.is_empty() {
            return Err(DecisionError::EmptyCriteria);
        }
        Ok(set)
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name at `index`, if in range.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Index of `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Appends a criterion, returning its index.
    pub fn push(&mut self, name: impl Into<String>) -> Result<usize, DecisionError> {
        let name = name.into();
        if self.names.iter().any(|n| *n == name) {
            return Err(DecisionError::DuplicateCriterion(name));
        }
        self.names.push(name);
        Ok(self.names.len() - 1)
    }

    /// Removes the criterion at `index`, returning its name.
    ///
    /// A criteria set never shrinks below one entry.
    pub fn remove(&mut self, index: usize) -> Result<String, DecisionError> {
        if index >= self.names.len() {
            return Err(DecisionError::CriterionOutOfRange {
                index,
                count: self.names.len(),
            });
        }
        if self.names.len() == 1 {
            return Err(DecisionError::LastCriterion);
        }
        Ok(self.names.remove(index))
    }
}
