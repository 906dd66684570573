//! Alternatives and their scored form.

/// A candidate alternative: a name plus one raw score per criterion.
///
/// Scores are index-aligned with the criteria set and interpreted as
/// "higher is better" on whatever scale the user chose.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alternative {
    pub name: String,
    pub scores: Vec<f64>,
}

impl Alternative {
    pub fn new(name: impl Into<String>, scores: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }
}

/// An alternative with its weighted per-criterion contributions and total.
///
/// `contributions[i]` is `scores[i] * weight[i]`; `total` is their sum.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredAlternative {
    pub alternative: Alternative,
    pub contributions: Vec<f64>,
    pub total: f64,
}

impl ScoredAlternative {
    /// Name of the underlying alternative.
    pub fn name(&self) -> &str {
        &self.alternative.name
    }
}
