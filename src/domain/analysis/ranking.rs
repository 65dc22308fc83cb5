//! Descending ranking of scores with explicit tie handling.

use serde::{Deserialize, Serialize};

/// How tied scores are ranked. Higher scores always rank first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMethod {
    /// Ties share the largest rank their group spans: `[0.9, 0.9, 0.5]` -> `[2, 2, 3]`.
    ///
    /// This is the default and intentionally differs from competition-style
    /// ranking, where the same scores give `[1, 1, 3]`. Select
    /// [`RankMethod::Min`] for that.
    #[default]
    Max,
    /// Ties share the smallest rank their group spans: `[0.9, 0.9, 0.5]` -> `[1, 1, 3]`.
    Min,
}

impl RankMethod {
    /// Ranks `scores`, returning one rank per score in input order.
    pub fn rank(&self, scores: &[f64]) -> Vec<usize> {
        match self {
            RankMethod::Max => rank_descending_max(scores),
            RankMethod::Min => rank_descending_min(scores),
        }
    }
}

/// Rank of each score = number of scores greater than or equal to it.
pub fn rank_descending_max(scores: &[f64]) -> Vec<usize> {
    scores
        .iter()
        .map(|s| scores.iter().filter(|other| *other >= s).count())
        .collect()
}

/// Rank of each score = one plus the number of scores strictly greater.
pub fn rank_descending_min(scores: &[f64]) -> Vec<usize> {
    scores
        .iter()
        .map(|s| 1 + scores.iter().filter(|other| *other > s).count())
        .collect()
}
