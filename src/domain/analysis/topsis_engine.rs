//! TOPSIS Engine - Similarity-to-ideal-solution scoring and ranking.

use serde::{Deserialize, Serialize};

use super::{DecisionMatrix, RankMethod};
use crate::domain::foundation::{Impact, ImpactVector, TopsisError, WeightVector};

/// Score given to an alternative whose distances to both ideal points are zero.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// What to do when `distance_best + distance_worst == 0` for a row.
///
/// This only happens when every criterion column is constant, so the row
/// coincides with both the ideal best and the ideal worst point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZeroDistancePolicy {
    /// Score the row as [`NEUTRAL_SCORE`].
    #[default]
    Neutral,
    /// Fail with `DivideByZeroTie`.
    Reject,
}

/// Tunables for a single engine run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub zero_distance: ZeroDistancePolicy,
    pub rank_method: RankMethod,
}

/// Scores and ranks, aligned index-for-index with the matrix rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisOutcome {
    /// Relative closeness to the ideal solution, in [0, 1].
    pub scores: Vec<f64>,
    /// 1 = best.
    pub ranks: Vec<usize>,
}

impl TopsisOutcome {
    /// Returns the row indices holding the best rank present.
    pub fn best(&self) -> Vec<usize> {
        let Some(top) = self.ranks.iter().min() else {
            return Vec::new();
        };
        self.ranks
            .iter()
            .enumerate()
            .filter(|(_, r)| *r == top)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Every intermediate of a TOPSIS run, for inspection and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopsisAnalysis {
    /// Vector-normalized values multiplied by their criterion weight.
    pub weighted: Vec<Vec<f64>>,
    pub ideal_best: Vec<f64>,
    pub ideal_worst: Vec<f64>,
    pub distance_best: Vec<f64>,
    pub distance_worst: Vec<f64>,
    pub scores: Vec<f64>,
    pub ranks: Vec<usize>,
}

impl TopsisAnalysis {
    /// Drops the intermediates, keeping scores and ranks.
    pub fn into_outcome(self) -> TopsisOutcome {
        TopsisOutcome {
            scores: self.scores,
            ranks: self.ranks,
        }
    }
}

/// TOPSIS computation functions.
pub struct TopsisEngine;

impl TopsisEngine {
    /// Computes scores and ranks with default options.
    pub fn compute(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisOutcome, TopsisError> {
        Self::compute_with(matrix, weights, impacts, EngineOptions::default())
    }

    /// Computes scores and ranks.
    pub fn compute_with(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
        options: EngineOptions,
    ) -> Result<TopsisOutcome, TopsisError> {
        Self::analyze_with(matrix, weights, impacts, options).map(TopsisAnalysis::into_outcome)
    }

    /// Runs the full pipeline with default options, keeping intermediates.
    pub fn analyze(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
    ) -> Result<TopsisAnalysis, TopsisError> {
        Self::analyze_with(matrix, weights, impacts, EngineOptions::default())
    }

    /// Runs the full pipeline, keeping intermediates.
    ///
    /// # Algorithm
    /// 1. Divide each column by its Euclidean norm
    /// 2. Multiply each column by its weight
    /// 3. Ideal best = column max for benefit, min for cost; ideal worst the reverse
    /// 4. Euclidean distance of each row to both ideal points
    /// 5. score = d_worst / (d_best + d_worst)
    /// 6. Rank scores descending
    ///
    /// # Errors
    /// - `ShapeError` if weights or impacts don't match the criterion count
    /// - `DegenerateColumn` if every value in a column is zero
    /// - `DivideByZeroTie` under [`ZeroDistancePolicy::Reject`] when a row
    ///   sits on both ideal points
    pub fn analyze_with(
        matrix: &DecisionMatrix,
        weights: &WeightVector,
        impacts: &ImpactVector,
        options: EngineOptions,
    ) -> Result<TopsisAnalysis, TopsisError> {
        let n_criteria = matrix.criterion_count();
        if weights.len() != n_criteria || impacts.len() != n_criteria {
            return Err(TopsisError::shape(format!(
                "Expected {} weights and impacts, got {} weights and {} impacts.",
                n_criteria,
                weights.len(),
                impacts.len()
            )));
        }

        let weighted = Self::weighted_normalized(matrix, weights.as_slice())?;
        let (ideal_best, ideal_worst) = Self::ideal_points(&weighted, impacts.as_slice());

        let distance_best: Vec<f64> = weighted
            .iter()
            .map(|row| Self::euclidean(row, &ideal_best))
            .collect();
        let distance_worst: Vec<f64> = weighted
            .iter()
            .map(|row| Self::euclidean(row, &ideal_worst))
            .collect();

        let mut scores = Vec::with_capacity(weighted.len());
        for (i, (d_best, d_worst)) in distance_best.iter().zip(&distance_worst).enumerate() {
            let denominator = d_best + d_worst;
            if denominator == 0.0 {
                match options.zero_distance {
                    ZeroDistancePolicy::Neutral => scores.push(NEUTRAL_SCORE),
                    ZeroDistancePolicy::Reject => {
                        return Err(TopsisError::divide_by_zero_tie(matrix.labels()[i].clone()))
                    }
                }
            } else {
                scores.push(d_worst / denominator);
            }
        }

        let ranks = options.rank_method.rank(&scores);

        Ok(TopsisAnalysis {
            weighted,
            ideal_best,
            ideal_worst,
            distance_best,
            distance_worst,
            scores,
            ranks,
        })
    }

    /// Column-wise vector normalization followed by weighting.
    ///
    /// Each column is divided by its largest magnitude before squaring, so
    /// the norm neither overflows nor underflows for any finite column.
    fn weighted_normalized(
        matrix: &DecisionMatrix,
        weights: &[f64],
    ) -> Result<Vec<Vec<f64>>, TopsisError> {
        let rows = matrix.rows();
        let mut scales = Vec::with_capacity(weights.len());

        for (j, criterion) in matrix.criteria().iter().enumerate() {
            let max_abs = rows.iter().map(|r| r[j].abs()).fold(0.0, f64::max);
            if max_abs == 0.0 {
                return Err(TopsisError::degenerate_column(criterion.clone()));
            }
            // In [1, sqrt(n)].
            let unit_norm = rows
                .iter()
                .map(|r| {
                    let v = r[j] / max_abs;
                    v * v
                })
                .sum::<f64>()
                .sqrt();
            scales.push((max_abs, unit_norm));
        }

        Ok(rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&scales)
                    .zip(weights)
                    .map(|((x, (max_abs, unit_norm)), w)| x / max_abs / unit_norm * w)
                    .collect()
            })
            .collect())
    }

    /// Returns (ideal best, ideal worst), one entry per column.
    fn ideal_points(weighted: &[Vec<f64>], impacts: &[Impact]) -> (Vec<f64>, Vec<f64>) {
        impacts
            .iter()
            .enumerate()
            .map(|(j, impact)| {
                let (min, max) = weighted.iter().map(|r| r[j]).fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), v| (lo.min(v), hi.max(v)),
                );
                match impact {
                    Impact::Benefit => (max, min),
                    Impact::Cost => (min, max),
                }
            })
            .unzip()
    }

    fn euclidean(row: &[f64], point: &[f64]) -> f64 {
        row.iter()
            .zip(point)
            .map(|(x, p)| (x - p) * (x - p))
            .sum::<f64>()
            .sqrt()
    }
}
