//! Result table output configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Largest number of significant decimal digits worth printing for an f64.
pub const MAX_SCORE_PRECISION: usize = 17;

/// Output configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    /// Header of the appended score column
    #[serde(default = "default_score_column")]
    pub score_column: String,

    /// Header of the appended rank column
    #[serde(default = "default_rank_column")]
    pub rank_column: String,

    /// Fixed number of decimals for scores; unset prints the shortest
    /// representation that round-trips
    pub score_precision: Option<usize>,
}

impl OutputConfig {
    /// Format a score for the result table
    pub fn format_score(&self, score: f64) -> String {
        match self.score_precision {
            Some(precision) => format!("{:.*}", precision, score),
            None => score.to_string(),
        }
    }

    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.score_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("output.score_column"));
        }
        if self.rank_column.trim().is_empty() {
            return Err(ValidationError::MissingRequired("output.rank_column"));
        }
        if self.score_column == self.rank_column {
            return Err(ValidationError::DuplicateColumnName);
        }
        if let Some(precision) = self.score_precision {
            if precision == 0 || precision > MAX_SCORE_PRECISION {
                return Err(ValidationError::InvalidScorePrecision);
            }
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            score_column: default_score_column(),
            rank_column: default_rank_column(),
            score_precision: None,
        }
    }
}

fn default_score_column() -> String {
    "Topsis Score".to_string()
}

fn default_rank_column() -> String {
    "Rank".to_string()
}
