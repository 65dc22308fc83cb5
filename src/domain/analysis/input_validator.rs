//! Input Validator - Parses and checks raw weight/impact arguments.

use crate::domain::foundation::{Impact, ImpactVector, TopsisError, WeightVector};

/// Minimum number of table columns: one label plus two criteria.
pub const MIN_TABLE_COLUMNS: usize = 3;

/// Validation of user-supplied weights, impacts and table dimensions.
pub struct InputValidator;

impl InputValidator {
    /// Parses comma-separated weights and impacts for `num_criteria` columns.
    ///
    /// Checks run in this order, and the first failure is returned:
    /// 1. every weight token is numeric (`ParseError`)
    /// 2. weight and impact counts equal `num_criteria` (`ShapeError`)
    /// 3. every impact token is `+` or `-` (`ValueError`)
    /// 4. every weight is positive (`ValueError`)
    ///
    /// Weight tokens are trimmed of surrounding whitespace. Impact tokens are
    /// taken as written, so `" -"` is rejected.
    pub fn validate(
        weights: &str,
        impacts: &str,
        num_criteria: usize,
    ) -> Result<(WeightVector, ImpactVector), TopsisError> {
        let parsed_weights = Self::parse_weights(weights)?;
        let impact_tokens: Vec<&str> = impacts.split(',').collect();

        if parsed_weights.len() != num_criteria || impact_tokens.len() != num_criteria {
            return Err(TopsisError::shape(
                "The number of weights, impacts, and criteria columns must be the same.",
            ));
        }

        let impacts = impact_tokens
            .into_iter()
            .map(Impact::try_from_token)
            .collect::<Result<Vec<_>, _>>()?;

        let weights = WeightVector::new(parsed_weights)?;

        Ok((weights, ImpactVector::new(impacts)))
    }

    /// Checks that a table has a label column and at least two criteria.
    pub fn validate_table_width(total_columns: usize) -> Result<(), TopsisError> {
        if total_columns < MIN_TABLE_COLUMNS {
            return Err(TopsisError::shape(
                "Input file must have at least three columns.",
            ));
        }
        Ok(())
    }

    fn parse_weights(weights: &str) -> Result<Vec<f64>, TopsisError> {
        weights
            .split(',')
            .map(|token| {
                token
                    .trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|w| w.is_finite())
                    .ok_or_else(|| {
                        TopsisError::parse("Weights must be numeric and separated by commas.")
                    })
            })
            .collect()
    }
}
