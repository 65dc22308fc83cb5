//! Decision Matrix - Alternatives x criteria table of raw scores.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TopsisError;

/// Rectangular table of numeric criterion values, one row per alternative.
///
/// Row labels and criterion names are carried for reporting only; the
/// computation reads `rows` exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    labels: Vec<String>,
    criteria: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrix {
    /// Creates a builder for constructing a decision matrix.
    pub fn builder() -> DecisionMatrixBuilder {
        DecisionMatrixBuilder::new()
    }

    /// Builds a matrix from bare rows, labelling alternatives `A1..An`
    /// and criteria `C1..Cm`.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, TopsisError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let labels = (1..=rows.len()).map(|i| format!("A{}", i)).collect();
        let criteria = (1..=width).map(|j| format!("C{}", j)).collect();

        Self::builder()
            .labels(labels)
            .criteria(criteria)
            .rows(rows)
            .build()
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    /// Gets the raw value for alternative `row` on criterion `column`.
    pub fn value(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Returns a copy of one criterion column.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.rows.iter().map(|r| r[column]).collect()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn criteria(&self) -> &[String] {
        &self.criteria
    }
}

/// Builder for constructing DecisionMatrix instances.
#[derive(Debug, Default)]
pub struct DecisionMatrixBuilder {
    labels: Vec<String>,
    criteria: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DecisionMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the alternative labels.
    pub fn labels(mut self, labels: Vec<impl Into<String>>) -> Self {
        self.labels = labels.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Sets the criterion names.
    pub fn criteria(mut self, criteria: Vec<impl Into<String>>) -> Self {
        self.criteria = criteria.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Adds one alternative with its values.
    pub fn row(mut self, label: impl Into<String>, values: Vec<f64>) -> Self {
        self.labels.push(label.into());
        self.rows.push(values);
        self
    }

    /// Replaces all rows.
    pub fn rows(mut self, rows: Vec<Vec<f64>>) -> Self {
        self.rows = rows;
        self
    }

    /// Validates and builds the decision matrix.
    ///
    /// # Errors
    /// - `ShapeError` if there are no rows, no criteria, a row of the wrong
    ///   width, or a label count that differs from the row count
    /// - `ParseError` if any value is NaN or infinite
    pub fn build(self) -> Result<DecisionMatrix, TopsisError> {
        if self.rows.is_empty() {
            return Err(TopsisError::shape(
                "The decision matrix must contain at least one alternative.",
            ));
        }
        if self.criteria.is_empty() {
            return Err(TopsisError::shape(
                "The decision matrix must contain at least one criterion column.",
            ));
        }
        if self.labels.len() != self.rows.len() {
            return Err(TopsisError::shape(format!(
                "Expected {} alternative labels, got {}.",
                self.rows.len(),
                self.labels.len()
            )));
        }

        let width = self.criteria.len();
        for (label, row) in self.labels.iter().zip(&self.rows) {
            if row.len() != width {
                return Err(TopsisError::shape(format!(
                    "Alternative '{}' has {} values but there are {} criteria.",
                    label,
                    row.len(),
                    width
                )));
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(TopsisError::parse(format!(
                    "Alternative '{}' has a non-finite value for '{}'.",
                    label, self.criteria[j]
                )));
            }
        }

        Ok(DecisionMatrix {
            labels: self.labels,
            criteria: self.criteria,
            rows: self.rows,
        })
    }
}
