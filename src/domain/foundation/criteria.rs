//! Per-criterion weight and impact vectors.

use serde::{Deserialize, Serialize};

use super::{Impact, TopsisError};

/// Multiplicative weights, one per criterion column.
///
/// Weights are used as given; they need not sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Creates a weight vector, rejecting non-finite or non-positive weights.
    pub fn new(weights: Vec<f64>) -> Result<Self, TopsisError> {
        if weights.iter().any(|w| !w.is_finite()) {
            return Err(TopsisError::parse(
                "Weights must be numeric and separated by commas.",
            ));
        }
        if weights.iter().any(|w| *w <= 0.0) {
            return Err(TopsisError::value("Weights must be positive numbers."));
        }
        Ok(Self(weights))
    }

    /// Creates `count` equal weights of 1.0.
    pub fn uniform(count: usize) -> Self {
        Self(vec![1.0; count])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }
}

/// Criterion polarities, aligned index-for-index with the weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactVector(Vec<Impact>);

impl ImpactVector {
    pub fn new(impacts: Vec<Impact>) -> Self {
        Self(impacts)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Impact] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &Impact> {
        self.0.iter()
    }
}

impl From<Vec<Impact>> for ImpactVector {
    fn from(impacts: Vec<Impact>) -> Self {
        Self::new(impacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn weight_vector_accepts_positive_weights() {
        let weights = WeightVector::new(vec![0.25, 1.0, 3.5]).unwrap();
        assert_eq!(weights.len(), 3);
        assert_eq!(weights.as_slice(), &[0.25, 1.0, 3.5]);
    }

    #[test]
    fn weight_vector_rejects_non_finite() {
        let err = WeightVector::new(vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParseError);

        let err = WeightVector::new(vec![f64::INFINITY]).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ParseError);
    }

    #[test]
    fn weight_vector_rejects_non_positive() {
        assert_eq!(
            WeightVector::new(vec![1.0, 0.0]).unwrap_err().code(),
            ErrorCode::ValueError
        );
        assert_eq!(
            WeightVector::new(vec![-2.0]).unwrap_err().code(),
            ErrorCode::ValueError
        );
    }

    #[test]
    fn uniform_weights_are_one() {
        let weights = WeightVector::uniform(4);
        assert!(weights.iter().all(|w| *w == 1.0));
        assert_eq!(weights.len(), 4);
    }

    #[test]
    fn impact_vector_preserves_order() {
        let impacts = ImpactVector::from(vec![Impact::Cost, Impact::Benefit]);
        assert_eq!(impacts.as_slice(), &[Impact::Cost, Impact::Benefit]);
        assert!(!impacts.is_empty());
    }
}
