//! Impact value object: the polarity of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TopsisError;

/// Direction of preference for a criterion.
///
/// `Benefit` criteria prefer higher raw values, `Cost` criteria prefer lower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    #[serde(rename = "+")]
    Benefit,
    #[serde(rename = "-")]
    Cost,
}

impl Impact {
    /// Parses an impact token, accepting exactly `+` or `-`.
    pub fn try_from_token(token: &str) -> Result<Self, TopsisError> {
        match token {
            "+" => Ok(Impact::Benefit),
            "-" => Ok(Impact::Cost),
            _ => Err(TopsisError::value("Impacts must be either '+' or '-'.")),
        }
    }

    /// Returns the token this impact is written as.
    pub fn symbol(&self) -> &'static str {
        match self {
            Impact::Benefit => "+",
            Impact::Cost => "-",
        }
    }

    /// Returns the opposite polarity.
    pub fn flipped(&self) -> Self {
        match self {
            Impact::Benefit => Impact::Cost,
            Impact::Cost => Impact::Benefit,
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
