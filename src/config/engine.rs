//! Ranking engine configuration

use serde::Deserialize;

use crate::domain::analysis::{EngineOptions, RankMethod, ZeroDistancePolicy};

/// Engine policy configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Handling of rows sitting on both ideal points (`neutral` or `reject`)
    #[serde(default)]
    pub zero_distance: ZeroDistancePolicy,

    /// Tie handling when ranking (`max` or `min`)
    #[serde(default)]
    pub rank_method: RankMethod,
}

impl EngineConfig {
    /// Get the options passed to the engine
    pub fn options(&self) -> EngineOptions {
        EngineOptions {
            zero_distance: self.zero_distance,
            rank_method: self.rank_method,
        }
    }
}
