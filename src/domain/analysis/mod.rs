//! Analysis Module - Pure domain services for multi-criteria ranking.
//!
//! # Components
//!
//! - `DecisionMatrix` - Alternatives x criteria table of raw values
//! - `InputValidator` - Parses weights/impacts and checks dimensions
//! - `TopsisEngine` - Normalization, weighting, ideal points, distances, scores
//! - `RankMethod` - Descending ranking with configurable tie handling
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. They take domain
//! objects as input and return computed results or a `TopsisError`.

mod decision_matrix;
mod input_validator;
mod ranking;
mod topsis_engine;

pub use decision_matrix::{DecisionMatrix, DecisionMatrixBuilder};
pub use input_validator::{InputValidator, MIN_TABLE_COLUMNS};
pub use ranking::{rank_descending_max, rank_descending_min, RankMethod};
pub use topsis_engine::{
    EngineOptions, TopsisAnalysis, TopsisEngine, TopsisOutcome, ZeroDistancePolicy,
    NEUTRAL_SCORE,
};
