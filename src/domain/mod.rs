//! Domain layer containing ranking logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (impacts, weights, errors)
//! - `analysis` - Pure domain services for TOPSIS ranking

pub mod analysis;
pub mod foundation;
