//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the ranking domain.

mod criteria;
mod errors;
mod impact;

pub use criteria::{ImpactVector, WeightVector};
pub use errors::{ErrorCode, TopsisError};
pub use impact::Impact;
