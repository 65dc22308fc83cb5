//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOPSIS_` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use topsis_rank::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Scores go to column {}", config.output.score_column);
//! ```

mod engine;
mod error;
mod logging;
mod output;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use output::{OutputConfig, MAX_SCORE_PRECISION};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Engine policies (zero-distance handling, tie ranking)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Result table layout
    #[serde(default)]
    pub output: OutputConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `TOPSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__ENGINE__ZERO_DISTANCE=reject` -> `engine.zero_distance = reject`
    /// - `TOPSIS__OUTPUT__SCORE_PRECISION=4` -> `output.score_precision = 4`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.output.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
