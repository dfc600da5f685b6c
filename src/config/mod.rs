//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DNPM_EXPORT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use dnpm_export::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Exporting to {:?}", config.export.url().is_some());
//! ```

mod error;
mod export;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

use crate::application::ExportSettings;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Export destination, payload policy and HTTP timeout
    #[serde(default)]
    pub export: ExportConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DNPM_EXPORT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DNPM_EXPORT__EXPORT__URL=https://...` -> `export.url = ...`
    /// - `DNPM_EXPORT__EXPORT__TIMEOUT_SECS=10` -> `export.timeout_secs = 10`
    /// - `DNPM_EXPORT__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DNPM_EXPORT")
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
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Export settings for wiring the analyzer.
    pub fn export_settings(&self) -> ExportSettings {
        let settings = ExportSettings::default().with_policy(self.export.payload_policy);
        match self.export.url() {
            Some(url) => settings.with_destination(url),
            None => settings,
        }
    }
}
