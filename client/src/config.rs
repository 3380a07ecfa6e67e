//! Configuration management for the Crop Advisor client
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with CROP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Prediction service configuration
    pub service: ServiceConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Base URL of the prediction service.
    ///
    /// No request timeout is configured on top of this: an unanswered
    /// request simply never updates session state.
    pub base_url: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("CROP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("service.base_url", ServiceConfig::default().base_url)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (CROP_ prefix)
            .add_source(
                Environment::with_prefix("CROP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            // Loopback default of the prediction service
            base_url: "http://127.0.0.1:5001".to_string(),
        }
    }
}
