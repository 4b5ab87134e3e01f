//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub submission: SubmissionConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// Onboarding backend configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SubmissionConfig {
    /// Base URL of the onboarding backend
    pub api_url: String,
    pub timeout_seconds: u64,
    /// Total attempts per submission; client-side rejections are final
    pub max_attempts: u32,
    pub retry_delay_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    /// Offer the admin gateway to the administrator identity
    pub admin_panel: bool,
    /// Log-and-acknowledge submissions locally instead of calling the backend
    pub offline_submission: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&Settings::default())?)
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("ALTAFLOW"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AltaFlowError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            submission: SubmissionConfig {
                api_url: "https://onboarding.ideaingenieria.es/api".to_string(),
                timeout_seconds: 10,
                max_attempts: 2,
                retry_delay_ms: 300,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "./logs".to_string(),
            },
            features: FeaturesConfig {
                admin_panel: true,
                // The original portal never talks to a backend
                offline_submission: true,
            },
        }
    }
}
