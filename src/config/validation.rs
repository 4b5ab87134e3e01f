//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use url::Url;

use super::Settings;
use crate::utils::errors::{AltaFlowError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_submission_config(&settings.submission)?;
    validate_logging_config(&settings.logging)?;
    Ok(())
}

/// Validate onboarding backend configuration
fn validate_submission_config(config: &super::SubmissionConfig) -> Result<()> {
    if config.api_url.is_empty() {
        return Err(AltaFlowError::Config(
            "Backend API URL is required".to_string(),
        ));
    }

    Url::parse(&config.api_url)?;

    if config.timeout_seconds == 0 {
        return Err(AltaFlowError::Config(
            "Backend timeout must be greater than 0".to_string(),
        ));
    }

    if config.max_attempts == 0 {
        return Err(AltaFlowError::Config(
            "At least one submission attempt must be allowed".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AltaFlowError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AltaFlowError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    if config.file_path.is_empty() {
        return Err(AltaFlowError::Config(
            "Log file path is required".to_string(),
        ));
    }

    Ok(())
}
