//! Error handling for AltaFlow
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the AltaFlow application
#[derive(Error, Debug)]
pub enum AltaFlowError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Submission backend specific errors
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Backend request failed: {0}")]
    RequestFailed(String),

    #[error("Backend request timed out")]
    Timeout,

    #[error("Backend rejected the submission: HTTP {status}")]
    Rejected { status: u16 },

    #[error("Backend unavailable")]
    ServiceUnavailable,
}

/// Result type alias for AltaFlow operations
pub type Result<T> = std::result::Result<T, AltaFlowError>;

/// Result type alias for submission operations
pub type SubmissionResult<T> = std::result::Result<T, SubmissionError>;

impl AltaFlowError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            AltaFlowError::Config(_) => false,
            AltaFlowError::PermissionDenied(_) => false,
            AltaFlowError::InvalidStateTransition { .. } => false,
            AltaFlowError::MissingField { .. } => true,
            AltaFlowError::InvalidInput(_) => true,
            AltaFlowError::Submission(_) => true,
            AltaFlowError::Http(_) => true,
            AltaFlowError::Serialization(_) => false,
            AltaFlowError::Io(_) => true,
            AltaFlowError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AltaFlowError::Config(_) => ErrorSeverity::Critical,
            AltaFlowError::PermissionDenied(_) => ErrorSeverity::Warning,
            AltaFlowError::MissingField { .. } => ErrorSeverity::Info,
            AltaFlowError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
