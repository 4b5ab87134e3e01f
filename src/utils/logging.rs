//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the AltaFlow application.

use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard must stay alive for the duration of the process,
/// otherwise buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "altaflow.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log authentication events with structured data
pub fn log_auth_event(identity: &str, action: &str, success: bool) {
    if success {
        info!(
            identity = identity,
            action = action,
            "Authentication event: success"
        );
    } else {
        warn!(
            identity = identity,
            action = action,
            "Authentication event: failure"
        );
    }
}

/// Log screen transitions driven by the session state machine
pub fn log_screen_transition(identity: &str, from: &str, to: &str) {
    info!(
        identity = identity,
        from = from,
        to = to,
        "Screen transition"
    );
}

/// Log submission outcomes
pub fn log_submission(kind: &str, reference: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            kind = kind,
            reference = reference,
            details = details,
            "Submission accepted"
        );
    } else {
        warn!(
            kind = kind,
            reference = reference,
            details = details,
            "Submission failed"
        );
    }
}
