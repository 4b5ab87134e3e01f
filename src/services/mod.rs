//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod submission;

// Re-export commonly used services
pub use auth::{AuthService, ADMIN_EMAIL};
pub use submission::{SubmissionReceipt, SubmissionService, SubmissionStatus};

use crate::config::Settings;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub submission_service: SubmissionService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: Settings) -> Result<Self> {
        let auth_service = AuthService::new(settings.clone());
        let submission_service = SubmissionService::new(settings)?;

        Ok(Self {
            auth_service,
            submission_service,
        })
    }
}
