//! AltaFlow Onboarding Portal
//!
//! Library crate for the Idea Ingeniería employee onboarding portal.
//! It provides the session/navigation state machine, the three screen
//! controllers (login, registration, admin provisioning) and the
//! submission boundary towards the onboarding backend.

#![allow(non_snake_case)]

pub mod config;
pub mod forms;
pub mod models;
pub mod services;
pub mod shell;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AltaFlowError, Result};

// Re-export main components for easy access
pub use models::{ProvisioningRequest, RegistrationRecord, Session};
pub use services::{AuthService, SubmissionService, SubmissionStatus};
pub use shell::PortalShell;
pub use state::{Screen, SessionAction, SessionStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
