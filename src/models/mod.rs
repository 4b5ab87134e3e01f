//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod provisioning;
pub mod registration;
pub mod session;

// Re-export commonly used models
pub use provisioning::ProvisioningRequest;
pub use registration::{
    Attachment, AttachmentKind, AttachmentSet, RegistrationPayload, RegistrationRecord,
};
pub use session::Session;
