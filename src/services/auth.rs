//! Authentication service implementation
//!
//! Decides who may reach the admin screen. Login itself is a deliberate
//! no-op boundary: any non-empty identity/secret pair is accepted and the
//! secret is never checked or transmitted.

use tracing::debug;

use crate::config::Settings;
use crate::utils::errors::{AltaFlowError, Result};
use crate::utils::logging::log_auth_event;

/// The single administrator address; identity equality against this
/// constant is the sole authorization rule for the admin screen.
pub const ADMIN_EMAIL: &str = "admin@ideaingenieria.es";

/// Authorization service for the portal
#[derive(Debug, Clone)]
pub struct AuthService {
    settings: Settings,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Accept a login attempt
    ///
    /// Both values must be non-empty; beyond that the secret is read and
    /// discarded. Returns the identity to store in the session.
    pub fn login(&self, identity: &str, secret: &str) -> Result<String> {
        if identity.trim().is_empty() {
            log_auth_event(identity, "login", false);
            return Err(AltaFlowError::MissingField {
                field: "email".to_string(),
            });
        }
        if secret.is_empty() {
            log_auth_event(identity, "login", false);
            return Err(AltaFlowError::MissingField {
                field: "password".to_string(),
            });
        }

        log_auth_event(identity, "login", true);
        Ok(identity.to_string())
    }

    /// Check if an identity is the administrator
    pub fn is_admin(&self, identity: &str) -> bool {
        identity.to_lowercase() == ADMIN_EMAIL
    }

    /// Check if the admin gateway should be offered to this identity
    pub fn can_access_admin_panel(&self, identity: &str) -> bool {
        let allowed = self.settings.features.admin_panel && self.is_admin(identity);
        debug!(identity = identity, allowed = allowed, "Admin panel access check");
        allowed
    }

    /// Require admin access or return an error
    pub fn require_admin(&self, identity: &str) -> Result<()> {
        if !self.can_access_admin_panel(identity) {
            log_auth_event(identity, "open_admin_panel", false);
            return Err(AltaFlowError::PermissionDenied(format!(
                "{} is not an administrator",
                identity
            )));
        }

        log_auth_event(identity, "open_admin_panel", true);
        Ok(())
    }
}
