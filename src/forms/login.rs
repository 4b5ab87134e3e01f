//! Login screen controller

use crate::services::AuthService;
use crate::utils::errors::Result;

/// Controlled inputs of the login screen
///
/// The password is collected because the screen asks for it; it is never
/// checked or transmitted anywhere.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form; returns the identity to store in the session
    pub fn submit(&self, auth: &AuthService) -> Result<String> {
        auth.login(&self.email, &self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_submit_passes_identity_through() {
        let auth = AuthService::new(Settings::default());
        let form = LoginForm {
            email: "User@IdeaIngenieria.es".to_string(),
            password: "anything".to_string(),
        };
        // Identity is returned verbatim, casing included.
        assert_eq!(form.submit(&auth).unwrap(), "User@IdeaIngenieria.es");
    }

    #[test]
    fn test_empty_pair_rejected() {
        let auth = AuthService::new(Settings::default());
        assert!(LoginForm::new().submit(&auth).is_err());
    }
}
