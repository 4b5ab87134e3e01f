//! Application shell
//!
//! The top-level controller owning the session store, the three form
//! controllers and the services. Every user-initiated event of the
//! portal goes through a method here; the renderer only reads state and
//! forwards input.

use tracing::info;

use crate::forms::{AdminForm, LoginForm, RegistrationForm};
use crate::models::Session;
use crate::services::{ServiceFactory, SubmissionReceipt, SubmissionStatus};
use crate::state::{Screen, SessionAction, SessionStore};
use crate::utils::errors::Result;

/// Top-level portal state
#[derive(Debug, Clone)]
pub struct PortalShell {
    store: SessionStore,
    services: ServiceFactory,
    pub login_form: LoginForm,
    pub registration_form: RegistrationForm,
    pub admin_form: AdminForm,
    last_submission: SubmissionStatus,
}

impl PortalShell {
    pub fn new(services: ServiceFactory) -> Self {
        Self {
            store: SessionStore::new(),
            services,
            login_form: LoginForm::new(),
            registration_form: RegistrationForm::new(),
            admin_form: AdminForm::new(),
            last_submission: SubmissionStatus::Idle,
        }
    }

    /// Read-only snapshot of the current session
    pub fn session(&self) -> &Session {
        self.store.session()
    }

    /// Active screen projected from the session
    pub fn active_screen(&self) -> Screen {
        self.store.active_screen()
    }

    /// Status of the most recent submission, for the renderer
    pub fn last_submission(&self) -> &SubmissionStatus {
        &self.last_submission
    }

    /// Whether the admin gateway affordance should be rendered
    pub fn admin_gateway_available(&self) -> bool {
        self.services
            .auth_service
            .can_access_admin_panel(&self.session().identity)
    }

    /// Submit the login form; any non-empty pair succeeds
    pub fn login(&mut self) -> Result<()> {
        let identity = self.login_form.submit(&self.services.auth_service)?;
        self.store.dispatch(SessionAction::Login { identity })?;
        // The secret is dropped with the form.
        self.login_form = LoginForm::new();
        Ok(())
    }

    /// Log out from any screen; all form state dies with the session
    pub fn logout(&mut self) -> Result<()> {
        let identity = self.session().identity.clone();
        self.store.dispatch(SessionAction::Logout)?;
        self.registration_form = RegistrationForm::new();
        self.admin_form = AdminForm::new();
        self.last_submission = SubmissionStatus::Idle;
        info!(identity = %identity, "Session closed");
        Ok(())
    }

    /// Open the admin screen; only the administrator identity may pass
    pub fn open_admin_panel(&mut self) -> Result<()> {
        self.services
            .auth_service
            .require_admin(&self.session().identity)?;
        self.store.dispatch(SessionAction::ShowAdminPanel)?;
        Ok(())
    }

    /// Back from the admin screen to registration
    pub fn close_admin_panel(&mut self) -> Result<()> {
        self.store.dispatch(SessionAction::HideAdminPanel)?;
        Ok(())
    }

    /// Submit the registration form
    ///
    /// The form keeps its fields afterwards; only the admin form clears
    /// on submit.
    pub async fn submit_registration(&mut self) -> Result<SubmissionReceipt> {
        let payload = self
            .registration_form
            .build_payload(&self.session().identity)?;

        self.last_submission = SubmissionStatus::Pending;
        match self
            .services
            .submission_service
            .submit_registration(&payload)
            .await
        {
            Ok(receipt) => {
                self.last_submission = SubmissionStatus::Accepted {
                    reference: receipt.reference.clone(),
                };
                Ok(receipt)
            }
            Err(e) => {
                self.last_submission = SubmissionStatus::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }

    /// Submit the admin provisioning form and clear it on success
    pub async fn submit_provisioning(&mut self) -> Result<SubmissionReceipt> {
        let request = self.admin_form.to_request()?;

        self.last_submission = SubmissionStatus::Pending;
        match self
            .services
            .submission_service
            .submit_provisioning(&request)
            .await
        {
            Ok(receipt) => {
                self.admin_form.clear();
                self.last_submission = SubmissionStatus::Accepted {
                    reference: receipt.reference.clone(),
                };
                Ok(receipt)
            }
            Err(e) => {
                self.last_submission = SubmissionStatus::Failed {
                    reason: e.to_string(),
                };
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::ADMIN_EMAIL;
    use assert_matches::assert_matches;
    use crate::utils::errors::AltaFlowError;

    fn shell() -> PortalShell {
        PortalShell::new(ServiceFactory::new(Settings::default()).unwrap())
    }

    fn login_as(shell: &mut PortalShell, identity: &str) {
        shell.login_form.email = identity.to_string();
        shell.login_form.password = "secret".to_string();
        shell.login().unwrap();
    }

    #[test]
    fn test_gateway_only_for_admin_identity() {
        let mut shell = shell();
        login_as(&mut shell, "user@ideaingenieria.es");
        assert!(!shell.admin_gateway_available());
        assert_matches!(
            shell.open_admin_panel(),
            Err(AltaFlowError::PermissionDenied(_))
        );
        assert_eq!(shell.active_screen(), Screen::Registration);
    }

    #[test]
    fn test_admin_round_trip_keeps_registration_fields() {
        let mut shell = shell();
        login_as(&mut shell, "ADMIN@IdeaIngenieria.ES");
        assert!(shell.admin_gateway_available());

        shell
            .registration_form
            .set_field("apellidos", "García")
            .unwrap();

        shell.open_admin_panel().unwrap();
        assert_eq!(shell.active_screen(), Screen::Admin);
        shell.close_admin_panel().unwrap();
        assert_eq!(shell.active_screen(), Screen::Registration);
        assert_eq!(shell.registration_form.field("apellidos"), Some("García"));
    }

    #[test]
    fn test_logout_clears_forms() {
        let mut shell = shell();
        login_as(&mut shell, ADMIN_EMAIL);
        shell
            .registration_form
            .set_field("nombre", "María")
            .unwrap();
        shell.admin_form.email = "nuevo@ideaingenieria.es".to_string();

        shell.logout().unwrap();
        assert_eq!(shell.active_screen(), Screen::Login);
        assert_eq!(shell.registration_form.field("nombre"), Some(""));
        assert!(shell.admin_form.email.is_empty());
        assert_eq!(shell.last_submission(), &SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_provisioning_submit_clears_admin_form() {
        let mut shell = shell();
        login_as(&mut shell, ADMIN_EMAIL);
        shell.open_admin_panel().unwrap();

        shell.admin_form.email = "nuevo@ideaingenieria.es".to_string();
        shell.admin_form.estimated_start_date = "2026-09-14".to_string();
        shell.submit_provisioning().await.unwrap();

        assert!(shell.admin_form.email.is_empty());
        assert!(shell.admin_form.estimated_start_date.is_empty());
        assert_matches!(
            shell.last_submission(),
            SubmissionStatus::Accepted { .. }
        );
    }

    #[tokio::test]
    async fn test_invalid_provisioning_leaves_fields() {
        let mut shell = shell();
        login_as(&mut shell, ADMIN_EMAIL);
        shell.open_admin_panel().unwrap();

        shell.admin_form.email = "nuevo@ideaingenieria.es".to_string();
        assert!(shell.submit_provisioning().await.is_err());
        assert_eq!(shell.admin_form.email, "nuevo@ideaingenieria.es");
    }
}
