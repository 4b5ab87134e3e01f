//! Shared test infrastructure
//!
//! Settings builders and a filled registration form used across the
//! integration tests.

#![allow(dead_code)]

pub mod test_data;

pub use test_data::filled_registration_form;

use AltaFlow::config::Settings;
use AltaFlow::services::ServiceFactory;
use AltaFlow::shell::PortalShell;

/// Settings for the offline (log-and-acknowledge) submission mode
pub fn offline_settings() -> Settings {
    let mut settings = Settings::default();
    settings.features.offline_submission = true;
    settings
}

/// Settings pointing the HTTP submission mode at a mock backend
pub fn http_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.features.offline_submission = false;
    settings.submission.api_url = base_url.to_string();
    settings.submission.timeout_seconds = 5;
    settings.submission.max_attempts = 1;
    settings.submission.retry_delay_ms = 10;
    settings
}

/// Build a portal shell from the given settings
pub fn portal(settings: Settings) -> PortalShell {
    PortalShell::new(ServiceFactory::new(settings).expect("failed to build services"))
}

/// Log in with the given identity and an arbitrary password
pub fn login_as(shell: &mut PortalShell, identity: &str) {
    shell.login_form.email = identity.to_string();
    shell.login_form.password = "cualquier-cosa".to_string();
    shell.login().expect("login cannot fail for non-empty credentials");
}
