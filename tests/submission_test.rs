//! HTTP submission boundary tests against a mock onboarding backend

mod helpers;

use helpers::*;

use std::io::Write as _;

use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use AltaFlow::models::{Attachment, AttachmentKind};
use AltaFlow::services::SubmissionStatus;
use AltaFlow::utils::errors::{AltaFlowError, SubmissionError};

#[tokio::test]
async fn registration_is_posted_as_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/registrations"))
        .and(body_string_contains("name=\"apellidos\""))
        .and(body_string_contains("name=\"userEmail\""))
        .and(body_string_contains("user@ideaingenieria.es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let mut shell = portal(http_settings(&server.uri()));
    login_as(&mut shell, "user@ideaingenieria.es");
    shell.registration_form = filled_registration_form();

    shell.submit_registration().await.unwrap();
    assert!(matches!(
        shell.last_submission(),
        SubmissionStatus::Accepted { .. }
    ));
}

#[tokio::test]
async fn selected_files_travel_as_named_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/registrations"))
        .and(body_string_contains("name=\"fotoFile\""))
        .and(body_string_contains("filename=\"foto_carnet.jpg\""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not really a jpeg").unwrap();

    let mut shell = portal(http_settings(&server.uri()));
    login_as(&mut shell, "user@ideaingenieria.es");
    shell.registration_form = filled_registration_form();
    shell.registration_form.select_attachment(
        AttachmentKind::Foto,
        Attachment {
            file_name: "foto carnet.jpg".to_string(),
            path: file.path().to_path_buf(),
        },
    );

    shell.submit_registration().await.unwrap();
}

#[tokio::test]
async fn provisioning_is_posted_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({
            "email": "nuevo@ideaingenieria.es",
            "estimatedStartDate": "2026-10-01",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut shell = portal(http_settings(&server.uri()));
    login_as(&mut shell, "admin@ideaingenieria.es");
    shell.open_admin_panel().unwrap();
    shell.admin_form.email = "nuevo@ideaingenieria.es".to_string();
    shell.admin_form.estimated_start_date = "2026-10-01".to_string();

    shell.submit_provisioning().await.unwrap();
    assert!(shell.admin_form.email.is_empty());
}

#[tokio::test]
async fn client_side_rejection_is_final() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(422))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = http_settings(&server.uri());
    settings.submission.max_attempts = 3;

    let mut shell = portal(settings);
    login_as(&mut shell, "admin@ideaingenieria.es");
    shell.open_admin_panel().unwrap();
    shell.admin_form.email = "nuevo@ideaingenieria.es".to_string();
    shell.admin_form.estimated_start_date = "2026-10-01".to_string();

    let err = shell.submit_provisioning().await.unwrap_err();
    assert!(matches!(
        err,
        AltaFlowError::Submission(SubmissionError::Rejected { status: 422 })
    ));
    // A failed provisioning keeps its fields for correction.
    assert_eq!(shell.admin_form.email, "nuevo@ideaingenieria.es");
    assert!(matches!(
        shell.last_submission(),
        SubmissionStatus::Failed { .. }
    ));
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/registrations"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/registrations"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut settings = http_settings(&server.uri());
    settings.submission.max_attempts = 2;

    let mut shell = portal(settings);
    login_as(&mut shell, "user@ideaingenieria.es");
    shell.registration_form = filled_registration_form();

    shell.submit_registration().await.unwrap();
    assert!(matches!(
        shell.last_submission(),
        SubmissionStatus::Accepted { .. }
    ));
}
