//! Submission service implementation
//!
//! The external submission boundary of the portal. Two backends sit
//! behind one service: an offline mode that logs the payload and
//! acknowledges locally (the original portal behavior), and an HTTP mode
//! that posts the two payload shapes to the onboarding backend with a
//! bounded retry on transport failures.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::multipart;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::Settings;
use crate::models::{ProvisioningRequest, RegistrationPayload};
use crate::utils::errors::{AltaFlowError, Result, SubmissionError, SubmissionResult};
use crate::utils::helpers::{generate_uuid, sanitize_filename};
use crate::utils::logging::log_submission;

/// Submission lifecycle as surfaced to the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Idle,
    Pending,
    Accepted { reference: String },
    Failed { reason: String },
}

/// Acknowledgment for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub reference: String,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    fn new() -> Self {
        Self {
            reference: generate_uuid(),
            submitted_at: Utc::now(),
        }
    }
}

/// Submission service towards the onboarding backend
#[derive(Debug, Clone)]
pub struct SubmissionService {
    client: Client,
    settings: Settings,
}

impl SubmissionService {
    /// Create a new SubmissionService instance
    pub fn new(settings: Settings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.submission.timeout_seconds))
            .user_agent("AltaFlow/1.0")
            .build()
            .map_err(AltaFlowError::Http)?;

        Ok(Self { client, settings })
    }

    /// Submit a registration payload
    pub async fn submit_registration(
        &self,
        payload: &RegistrationPayload,
    ) -> Result<SubmissionReceipt> {
        let receipt = SubmissionReceipt::new();

        if self.settings.features.offline_submission {
            self.acknowledge_locally("registration", &receipt, payload.text_fields()?.len());
            return Ok(receipt);
        }

        let url = format!("{}/registrations", self.settings.submission.api_url);
        let result = self
            .with_retry(&receipt.reference, || async {
                let form = self.build_registration_form(payload).await?;
                let response = self
                    .client
                    .post(&url)
                    .multipart(form)
                    .send()
                    .await
                    .map_err(map_transport_error)?;
                check_status(response.status())
            })
            .await;

        self.finish("registration", receipt, result)
    }

    /// Submit an admin provisioning request
    pub async fn submit_provisioning(
        &self,
        request: &ProvisioningRequest,
    ) -> Result<SubmissionReceipt> {
        let receipt = SubmissionReceipt::new();

        if self.settings.features.offline_submission {
            self.acknowledge_locally("provisioning", &receipt, 2);
            return Ok(receipt);
        }

        let url = format!("{}/users", self.settings.submission.api_url);
        let result = self
            .with_retry(&receipt.reference, || async {
                let response = self
                    .client
                    .post(&url)
                    .json(request)
                    .send()
                    .await
                    .map_err(map_transport_error)?;
                check_status(response.status())
            })
            .await;

        self.finish("provisioning", receipt, result)
    }

    /// Offline mode: log the payload and declare success, as the
    /// original portal did with its console log and alert.
    fn acknowledge_locally(&self, kind: &str, receipt: &SubmissionReceipt, field_count: usize) {
        info!(
            kind = kind,
            reference = %receipt.reference,
            field_count = field_count,
            "Offline submission acknowledged locally"
        );
    }

    /// Run one submission attempt, retrying transport and server-side
    /// failures; client-side rejections are final
    async fn with_retry<F, Fut>(&self, reference: &str, attempt: F) -> SubmissionResult<()>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = SubmissionResult<()>>,
    {
        let max_attempts = self.settings.submission.max_attempts;
        let mut last_error = SubmissionError::ServiceUnavailable;

        for attempt_number in 1..=max_attempts {
            match attempt().await {
                Ok(()) => return Ok(()),
                Err(e @ SubmissionError::Rejected { status }) if status < 500 => return Err(e),
                Err(e) => {
                    warn!(
                        reference = reference,
                        attempt = attempt_number,
                        max_attempts = max_attempts,
                        error = %e,
                        "Submission attempt failed"
                    );
                    last_error = e;
                }
            }

            if attempt_number < max_attempts {
                tokio::time::sleep(Duration::from_millis(
                    self.settings.submission.retry_delay_ms,
                ))
                .await;
            }
        }

        Err(last_error)
    }

    fn finish(
        &self,
        kind: &str,
        receipt: SubmissionReceipt,
        result: SubmissionResult<()>,
    ) -> Result<SubmissionReceipt> {
        match result {
            Ok(()) => {
                log_submission(kind, &receipt.reference, true, None);
                Ok(receipt)
            }
            Err(e) => {
                log_submission(kind, &receipt.reference, false, Some(&e.to_string()));
                Err(AltaFlowError::Submission(e))
            }
        }
    }

    /// Assemble the multipart form: every record field as a text part,
    /// the selected attachments as named file parts, plus `userEmail`.
    async fn build_registration_form(
        &self,
        payload: &RegistrationPayload,
    ) -> SubmissionResult<multipart::Form> {
        let fields = payload
            .text_fields()
            .map_err(|e| SubmissionError::RequestFailed(e.to_string()))?;

        let mut form = multipart::Form::new();
        for (key, value) in fields {
            form = form.text(key, value);
        }

        for (kind, attachment) in payload.attachments.iter() {
            debug!(
                part = kind.part_name(),
                file = %attachment.file_name,
                "Attaching file part"
            );
            let bytes = tokio::fs::read(&attachment.path)
                .await
                .map_err(|e| SubmissionError::RequestFailed(e.to_string()))?;
            let part =
                multipart::Part::bytes(bytes).file_name(sanitize_filename(&attachment.file_name));
            form = form.part(kind.part_name(), part);
        }

        form = form.text("userEmail", payload.user_email.clone());
        Ok(form)
    }
}

fn map_transport_error(e: reqwest::Error) -> SubmissionError {
    if e.is_timeout() {
        SubmissionError::Timeout
    } else if e.is_connect() {
        SubmissionError::ServiceUnavailable
    } else {
        SubmissionError::RequestFailed(e.to_string())
    }
}

fn check_status(status: reqwest::StatusCode) -> SubmissionResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(SubmissionError::Rejected {
            status: status.as_u16(),
        })
    }
}
