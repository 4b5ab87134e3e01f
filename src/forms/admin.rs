//! Admin screen controller
//!
//! Collects the minimal provisioning record. Unlike the registration
//! form, this one is cleared after a successful submission.

use chrono::NaiveDate;

use super::{FieldKind, FieldSpec};
use crate::models::ProvisioningRequest;
use crate::utils::errors::{AltaFlowError, Result};

const EMAIL_SPEC: FieldSpec = FieldSpec {
    key: "email",
    label: "Correo Electrónico",
    section: "Alta de Usuarios",
    kind: FieldKind::Email,
    required: true,
};

const START_DATE_SPEC: FieldSpec = FieldSpec {
    key: "estimatedStartDate",
    label: "Fecha Estimada de Alta",
    section: "Alta de Usuarios",
    kind: FieldKind::Date,
    required: true,
};

/// Controlled inputs of the admin screen
#[derive(Debug, Clone, Default)]
pub struct AdminForm {
    pub email: String,
    pub estimated_start_date: String,
}

impl AdminForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and build the provisioning request
    pub fn to_request(&self) -> Result<ProvisioningRequest> {
        EMAIL_SPEC.validate(&self.email)?;
        START_DATE_SPEC.validate(&self.estimated_start_date)?;

        let estimated_start_date =
            NaiveDate::parse_from_str(self.estimated_start_date.trim(), "%Y-%m-%d").map_err(
                |_| {
                    AltaFlowError::InvalidInput(
                        "estimatedStartDate: invalid date format (YYYY-MM-DD)".to_string(),
                    )
                },
            )?;

        Ok(ProvisioningRequest {
            email: self.email.clone(),
            estimated_start_date,
        })
    }

    /// Reset both fields back to empty strings
    pub fn clear(&mut self) {
        self.email.clear();
        self.estimated_start_date.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_request_built_from_valid_fields() {
        let form = AdminForm {
            email: "nuevo@ideaingenieria.es".to_string(),
            estimated_start_date: "2026-09-14".to_string(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.email, "nuevo@ideaingenieria.es");
        assert_eq!(
            request.estimated_start_date,
            NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()
        );
    }

    #[test]
    fn test_both_fields_required() {
        let mut form = AdminForm::new();
        assert_matches!(form.to_request(), Err(AltaFlowError::MissingField { .. }));

        form.email = "nuevo@ideaingenieria.es".to_string();
        assert_matches!(form.to_request(), Err(AltaFlowError::MissingField { .. }));
    }

    #[test]
    fn test_bad_date_rejected() {
        let form = AdminForm {
            email: "nuevo@ideaingenieria.es".to_string(),
            estimated_start_date: "14/09/2026".to_string(),
        };
        assert_matches!(form.to_request(), Err(AltaFlowError::InvalidInput(_)));
    }

    #[test]
    fn test_clear_resets_fields() {
        let mut form = AdminForm {
            email: "nuevo@ideaingenieria.es".to_string(),
            estimated_start_date: "2026-09-14".to_string(),
        };
        form.clear();
        assert!(form.email.is_empty());
        assert!(form.estimated_start_date.is_empty());
    }
}
