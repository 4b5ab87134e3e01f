//! Screen form controllers
//!
//! One controller per screen, plus the field-spec machinery that drives
//! required-field and format checks for the registration and admin forms.

pub mod admin;
pub mod login;
pub mod registration;

pub use admin::AdminForm;
pub use login::LoginForm;
pub use registration::RegistrationForm;

use chrono::NaiveDate;

use crate::utils::errors::{AltaFlowError, Result};
use crate::utils::helpers::{is_valid_email, is_valid_phone};

/// Input kind expected by a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Date,
    Percent,
}

/// Static description of a single form field
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire key of the field
    pub key: &'static str,
    /// Label shown by the renderer
    pub label: &'static str,
    /// Section header the field appears under
    pub section: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    /// Validate a value against this spec
    ///
    /// Empty optional fields are always accepted; format checks apply
    /// only to non-empty values.
    pub fn validate(&self, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            if self.required {
                return Err(AltaFlowError::MissingField {
                    field: self.key.to_string(),
                });
            }
            return Ok(());
        }

        match self.kind {
            FieldKind::Text => Ok(()),
            FieldKind::Email => {
                if is_valid_email(value) {
                    Ok(())
                } else {
                    Err(AltaFlowError::InvalidInput(format!(
                        "{}: invalid email format",
                        self.key
                    )))
                }
            }
            FieldKind::Phone => {
                if is_valid_phone(value) {
                    Ok(())
                } else {
                    Err(AltaFlowError::InvalidInput(format!(
                        "{}: invalid phone number",
                        self.key
                    )))
                }
            }
            FieldKind::Date => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                Ok(_) => Ok(()),
                Err(_) => Err(AltaFlowError::InvalidInput(format!(
                    "{}: invalid date format (YYYY-MM-DD)",
                    self.key
                ))),
            },
            FieldKind::Percent => match value.trim().parse::<u8>() {
                Ok(p) if p <= 100 => Ok(()),
                _ => Err(AltaFlowError::InvalidInput(format!(
                    "{}: must be a percentage between 0 and 100",
                    self.key
                ))),
            },
        }
    }
}
