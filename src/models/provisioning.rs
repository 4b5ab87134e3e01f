//! Provisioning request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Admin "alta de usuarios" request, created and discarded per submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisioningRequest {
    pub email: String,
    pub estimated_start_date: NaiveDate,
}
