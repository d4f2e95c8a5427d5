use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RInviteCreate {
    pub caregiver_email: String,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RInviteConfirm {
    pub code: String,
}

#[derive(Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// What the UI polls after issuance/confirmation. One side is populated
/// depending on the caller's role.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkState {
    pub linked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caregiver_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
}

impl LinkState {
    pub fn unlinked() -> Self {
        LinkState {
            linked: false,
            caregiver_email: None,
            caregiver_name: None,
            patient_id: None,
            patient_name: None,
        }
    }
}
