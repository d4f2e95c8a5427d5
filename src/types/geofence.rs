use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RGeofenceEvent {
    pub event_type: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Set when a caregiver reports on behalf of a linked patient.
    pub patient_id: Option<Uuid>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct RLocationReport {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RSafeZone {
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_m: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeofenceCheckRes {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_inside: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_m: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_changed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_sent: Option<bool>,
}

impl GeofenceCheckRes {
    pub fn no_zone() -> Self {
        GeofenceCheckRes {
            success: true,
            message: Some("No safe zone defined".to_string()),
            is_inside: None,
            distance_m: None,
            state_changed: None,
            email_sent: None,
        }
    }
}
