use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Flag toggle state for a single patient.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRecord {
    pub patient_id: Uuid,
    pub flagged: bool,
    pub flagged_at: DateTime<Utc>,
}

/// Listing row for the admin flagged-patients view: flag state joined
/// with the owning account.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlaggedPatient {
    pub patient_id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub flagged_at: DateTime<Utc>,
}
