use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One self-reported status log entry for a patient.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEntry {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub symptoms: Option<String>,
    pub recorded_at: DateTime<Utc>,
}
