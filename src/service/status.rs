//! Patient status log: self-reported temperature, weight, and symptoms.

use chrono::Utc;
use rusqlite::Connection;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::repository::{account as account_repo, status as status_repo};
use crate::models::StatusEntry;
use crate::service::{require, Field, ServiceError};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusPayload {
    pub patient_id: String,
    pub temperature: Option<f64>,
    pub weight: Option<f64>,
    pub symptoms: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusQuery {
    pub patient_id: String,
}

pub fn record_status(conn: &Connection, dto: &StatusPayload) -> Result<(), ServiceError> {
    require(&dto.patient_id, Field::PatientId)?;

    let patient = account_repo::find_by_id(conn, dto.patient_id.trim())?
        .ok_or(ServiceError::NoSuchAccount)?;

    status_repo::insert_status(
        conn,
        &StatusEntry {
            id: Uuid::new_v4(),
            patient_id: patient.id,
            temperature: dto.temperature,
            weight: dto.weight,
            symptoms: dto.symptoms.clone(),
            recorded_at: Utc::now(),
        },
    )?;
    Ok(())
}

pub fn status_history(
    conn: &Connection,
    query: &StatusQuery,
) -> Result<Vec<StatusEntry>, ServiceError> {
    require(&query.patient_id, Field::PatientId)?;
    Ok(status_repo::history_for(conn, query.patient_id.trim())?)
}
