//! Flagging: admins mark patients for attention.

use chrono::Utc;
use rusqlite::Connection;
use serde::Deserialize;

use crate::db::repository::{account as account_repo, flag as flag_repo};
use crate::models::FlaggedPatient;
use crate::service::{require, Field, ServiceError};

/// Flag/unflag body: `{patientId}`. The id is treated as opaque text;
/// existence is checked against the accounts table.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlagPayload {
    pub patient_id: String,
}

fn set_patient_flag(
    conn: &Connection,
    dto: &FlagPayload,
    flagged: bool,
) -> Result<(), ServiceError> {
    require(&dto.patient_id, Field::PatientId)?;

    let patient_id = dto.patient_id.trim();
    if account_repo::find_by_id(conn, patient_id)?.is_none() {
        return Err(ServiceError::NoSuchAccount);
    }

    flag_repo::set_flag(conn, patient_id, flagged, Utc::now())?;
    Ok(())
}

pub fn flag_patient(conn: &Connection, dto: &FlagPayload) -> Result<(), ServiceError> {
    set_patient_flag(conn, dto, true)
}

pub fn unflag_patient(conn: &Connection, dto: &FlagPayload) -> Result<(), ServiceError> {
    set_patient_flag(conn, dto, false)
}

pub fn flagged_patients(conn: &Connection) -> Result<Vec<FlaggedPatient>, ServiceError> {
    Ok(flag_repo::flagged_patients(conn)?)
}
