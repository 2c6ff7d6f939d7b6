use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::{FlagRecord, FlaggedPatient};

/// Set the flag state for a patient. One row per patient: flagging an
/// already-flagged patient updates the timestamp instead of adding a row.
pub fn set_flag(
    conn: &Connection,
    patient_id: &str,
    flagged: bool,
    at: DateTime<Utc>,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO flags (patient_id, flagged, flagged_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(patient_id) DO UPDATE SET flagged = ?2, flagged_at = ?3",
        params![patient_id, flagged, at],
    )?;
    Ok(())
}

pub fn flag_for(conn: &Connection, patient_id: &str) -> Result<Option<FlagRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT patient_id, flagged, flagged_at FROM flags WHERE patient_id = ?1 LIMIT 1",
    )?;

    let result = stmt.query_row(params![patient_id], |row| {
        Ok(FlagRecord {
            patient_id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
            flagged: row.get(1)?,
            flagged_at: row.get(2)?,
        })
    });

    match result {
        Ok(record) => Ok(Some(record)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn flagged_patients(conn: &Connection) -> Result<Vec<FlaggedPatient>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT f.patient_id, a.email, a.first_name, a.last_name, f.flagged_at
         FROM flags f
         JOIN accounts a ON a.id = f.patient_id
         WHERE f.flagged = 1
         ORDER BY f.flagged_at",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(FlaggedPatient {
            patient_id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
            email: row.get(1)?,
            first_name: row.get(2)?,
            last_name: row.get(3)?,
            flagged_at: row.get(4)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
