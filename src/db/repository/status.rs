use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::StatusEntry;

pub fn insert_status(conn: &Connection, entry: &StatusEntry) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO status_entries (id, patient_id, temperature, weight, symptoms, recorded_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.id.to_string(),
            entry.patient_id.to_string(),
            entry.temperature,
            entry.weight,
            entry.symptoms,
            entry.recorded_at,
        ],
    )?;
    Ok(())
}

/// Status history for a patient, newest first.
pub fn history_for(conn: &Connection, patient_id: &str) -> Result<Vec<StatusEntry>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, temperature, weight, symptoms, recorded_at
         FROM status_entries WHERE patient_id = ?1
         ORDER BY recorded_at DESC",
    )?;

    let rows = stmt.query_map(params![patient_id], |row| {
        Ok(StatusEntry {
            id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
            patient_id: Uuid::parse_str(&row.get::<_, String>(1)?).unwrap_or_default(),
            temperature: row.get(2)?,
            weight: row.get(3)?,
            symptoms: row.get(4)?,
            recorded_at: row.get(5)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
