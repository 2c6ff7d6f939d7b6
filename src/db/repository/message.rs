use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::Message;

pub fn insert_message(conn: &Connection, message: &Message) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO messages (id, sender_id, recipient_id, body, sent_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            message.id.to_string(),
            message.sender_id.to_string(),
            message.recipient_id.to_string(),
            message.body,
            message.sent_at,
        ],
    )?;
    Ok(())
}

/// Every message an account sent or received, oldest first.
pub fn messages_for(conn: &Connection, account_id: &str) -> Result<Vec<Message>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, sender_id, recipient_id, body, sent_at
         FROM messages WHERE sender_id = ?1 OR recipient_id = ?1
         ORDER BY sent_at",
    )?;

    let rows = stmt.query_map(params![account_id], |row| {
        Ok(Message {
            id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
            sender_id: Uuid::parse_str(&row.get::<_, String>(1)?).unwrap_or_default(),
            recipient_id: Uuid::parse_str(&row.get::<_, String>(2)?).unwrap_or_default(),
            body: row.get(3)?,
            sent_at: row.get(4)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
