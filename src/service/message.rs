//! Account-to-account messaging.

use chrono::Utc;
use rusqlite::Connection;
use serde::Deserialize;
use uuid::Uuid;

use crate::db::repository::{account as account_repo, message as message_repo};
use crate::models::Message;
use crate::service::{require, Field, ServiceError};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessagePayload {
    pub sender_id: String,
    pub recipient_id: String,
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageQuery {
    pub account_id: String,
}

pub fn send_message(conn: &Connection, dto: &MessagePayload) -> Result<(), ServiceError> {
    require(&dto.sender_id, Field::SenderId)?;
    require(&dto.recipient_id, Field::RecipientId)?;
    require(&dto.body, Field::MessageBody)?;

    let sender = account_repo::find_by_id(conn, dto.sender_id.trim())?
        .ok_or(ServiceError::NoSuchAccount)?;
    let recipient = account_repo::find_by_id(conn, dto.recipient_id.trim())?
        .ok_or(ServiceError::NoSuchAccount)?;

    message_repo::insert_message(
        conn,
        &Message {
            id: Uuid::new_v4(),
            sender_id: sender.id,
            recipient_id: recipient.id,
            body: dto.body.clone(),
            sent_at: Utc::now(),
        },
    )?;
    Ok(())
}

pub fn messages_for(conn: &Connection, query: &MessageQuery) -> Result<Vec<Message>, ServiceError> {
    require(&query.account_id, Field::AccountId)?;
    Ok(message_repo::messages_for(conn, query.account_id.trim())?)
}
