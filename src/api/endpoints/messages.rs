//! Messaging endpoints.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageBody, ResultBody};
use crate::models::Message;
use crate::service::message::{self, MessagePayload, MessageQuery};

/// `POST /message/sendMessage` — send a message between two accounts.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(dto): Json<MessagePayload>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(sender_id = %dto.sender_id, recipient_id = %dto.recipient_id, "send message");

    let conn = ctx.conn()?;
    message::send_message(&conn, &dto)?;
    Ok(MessageBody::ok("Message sent."))
}

/// `POST /message/getMessages` — everything an account sent or received.
pub async fn list(
    State(ctx): State<ApiContext>,
    Json(query): Json<MessageQuery>,
) -> Result<Json<ResultBody<Vec<Message>>>, ApiError> {
    let conn = ctx.conn()?;
    Ok(ResultBody::ok(message::messages_for(&conn, &query)?))
}
