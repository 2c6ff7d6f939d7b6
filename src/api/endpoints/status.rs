//! Patient status-log endpoints.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageBody, ResultBody};
use crate::models::StatusEntry;
use crate::service::status::{self, StatusPayload, StatusQuery};

/// `POST /status/recordStatus` — append one status entry.
pub async fn record(
    State(ctx): State<ApiContext>,
    Json(dto): Json<StatusPayload>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(patient_id = %dto.patient_id, "record status");

    let conn = ctx.conn()?;
    status::record_status(&conn, &dto)?;
    Ok(MessageBody::ok("Status recorded."))
}

/// `POST /status/getStatuses` — a patient's status history, newest first.
pub async fn history(
    State(ctx): State<ApiContext>,
    Json(query): Json<StatusQuery>,
) -> Result<Json<ResultBody<Vec<StatusEntry>>>, ApiError> {
    let conn = ctx.conn()?;
    Ok(ResultBody::ok(status::status_history(&conn, &query)?))
}
