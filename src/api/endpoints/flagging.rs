//! Flagging endpoints for the admin flagged-patients view.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageBody, ResultBody};
use crate::models::FlaggedPatient;
use crate::service::flagging::{self, FlagPayload};

/// `POST /flag/flagPatient` — mark a patient for attention.
pub async fn flag_patient(
    State(ctx): State<ApiContext>,
    Json(dto): Json<FlagPayload>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(patient_id = %dto.patient_id, "flag patient");

    let conn = ctx.conn()?;
    flagging::flag_patient(&conn, &dto)?;
    Ok(MessageBody::ok("Patient Flagged."))
}

/// `POST /flag/unflagPatient` — clear a patient's flag.
pub async fn unflag_patient(
    State(ctx): State<ApiContext>,
    Json(dto): Json<FlagPayload>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(patient_id = %dto.patient_id, "unflag patient");

    let conn = ctx.conn()?;
    flagging::unflag_patient(&conn, &dto)?;
    Ok(MessageBody::ok("Patient Unflagged."))
}

/// `GET|POST /flag/getFlaggedPatients` — currently flagged patients.
/// Both verbs stay bound for existing clients; any POST body is ignored.
pub async fn get_flagged_patients(
    State(ctx): State<ApiContext>,
) -> Result<Json<ResultBody<Vec<FlaggedPatient>>>, ApiError> {
    let conn = ctx.conn()?;
    Ok(ResultBody::ok(flagging::flagged_patients(&conn)?))
}
