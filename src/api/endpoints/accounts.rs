//! Account endpoints: registration, login, lookup, deletion, and the
//! role listings the admin dashboard uses.
//!
//! Each handler makes exactly one service call and answers with the
//! `{status, message}` or `{status, result}` envelope.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{ApiContext, MessageBody, ResultBody};
use crate::models::AccountView;
use crate::service::account::{self, AccountFilter, AccountPayload};

/// `POST /account/createAccount` — patient/doctor registration.
pub async fn register_client(
    State(ctx): State<ApiContext>,
    Json(dto): Json<AccountPayload>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(email = %dto.email, "create account");

    let conn = ctx.conn()?;
    account::create_account(&conn, &dto)?;
    Ok(MessageBody::ok("Account created successfully"))
}

/// `POST /admin/createAccount` — admin registration.
pub async fn register_admin(
    State(ctx): State<ApiContext>,
    Json(dto): Json<AccountPayload>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(email = %dto.email, "create admin account");

    let conn = ctx.conn()?;
    account::create_admin(&conn, &dto)?;
    Ok(MessageBody::ok("Account created successfully"))
}

fn login_response(success: bool) -> Result<Json<MessageBody>, ApiError> {
    if success {
        Ok(MessageBody::ok("login successful"))
    } else {
        Err(ApiError::LoginFailed)
    }
}

/// `POST /account/login` — patient/doctor login.
pub async fn login_client(
    State(ctx): State<ApiContext>,
    Json(dto): Json<AccountPayload>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(email = %dto.email, "login to account");

    let conn = ctx.conn()?;
    login_response(account::login(&conn, &dto)?)
}

/// `POST /admin/login` — admin login; non-admin accounts are rejected.
pub async fn login_admin(
    State(ctx): State<ApiContext>,
    Json(dto): Json<AccountPayload>,
) -> Result<Json<MessageBody>, ApiError> {
    tracing::info!(email = %dto.email, "admin login");

    let conn = ctx.conn()?;
    login_response(account::login_admin(&conn, &dto)?)
}

/// `POST /account/getAccount` — look up one account by email.
pub async fn get_account(
    State(ctx): State<ApiContext>,
    Json(filter): Json<AccountFilter>,
) -> Result<Json<ResultBody<AccountView>>, ApiError> {
    let conn = ctx.conn()?;
    let view = account::get_account(&conn, &filter)?;
    Ok(ResultBody::ok(view))
}

/// `POST /account/deleteAccount` — remove an account by email.
pub async fn delete_account(
    State(ctx): State<ApiContext>,
    Json(filter): Json<AccountFilter>,
) -> Result<Json<ResultBody<&'static str>>, ApiError> {
    tracing::info!(email = %filter.email, "delete account");

    let conn = ctx.conn()?;
    account::delete_account(&conn, &filter)?;
    Ok(ResultBody::ok("Account has been deleted"))
}

/// `GET /account/getPatients` — all patient accounts.
pub async fn get_patients(
    State(ctx): State<ApiContext>,
) -> Result<Json<ResultBody<Vec<AccountView>>>, ApiError> {
    let conn = ctx.conn()?;
    Ok(ResultBody::ok(account::patient_accounts(&conn)?))
}

/// `GET /account/getDoctors` — all doctor accounts.
pub async fn get_doctors(
    State(ctx): State<ApiContext>,
) -> Result<Json<ResultBody<Vec<AccountView>>>, ApiError> {
    let conn = ctx.conn()?;
    Ok(ResultBody::ok(account::doctor_accounts(&conn)?))
}
