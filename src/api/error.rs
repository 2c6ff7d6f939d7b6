//! API error types with structured JSON responses.
//!
//! Every failure, from any endpoint, leaves through this one type so the
//! `{status, message}` envelope and the status-code mapping stay uniform.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::types::MessageBody;
use crate::db::DatabaseError;
use crate::service::{Field, ServiceError};

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("required field missing: {}", .0.label())]
    MissingField(Field),
    #[error("not permitted for this account")]
    Forbidden,
    #[error("wrong username or password")]
    LoginFailed,
    #[error("no account for that email")]
    NotFound,
    #[error("account already registered")]
    Conflict,
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Forbidden | ApiError::LoginFailed => StatusCode::FORBIDDEN,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Conflict => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::MissingField(field) => {
                format!("{} needs to be assigned a value", field.label())
            }
            ApiError::Forbidden => {
                "You do not have permission to access this resource".to_string()
            }
            ApiError::LoginFailed => "login failed, wrong username or password".to_string(),
            ApiError::NotFound => {
                "There is no existing account associated to this email".to_string()
            }
            ApiError::Conflict => "An account using this email already exists".to_string(),
            // Unclassified failures echo their message verbatim.
            ApiError::Internal(detail) => detail.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!(detail, "unclassified API error");
        }

        let status = self.status();
        let body = MessageBody {
            status: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingField(field) => ApiError::MissingField(field),
            ServiceError::NotAdmin => ApiError::Forbidden,
            ServiceError::NoSuchAccount => ApiError::NotFound,
            ServiceError::DuplicateAccount => ApiError::Conflict,
            ServiceError::Database(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        ApiError::Internal(err.to_string())
    }
}
