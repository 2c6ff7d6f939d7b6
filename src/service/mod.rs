//! Business rules between the HTTP handlers and the repositories.
//!
//! Each feature gets one module; every operation validates its payload,
//! performs exactly one unit of work, and reports failures through
//! [`ServiceError`] so the API layer can map them to HTTP statuses.

pub mod account;
pub mod credential;
pub mod flagging;
pub mod message;
pub mod status;

use thiserror::Error;

use crate::db::DatabaseError;

/// Payload fields that must be present before a service operation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    AccountType,
    PatientId,
    AccountId,
    SenderId,
    RecipientId,
    MessageBody,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Email => "Email",
            Field::Password => "Password",
            Field::AccountType => "User type",
            Field::PatientId => "Patient id",
            Field::AccountId => "Account id",
            Field::SenderId => "Sender id",
            Field::RecipientId => "Recipient id",
            Field::MessageBody => "Message body",
        }
    }
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{} is missing", .0.label())]
    MissingField(Field),

    #[error("account is not an admin")]
    NotAdmin,

    #[error("account does not exist")]
    NoSuchAccount,

    #[error("account already exists")]
    DuplicateAccount,

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Reject empty or whitespace-only required fields.
fn require(value: &str, field: Field) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::MissingField(field));
    }
    Ok(())
}
