//! Shared types for the API layer.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::Json;
use rusqlite::Connection;
use serde::Serialize;

use crate::api::error::ApiError;

/// Shared context for all routes: the mutex-guarded SQLite connection.
/// SQLite serializes writers anyway, so one guarded connection is the
/// whole concurrency story here.
#[derive(Clone)]
pub struct ApiContext {
    db: Arc<Mutex<Connection>>,
}

impl ApiContext {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    pub fn conn(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Internal("database lock poisoned".into()))
    }
}

/// `{status, message}` envelope. The numeric `status` duplicates the
/// HTTP status code; existing clients read it from the body.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub status: u16,
    pub message: String,
}

impl MessageBody {
    pub fn ok(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            status: 200,
            message: message.into(),
        })
    }
}

/// `{status, result}` envelope for read operations.
#[derive(Debug, Serialize)]
pub struct ResultBody<T> {
    pub status: u16,
    pub result: T,
}

impl<T: Serialize> ResultBody<T> {
    pub fn ok(result: T) -> Json<Self> {
        Json(Self { status: 200, result })
    }
}
