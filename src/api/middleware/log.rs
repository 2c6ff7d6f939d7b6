//! Access logging middleware.
//!
//! Logs every request with method, path, and response status.

use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    tracing::info!(%method, path, status = response.status().as_u16(), "request handled");
    response
}
