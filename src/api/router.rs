//! API router.
//!
//! Binds every method+path pair to its handler, applies the access-log
//! middleware and a permissive CORS layer (the React front end runs on
//! another origin during development).
//!
//! Mutations are POST; reads are GET except where the front end posts a
//! filter body. `/flag/getFlaggedPatients` keeps both verbs for
//! existing clients.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/account/createAccount", post(endpoints::accounts::register_client))
        .route("/account/login", post(endpoints::accounts::login_client))
        .route("/admin/createAccount", post(endpoints::accounts::register_admin))
        .route("/admin/login", post(endpoints::accounts::login_admin))
        .route("/account/getAccount", post(endpoints::accounts::get_account))
        .route("/account/deleteAccount", post(endpoints::accounts::delete_account))
        .route("/account/getPatients", get(endpoints::accounts::get_patients))
        .route("/account/getDoctors", get(endpoints::accounts::get_doctors))
        .route("/flag/flagPatient", post(endpoints::flagging::flag_patient))
        .route("/flag/unflagPatient", post(endpoints::flagging::unflag_patient))
        .route(
            "/flag/getFlaggedPatients",
            get(endpoints::flagging::get_flagged_patients)
                .post(endpoints::flagging::get_flagged_patients),
        )
        .route("/status/recordStatus", post(endpoints::status::record))
        .route("/status/getStatuses", post(endpoints::status::history))
        .route("/message/sendMessage", post(endpoints::messages::send))
        .route("/message/getMessages", post(endpoints::messages::list))
        .with_state(ctx)
        .layer(axum::middleware::from_fn(middleware::log::log_access))
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::open_memory_database;

    fn test_app() -> Router {
        let conn = open_memory_database().unwrap();
        api_router(ApiContext::new(conn))
    }

    async fn send_json(
        app: &Router,
        method: &str,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 65536).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    async fn send_get(app: &Router, path: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 65536).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn registration(email: &str, account_type: &str) -> serde_json::Value {
        serde_json::json!({
            "email": email,
            "password": "pw-123456",
            "type": account_type,
            "firstName": "Victoria",
            "lastName": "Robertson",
        })
    }

    async fn account_id(app: &Router, email: &str) -> String {
        let (_, json) = send_json(
            app,
            "POST",
            "/account/getAccount",
            serde_json::json!({ "email": email }),
        )
        .await;
        json["result"]["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_app();
        let (status, json) = send_get(&app, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "ok");
        assert!(!json["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_route_returns_404() {
        let app = test_app();
        let (status, _) = send_get(&app, "/nonexistent").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn registration_succeeds_with_envelope() {
        let app = test_app();
        let (status, json) = send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], 200);
        assert_eq!(json["message"], "Account created successfully");
    }

    #[tokio::test]
    async fn duplicate_registration_returns_409() {
        let app = test_app();
        let body = registration("pat@example.com", "patient");
        send_json(&app, "POST", "/account/createAccount", body.clone()).await;

        let (status, json) = send_json(&app, "POST", "/account/createAccount", body).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["status"], 409);
        assert_eq!(json["message"], "An account using this email already exists");
    }

    #[tokio::test]
    async fn registration_validates_required_fields() {
        let app = test_app();

        let (status, json) = send_json(
            &app,
            "POST",
            "/account/createAccount",
            serde_json::json!({ "password": "pw", "type": "patient" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Email needs to be assigned a value");

        let (status, json) = send_json(
            &app,
            "POST",
            "/account/createAccount",
            serde_json::json!({ "email": "a@b.com", "type": "patient" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Password needs to be assigned a value");

        let (status, json) = send_json(
            &app,
            "POST",
            "/account/createAccount",
            serde_json::json!({ "email": "a@b.com", "password": "pw" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "User type needs to be assigned a value");
    }

    #[tokio::test]
    async fn login_succeeds_then_fails_on_wrong_password() {
        let app = test_app();
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;

        let (status, json) = send_json(
            &app,
            "POST",
            "/account/login",
            serde_json::json!({ "email": "pat@example.com", "password": "pw-123456" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "login successful");

        let (status, json) = send_json(
            &app,
            "POST",
            "/account/login",
            serde_json::json!({ "email": "pat@example.com", "password": "nope" }),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["status"], 403);
        assert_eq!(json["message"], "login failed, wrong username or password");
    }

    #[tokio::test]
    async fn login_with_unknown_email_returns_404() {
        let app = test_app();
        let (status, json) = send_json(
            &app,
            "POST",
            "/account/login",
            serde_json::json!({ "email": "ghost@example.com", "password": "pw" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            json["message"],
            "There is no existing account associated to this email"
        );
    }

    #[tokio::test]
    async fn admin_login_rejects_patient_account() {
        let app = test_app();
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;

        let (status, json) = send_json(
            &app,
            "POST",
            "/admin/login",
            serde_json::json!({ "email": "pat@example.com", "password": "pw-123456" }),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(
            json["message"],
            "You do not have permission to access this resource"
        );
    }

    #[tokio::test]
    async fn admin_registration_and_login_round_trip() {
        let app = test_app();
        let (status, _) = send_json(
            &app,
            "POST",
            "/admin/createAccount",
            serde_json::json!({ "email": "boss@example.com", "password": "pw-123456" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = send_json(
            &app,
            "POST",
            "/admin/login",
            serde_json::json!({ "email": "boss@example.com", "password": "pw-123456" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "login successful");
    }

    #[tokio::test]
    async fn get_account_returns_view_without_credentials() {
        let app = test_app();
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;

        let (status, json) = send_json(
            &app,
            "POST",
            "/account/getAccount",
            serde_json::json!({ "email": "pat@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], 200);
        assert_eq!(json["result"]["email"], "pat@example.com");
        assert_eq!(json["result"]["type"], "patient");
        assert_eq!(json["result"]["firstName"], "Victoria");
        assert!(json["result"].get("password").is_none());
        assert!(json["result"].get("passwordHash").is_none());
    }

    #[tokio::test]
    async fn get_account_misses_unknown_email() {
        let app = test_app();
        let (status, _) = send_json(
            &app,
            "POST",
            "/account/getAccount",
            serde_json::json!({ "email": "ghost@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_account_confirms_then_404s() {
        let app = test_app();
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;

        let (status, json) = send_json(
            &app,
            "POST",
            "/account/deleteAccount",
            serde_json::json!({ "email": "pat@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], 200);
        assert_eq!(json["result"], "Account has been deleted");

        let (status, _) = send_json(
            &app,
            "POST",
            "/account/deleteAccount",
            serde_json::json!({ "email": "pat@example.com" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn role_listings_return_wrapped_arrays() {
        let app = test_app();
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("doc@example.com", "doctor"),
        )
        .await;

        let (status, json) = send_get(&app, "/account/getPatients").await;
        assert_eq!(status, StatusCode::OK);
        let patients = json["result"].as_array().unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0]["email"], "pat@example.com");

        let (status, json) = send_get(&app, "/account/getDoctors").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn flag_cycle_over_http() {
        let app = test_app();
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;
        let id = account_id(&app, "pat@example.com").await;

        let (status, json) = send_json(
            &app,
            "POST",
            "/flag/flagPatient",
            serde_json::json!({ "patientId": id }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Patient Flagged.");

        // Both verbs serve the listing
        let (status, json) = send_get(&app, "/flag/getFlaggedPatients").await;
        assert_eq!(status, StatusCode::OK);
        let flagged = json["result"].as_array().unwrap();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0]["email"], "pat@example.com");

        let (status, json) = send_json(
            &app,
            "POST",
            "/flag/getFlaggedPatients",
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"].as_array().unwrap().len(), 1);

        let (status, json) = send_json(
            &app,
            "POST",
            "/flag/unflagPatient",
            serde_json::json!({ "patientId": id }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Patient Unflagged.");

        let (_, json) = send_get(&app, "/flag/getFlaggedPatients").await;
        assert!(json["result"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn flagging_unknown_patient_returns_404() {
        let app = test_app();
        let (status, json) = send_json(
            &app,
            "POST",
            "/flag/flagPatient",
            serde_json::json!({ "patientId": "no-such-id" }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["status"], 404);
    }

    #[tokio::test]
    async fn flagging_requires_patient_id() {
        let app = test_app();
        let (status, json) = send_json(
            &app,
            "POST",
            "/flag/flagPatient",
            serde_json::json!({}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Patient id needs to be assigned a value");
    }

    #[tokio::test]
    async fn status_record_and_history_over_http() {
        let app = test_app();
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;
        let id = account_id(&app, "pat@example.com").await;

        let (status, json) = send_json(
            &app,
            "POST",
            "/status/recordStatus",
            serde_json::json!({ "patientId": id, "temperature": 38.2, "symptoms": "cough" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Status recorded.");

        let (status, json) = send_json(
            &app,
            "POST",
            "/status/getStatuses",
            serde_json::json!({ "patientId": id }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let entries = json["result"].as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["symptoms"], "cough");
    }

    #[tokio::test]
    async fn message_send_and_list_over_http() {
        let app = test_app();
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("pat@example.com", "patient"),
        )
        .await;
        send_json(
            &app,
            "POST",
            "/account/createAccount",
            registration("doc@example.com", "doctor"),
        )
        .await;
        let patient = account_id(&app, "pat@example.com").await;
        let doctor = account_id(&app, "doc@example.com").await;

        let (status, json) = send_json(
            &app,
            "POST",
            "/message/sendMessage",
            serde_json::json!({
                "senderId": patient,
                "recipientId": doctor,
                "body": "Feeling better today",
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Message sent.");

        let (status, json) = send_json(
            &app,
            "POST",
            "/message/getMessages",
            serde_json::json!({ "accountId": doctor }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let messages = json["result"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["body"], "Feeling better today");
    }

    #[tokio::test]
    async fn error_envelope_duplicates_http_status() {
        let app = test_app();
        // 400, 404, and 409 all carry their status in the body
        let (status, json) = send_json(
            &app,
            "POST",
            "/account/createAccount",
            serde_json::json!({}),
        )
        .await;
        assert_eq!(json["status"], status.as_u16());

        let (status, json) = send_json(
            &app,
            "POST",
            "/account/getAccount",
            serde_json::json!({ "email": "ghost@example.com" }),
        )
        .await;
        assert_eq!(json["status"], status.as_u16());
    }
}
