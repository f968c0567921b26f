use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::HeaderMap,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::contact::{self, validation};
use crate::errors::AppError;
use crate::state::AppState;

const THANK_YOU: &str = "Thank you! Your message has been sent successfully.";

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    // Missing keys become empty strings so they hit the required-fields
    // check instead of a body-deserialization rejection.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/contact
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
    Json(req): Json<ContactRequest>,
) -> Result<Json<ContactAck>, AppError> {
    let valid = validation::validate(&req.name, &req.email, &req.message)?;
    let ip = caller_address(connect_info.as_ref(), &headers);

    let stored = contact::record_submission(&state, valid, ip).await?;
    info!("new contact from {} <{}>", stored.name, stored.email);

    Ok(Json(ContactAck {
        success: true,
        message: THANK_YOU,
    }))
}

/// Best-effort origin address: the direct connection when known, otherwise
/// the `x-forwarded-for` header verbatim, otherwise absent.
fn caller_address(
    connect_info: Option<&ConnectInfo<SocketAddr>>,
    headers: &HeaderMap,
) -> Option<String> {
    if let Some(ConnectInfo(addr)) = connect_info {
        return Some(addr.ip().to_string());
    }
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::models::contact::ContactSubmission;
    use crate::routes::build_router;
    use crate::state::AppState;
    use crate::storage::{Document, DocumentStore, MemoryStore};

    fn submit(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn stored_log(store: &MemoryStore) -> Vec<ContactSubmission> {
        serde_json::from_str(&store.contents(Document::Contacts).unwrap()).unwrap()
    }

    #[tokio::test]
    async fn accepted_submission_is_stored_normalized() {
        let store = Arc::new(MemoryStore::empty());
        let app = build_router(AppState::new(store.clone()));

        let response = app
            .oneshot(submit(
                json!({ "name": "Ada", "email": "ADA@Example.com ", "message": " hi " }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["message"],
            "Thank you! Your message has been sent successfully."
        );

        let log = stored_log(&store);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].name, "Ada");
        assert_eq!(log[0].email, "ada@example.com");
        assert_eq!(log[0].message, "hi");
        assert!(log[0].id > 0);
        assert_eq!(log[0].ip, None);
    }

    #[tokio::test]
    async fn log_file_is_created_pretty_printed() {
        let store = Arc::new(MemoryStore::empty());
        let app = build_router(AppState::new(store.clone()));
        assert!(!store.exists(Document::Contacts).await);

        app.oneshot(submit(
            json!({ "name": "Ada", "email": "ada@example.com", "message": "hi" }),
        ))
        .await
        .unwrap();

        let raw = store.contents(Document::Contacts).unwrap();
        // serde_json pretty output: 2-space indent, matching the files the
        // previous deployment wrote.
        assert!(raw.starts_with("[\n  {"));
    }

    #[tokio::test]
    async fn missing_field_is_rejected_without_a_write() {
        let store = Arc::new(MemoryStore::empty());
        let app = build_router(AppState::new(store.clone()));

        let response = app
            .oneshot(submit(json!({ "name": "Ada", "email": "ada@example.com" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "All fields are required");
        assert!(store.contents(Document::Contacts).is_none());
    }

    #[tokio::test]
    async fn blank_field_is_rejected_without_a_write() {
        let store = Arc::new(MemoryStore::empty());
        let app = build_router(AppState::new(store.clone()));

        let response = app
            .oneshot(submit(
                json!({ "name": "  ", "email": "ada@example.com", "message": "hi" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "All fields are required");
        assert!(store.contents(Document::Contacts).is_none());
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_without_a_write() {
        let store = Arc::new(MemoryStore::empty());
        let app = build_router(AppState::new(store.clone()));

        let response = app
            .oneshot(submit(
                json!({ "name": "Ada", "email": "ada@example", "message": "hi" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid email format");
        assert!(store.contents(Document::Contacts).is_none());
    }

    #[tokio::test]
    async fn submissions_prepend_newest_first() {
        let store = Arc::new(MemoryStore::empty());
        let app = build_router(AppState::new(store.clone()));

        for (name, email) in [("Ada", "ada@example.com"), ("Grace", "grace@example.com")] {
            let response = app
                .clone()
                .oneshot(submit(json!({ "name": name, "email": email, "message": "hi" })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let log = stored_log(&store);
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].name, "Grace");
        assert_eq!(log[1].name, "Ada");
    }

    #[tokio::test]
    async fn storage_failure_reports_the_generic_message() {
        let app = build_router(AppState::new(Arc::new(MemoryStore::failing_saves())));

        let response = app
            .oneshot(submit(
                json!({ "name": "Ada", "email": "ada@example.com", "message": "hi" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            "Failed to send message. Please try again."
        );
    }

    #[tokio::test]
    async fn forwarded_for_header_is_recorded_when_no_direct_address() {
        let store = Arc::new(MemoryStore::empty());
        let app = build_router(AppState::new(store.clone()));

        let request = Request::builder()
            .method("POST")
            .uri("/api/contact")
            .header(header::CONTENT_TYPE, "application/json")
            .header("x-forwarded-for", "203.0.113.9")
            .body(Body::from(
                json!({ "name": "Ada", "email": "ada@example.com", "message": "hi" }).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(stored_log(&store)[0].ip.as_deref(), Some("203.0.113.9"));
    }
}
