use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required data file is absent. Read path only; the response names the
    /// attempted location.
    #[error("document not found at {location}")]
    DocumentMissing { location: String },

    /// The data file exists but could not be read or parsed.
    #[error("failed to load {what}")]
    Load {
        what: &'static str,
        #[source]
        source: anyhow::Error,
    },

    /// Contact-form input rejected. The message is the exact user-facing text.
    #[error("{0}")]
    Validation(&'static str),

    /// Any failure while recording a contact submission. The cause is logged
    /// server-side; callers get a fixed, generic message.
    #[error("contact submission failed")]
    Submission(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::DocumentMissing { location } => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Data file not found", "path": location }),
            ),
            AppError::Load { what, source } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": format!("Failed to load {what}"),
                    "details": source.to_string(),
                }),
            ),
            AppError::Validation(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Submission(e) => {
                tracing::error!("contact submission failed: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to send message. Please try again." }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
