use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;
use crate::storage::Document;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    /// Seconds since process start, fractional.
    pub uptime: f64,
    pub files: DataFiles,
}

#[derive(Debug, Serialize)]
pub struct DataFiles {
    pub portfolio: bool,
    pub contacts: bool,
}

/// GET /api/health
/// Always succeeds; reports uptime and which data files exist right now.
pub async fn handle_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        files: DataFiles {
            portfolio: state.store.exists(Document::Portfolio).await,
            contacts: state.store.exists(Document::Contacts).await,
        },
    })
}
