use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::models::portfolio::{PortfolioDocument, Project, Skill};
use crate::state::AppState;
use crate::storage::Document;

/// GET /api/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, AppError> {
    let doc = load_portfolio(&state, "projects").await?;
    Ok(Json(doc.projects))
}

/// GET /api/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<Skill>>, AppError> {
    let doc = load_portfolio(&state, "skills").await?;
    Ok(Json(doc.skills))
}

/// Loads the portfolio document fresh from storage. `what` names the
/// requested slice in a load-failure response.
async fn load_portfolio(
    state: &AppState,
    what: &'static str,
) -> Result<PortfolioDocument, AppError> {
    let raw = state
        .store
        .load(Document::Portfolio)
        .await
        .map_err(|source| AppError::Load { what, source })?
        .ok_or_else(|| AppError::DocumentMissing {
            location: state.store.location(Document::Portfolio),
        })?;

    serde_json::from_str(&raw).map_err(|e| AppError::Load {
        what,
        source: anyhow::Error::new(e).context("portfolio document is not valid JSON"),
    })
}
