pub mod contact;
pub mod health;
pub mod portfolio;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/projects", get(portfolio::handle_list_projects))
        .route("/api/skills", get(portfolio::handle_list_skills))
        .route("/api/contact", post(contact::handle_submit_contact))
        .route("/api/health", get(health::handle_health))
        .with_state(state)
}
