/// Health check API routes
use crate::{error::Result, state::AppState};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub total_users: usize,
}

/// GET /health - Health check endpoint
pub async fn health(State(app_state): State<AppState>) -> Result<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: userbase_core::types::now_timestamp(),
        total_users: app_state.store.len()?,
    }))
}
