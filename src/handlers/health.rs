use crate::core::state::AppState;
use crate::utils::time::current_timestamp;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Profiles currently held by the directory
    pub users: usize,
    pub timestamp: i64,
}

/// GET /health
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        users: state.profiles.len(),
        timestamp: current_timestamp(),
    })
}
