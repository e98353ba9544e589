use crate::core::error::ApiError;
use crate::core::state::AppState;
use crate::models::profile::UserProfile;
use crate::validation::profile::{
    validate_create_request, validate_patch_request, validate_username, PatchBody,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Fetch a single profile
///
/// GET /api/v1/demo/users/{username}
pub async fn get_user_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<UserProfile>, ApiError> {
    validate_username(&username)?;

    let profile = state.profiles.get(&username).ok_or(ApiError::UserNotFound)?;
    Ok(Json(profile.as_ref().clone()))
}

/// GET /api/v1/demo/users/
pub async fn list_users_handler(State(state): State<Arc<AppState>>) -> Json<Vec<UserProfile>> {
    Json(state.profiles.list())
}

/// Create a profile from a flat map of field names to values
///
/// POST /api/v1/demo/users
pub async fn create_user_handler(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let new_profile = validate_create_request(&payload).inspect_err(|e| {
        warn!(error = %e, "Rejected create request");
    })?;

    let created = state.profiles.create(new_profile)?;

    info!(user_id = created.id, username = %created.username, "User created");

    Ok((
        StatusCode::OK,
        format!("New user ID {} created successfully.", created.id),
    )
        .into_response())
}

/// Replace a single field
///
/// PATCH /api/v1/demo/users/{username} with {"op":"replace","path":<field>,"value":<text>}
pub async fn patch_user_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
    Json(body): Json<PatchBody>,
) -> Result<Response, ApiError> {
    let patch = validate_patch_request(body).inspect_err(|e| {
        warn!(username = %username, error = %e, "Rejected patch request");
    })?;

    let updated = state
        .profiles
        .replace_field(&username, patch.path, &patch.value)?;

    info!(
        username = %username,
        field = %patch.path,
        new_username = %updated.username,
        "User field updated"
    );

    Ok((
        StatusCode::OK,
        format!("{} updated for user: {}", patch.path, updated.username),
    )
        .into_response())
}

/// DELETE /api/v1/demo/users/{username}
pub async fn delete_user_handler(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<StatusCode, ApiError> {
    validate_username(&username)?;

    let removed = state.profiles.remove(&username).ok_or(ApiError::UserNotFound)?;

    info!(user_id = removed.id, username = %username, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
