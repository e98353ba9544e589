// HTTP routes for the mock directory

use crate::core::state::AppState;
use crate::handlers::{fallback, health, users};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub const USERS_PATH: &str = "/api/v1/demo/users";

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))

        // User directory
        .route(USERS_PATH, post(users::create_user_handler))
        .route(
            &format!("{}/", USERS_PATH),
            get(users::list_users_handler).post(users::create_user_handler),
        )
        .route(
            &format!("{}/{{username}}", USERS_PATH),
            get(users::get_user_handler)
                .patch(users::patch_user_handler)
                .delete(users::delete_user_handler),
        )

        // 404 fallback for all unmatched routes
        .fallback(fallback::fallback_handler)

        .with_state(state)
}
