/// Application routes configuration
use crate::handlers::{
    get_launch_summary, health, list_launches, not_found, refresh_launches, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the application router with all routes
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health))
        // Launch listing and detail overlay
        .route("/", get(list_launches))
        .route("/summary/:id", get(get_launch_summary))
        .route("/refresh", post(refresh_launches))
        .fallback(not_found)
        .with_state(state)
}
