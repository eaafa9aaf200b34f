//! API route configuration.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Creates the router with all routes configured.
///
/// Paths outside `/health` and `/api` are served from the public directory.
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.public_dir);

    let api = Router::new()
        .route("/alpha-tokens", get(handlers::alpha_tokens))
        .fallback(handlers::api_not_found);

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Token listing
        .nest("/api", api)

        // Frontend
        .fallback_service(static_files)

        .with_state(state)
}
