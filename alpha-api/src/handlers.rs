//! API route handlers.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::debug;

use crate::dto::HealthResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Reports whether a listing came from the cache, upstream, or fallback.
pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// GET /api/alpha-tokens
///
/// Always 200. Upstream failures are reported in the body (`fallback: true`).
pub async fn alpha_tokens(State(state): State<Arc<AppState>>) -> Response {
    let listing = state.tokens.get_token_list().await;

    debug!(
        origin = listing.origin.as_header(),
        tokens = listing.response.len(),
        "Serving Alpha tokens"
    );

    let mut response = Json(listing.response.as_ref()).into_response();
    response
        .headers_mut()
        .insert(X_CACHE, HeaderValue::from_static(listing.origin.as_header()));
    response
}

/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

/// Fallback for unknown `/api/*` paths.
pub async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::no_route(&uri)
}
