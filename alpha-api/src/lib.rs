//! # Alpha API Server
//!
//! HTTP proxy in front of the Binance Alpha token listing, with a short
//! in-memory cache and a fixed fallback dataset.
//!
//! ## Endpoints
//!
//! - `GET /api/alpha-tokens` - Token listing (always 200, see `fallback` flag)
//! - `GET /health` - Liveness and uptime
//! - `GET /` - Static frontend from the public directory
//!
//! ## Example
//!
//! ```rust,ignore
//! use alpha_api::{ApiServer, ApiConfig};
//!
//! let server = ApiServer::new(ApiConfig::from_env())?;
//! server.run(([0, 0, 0, 0], 3000)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod dto;
mod error;
mod handlers;
mod routes;
mod service;
mod state;

#[cfg(test)]
mod testing;

pub use dto::HealthResponse;
pub use error::ApiError;
pub use routes::create_router;
pub use service::{ListingOrigin, TokenListService, TokenListing};
pub use state::{ApiConfig, AppState};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use alpha_core::error::Result;

/// API server for the token listing proxy.
pub struct ApiServer {
    state: Arc<AppState>,
}

impl ApiServer {
    /// Creates a new API server with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Ok(Self::with_state(Arc::new(AppState::new(config)?)))
    }

    /// Creates a server around existing state.
    pub fn with_state(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Creates the router with all routes configured.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        create_router(self.state.clone())
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Runs the server on the given address.
    pub async fn run(self, addr: impl Into<SocketAddr>) -> std::io::Result<()> {
        let addr = addr.into();
        let listener = tokio::net::TcpListener::bind(addr).await?;

        info!("Alpha Monitor server listening on {}", addr);
        info!("Health check: http://{}/health", addr);
        info!("API endpoint: http://{}/api/alpha-tokens", addr);

        axum::serve(listener, self.router()).await
    }
}
