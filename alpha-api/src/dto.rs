//! DTOs for API responses.
//!
//! The token listing itself is served as [`alpha_core::TokenListResponse`].

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"`
    pub status: String,
    /// Current time, RFC 3339 with milliseconds
    pub timestamp: String,
    /// Seconds since the server state was created
    pub uptime: f64,
}
