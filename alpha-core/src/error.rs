//! Error types for the Alpha proxy.
//!
//! Upstream failures are never shown to HTTP callers; the service maps every
//! upstream variant to the fallback listing. These variants exist so that the
//! failure is explicit internally and can be logged and tested.

use thiserror::Error;

/// Result type alias using `AlphaError`.
pub type Result<T> = std::result::Result<T, AlphaError>;

/// Main error type for all Alpha operations.
#[derive(Debug, Error)]
pub enum AlphaError {
    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM TRANSPORT ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Upstream did not answer within the configured timeout.
    #[error("Upstream timeout after {millis}ms")]
    Timeout { millis: u64 },

    /// Upstream answered with a non-success HTTP status.
    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    // ═══════════════════════════════════════════════════════════════════════════
    // UPSTREAM LOGICAL ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Upstream body decoded but reported `success: false`.
    #[error("Upstream rejected the request: {0}")]
    UpstreamRejected(String),

    /// Upstream body could not be interpreted as a token listing.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    // ═══════════════════════════════════════════════════════════════════════════
    // SERIALIZATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    // ═══════════════════════════════════════════════════════════════════════════
    // CONFIGURATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AlphaError {
    /// Returns true if the error came from talking to the upstream API.
    ///
    /// Every such error degrades to the fallback listing.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            AlphaError::HttpError(_)
                | AlphaError::Timeout { .. }
                | AlphaError::UpstreamStatus { .. }
                | AlphaError::UpstreamRejected(_)
                | AlphaError::MalformedResponse(_)
                | AlphaError::JsonError(_)
        )
    }

    /// Returns true if the upstream was unreachable (as opposed to answering badly).
    pub fn is_transport(&self) -> bool {
        matches!(self, AlphaError::HttpError(_) | AlphaError::Timeout { .. })
    }
}
