//! Common traits for the Alpha proxy.
//!
//! These are the seams the service is built on, so tests can swap in a fake
//! upstream and a manually advanced clock.

use std::time::Instant;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::UpstreamListing;

// ═══════════════════════════════════════════════════════════════════════════════
// TOKEN SOURCE TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface for fetching the raw token listing.
///
/// Implementations might use:
/// - The Binance HTTP endpoint (production)
/// - A canned listing or scripted failures (tests)
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// Fetches the listing once. Implementations must not retry.
    ///
    /// Transport failures, timeouts and non-success statuses are errors;
    /// a body with `success: false` is returned as-is and rejected later by
    /// [`UpstreamListing::into_response`].
    async fn fetch_listing(&self) -> Result<UpstreamListing>;

    /// Short name for logs.
    fn name(&self) -> &str {
        "upstream"
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLOCK TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Monotonic time source.
pub trait Clock: Send + Sync {
    /// Current instant.
    fn now(&self) -> Instant;
}
