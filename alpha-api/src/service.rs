//! Token listing service: cache first, then upstream, then the fixed dataset.

use std::sync::Arc;

use tracing::{debug, info, warn};

use alpha_cache::TokenListCache;
use alpha_core::error::Result;
use alpha_core::fallback::fallback_response;
use alpha_core::traits::TokenSource;
use alpha_core::types::TokenListResponse;

/// Where a served listing came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingOrigin {
    /// Fresh cache entry
    Cache,
    /// Fetched from upstream on this request
    Upstream,
    /// Upstream failed, fixed dataset served
    Fallback,
}

impl ListingOrigin {
    /// Value of the `x-cache` response header.
    pub fn as_header(&self) -> &'static str {
        match self {
            ListingOrigin::Cache => "HIT",
            ListingOrigin::Upstream => "MISS",
            ListingOrigin::Fallback => "FALLBACK",
        }
    }
}

/// A listing ready to serve.
#[derive(Clone, Debug)]
pub struct TokenListing {
    /// Response body, shared with the cache
    pub response: Arc<TokenListResponse>,
    /// Where the body came from
    pub origin: ListingOrigin,
}

/// Serves the token listing with a TTL cache and a fixed fallback.
///
/// Concurrent misses may each call the upstream; the last write wins.
pub struct TokenListService {
    source: Arc<dyn TokenSource>,
    cache: TokenListCache,
}

impl TokenListService {
    /// Creates a service over an upstream source and a cache.
    pub fn new(source: Arc<dyn TokenSource>, cache: TokenListCache) -> Self {
        Self { source, cache }
    }

    /// The listing cache.
    pub fn cache(&self) -> &TokenListCache {
        &self.cache
    }

    /// Returns the listing. Never fails: upstream errors yield the fallback.
    pub async fn get_token_list(&self) -> TokenListing {
        if let Some(response) = self.cache.get() {
            debug!("Returning cached Alpha tokens");
            return TokenListing {
                response,
                origin: ListingOrigin::Cache,
            };
        }

        info!(source = self.source.name(), "Fetching fresh Alpha tokens");
        match self.refresh().await {
            Ok(response) => {
                info!(tokens = response.len(), "Fetched Alpha tokens");
                TokenListing {
                    response,
                    origin: ListingOrigin::Upstream,
                }
            }
            Err(err) => {
                warn!(
                    error = %err,
                    transport = err.is_transport(),
                    "Upstream fetch failed, serving fallback data"
                );
                TokenListing {
                    response: Arc::new(fallback_response()),
                    origin: ListingOrigin::Fallback,
                }
            }
        }
    }

    /// Fetches from upstream once and caches the normalized listing.
    pub async fn refresh(&self) -> Result<Arc<TokenListResponse>> {
        let listing = self.source.fetch_listing().await?;
        let response = Arc::new(listing.into_response()?);
        self.cache.set(response.clone());
        Ok(response)
    }
}
