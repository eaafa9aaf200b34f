//! In-memory TTL cache for the token listing.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use alpha_core::constants::DEFAULT_CACHE_TTL_MS;
use alpha_core::traits::Clock;
use alpha_core::types::TokenListResponse;
use alpha_core::SystemClock;

/// Cached listing and the instant it was fetched.
#[derive(Clone)]
struct CacheEntry {
    value: Arc<TokenListResponse>,
    fetched_at: Instant,
}

/// Cache configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Freshness window in milliseconds
    pub ttl_ms: u64,
}

impl CacheConfig {
    /// Freshness window as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_CACHE_TTL_MS,
        }
    }
}

/// Single-slot cache for the token listing.
///
/// Thread-safe. A value is served only while `now - fetched_at < ttl`;
/// stale values are kept until overwritten but never returned.
pub struct TokenListCache {
    entry: RwLock<Option<CacheEntry>>,
    config: CacheConfig,
    clock: Arc<dyn Clock>,
    hits: AtomicU64,
    misses: AtomicU64,
    writes: AtomicU64,
}

impl TokenListCache {
    /// Creates a cache with default configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Creates a cache with custom configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a cache reading time from `clock`.
    pub fn with_clock(config: CacheConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            entry: RwLock::new(None),
            config,
            clock,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            writes: AtomicU64::new(0),
        }
    }

    /// Returns the cached listing if it is still fresh.
    pub fn get(&self) -> Option<Arc<TokenListResponse>> {
        let now = self.clock.now();
        let fresh = self
            .entry
            .read()
            .as_ref()
            .filter(|e| now.saturating_duration_since(e.fetched_at) < self.config.ttl())
            .map(|e| e.value.clone());

        if fresh.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        fresh
    }

    /// Stores a listing, stamping it with the current time.
    pub fn set(&self, value: Arc<TokenListResponse>) {
        let fetched_at = self.clock.now();
        debug!(tokens = value.len(), "Caching token listing");
        *self.entry.write() = Some(CacheEntry { value, fetched_at });
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Drops the cached listing.
    pub fn clear(&self) {
        self.entry.write().take();
    }

    /// Age of the cached listing, fresh or not.
    pub fn age(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.entry
            .read()
            .as_ref()
            .map(|e| now.saturating_duration_since(e.fetched_at))
    }

    /// Returns true if a fresh listing is cached. Does not count as a hit.
    pub fn is_fresh(&self) -> bool {
        self.age().is_some_and(|age| age < self.config.ttl())
    }

    /// Freshness window.
    pub fn ttl(&self) -> Duration {
        self.config.ttl()
    }

    /// Returns cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            writes: self.writes.load(Ordering::Relaxed),
            fresh: self.is_fresh(),
            ttl_ms: self.config.ttl_ms,
        }
    }
}

impl Default for TokenListCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Clone, Debug, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub writes: u64,
    pub fresh: bool,
    pub ttl_ms: u64,
}
