//! TTL cache for the Alpha token listing.
//!
//! Single-slot in-memory cache with a fixed freshness window and an
//! injectable clock.

mod cache;

pub use cache::{CacheConfig, CacheStats, TokenListCache};
