//! Constants for the Alpha proxy.
//!
//! Header values mirror what the Binance web frontend sends; the endpoint
//! refuses requests that do not look like they come from a browser.

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM
// ═══════════════════════════════════════════════════════════════════════════════

/// Binance Alpha token listing endpoint.
pub const DEFAULT_UPSTREAM_URL: &str =
    "https://www.binance.com/bapi/defi/v1/public/wallet-direct/buw/wallet/cex/alpha/all/token/list";

/// Upstream request timeout in milliseconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 10_000;

/// `User-Agent` header sent upstream.
pub const UPSTREAM_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// `Accept` header sent upstream.
pub const UPSTREAM_ACCEPT: &str = "application/json";

/// `Accept-Language` header sent upstream.
pub const UPSTREAM_ACCEPT_LANGUAGE: &str = "zh-CN,zh;q=0.9,en;q=0.8";

/// `Referer` header sent upstream.
pub const UPSTREAM_REFERER: &str = "https://www.binance.com/";

/// `Origin` header sent upstream.
pub const UPSTREAM_ORIGIN: &str = "https://www.binance.com";

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE
// ═══════════════════════════════════════════════════════════════════════════════

/// Freshness window of the cached listing in milliseconds.
pub const DEFAULT_CACHE_TTL_MS: u64 = 30_000;

// ═══════════════════════════════════════════════════════════════════════════════
// SERVER
// ═══════════════════════════════════════════════════════════════════════════════

/// Port the HTTP server listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Directory served for `/` and other static paths.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Network name used when a record carries none.
pub const UNKNOWN_NETWORK: &str = "Unknown";

/// Message attached to fallback responses.
pub const FALLBACK_ERROR_MESSAGE: &str = "Using fallback data due to API error";
