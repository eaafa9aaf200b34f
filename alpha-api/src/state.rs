//! App state: config, token listing service, start time.

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;

use alpha_cache::{CacheConfig, TokenListCache};
use alpha_core::constants::*;
use alpha_core::error::Result;
use alpha_upstream::{AlphaClient, UpstreamConfig};

use crate::service::TokenListService;

/// Server configuration, read from the environment.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Listen port (`PORT`)
    pub port: u16,
    /// Token listing endpoint (`ALPHA_API_URL`)
    pub upstream_url: String,
    /// Upstream timeout (`UPSTREAM_TIMEOUT_MS`)
    pub upstream_timeout_ms: u64,
    /// Cache freshness window (`CACHE_TTL_MS`)
    pub cache_ttl_ms: u64,
    /// Static files directory (`PUBLIC_DIR`)
    pub public_dir: PathBuf,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream_url: DEFAULT_UPSTREAM_URL.into(),
            upstream_timeout_ms: DEFAULT_UPSTREAM_TIMEOUT_MS,
            cache_ttl_ms: DEFAULT_CACHE_TTL_MS,
            public_dir: PathBuf::from(DEFAULT_PUBLIC_DIR),
        }
    }
}

impl ApiConfig {
    /// Loads `.env` if present, then reads env vars; unset or unparsable values use defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            port: env_or("PORT", DEFAULT_PORT),
            upstream_url: std::env::var("ALPHA_API_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.into()),
            upstream_timeout_ms: env_or("UPSTREAM_TIMEOUT_MS", DEFAULT_UPSTREAM_TIMEOUT_MS),
            cache_ttl_ms: env_or("CACHE_TTL_MS", DEFAULT_CACHE_TTL_MS),
            public_dir: std::env::var("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_PUBLIC_DIR)),
        }
    }

    /// Upstream client settings.
    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::with_url(&self.upstream_url).with_timeout_ms(self.upstream_timeout_ms)
    }

    /// Cache settings.
    pub fn cache(&self) -> CacheConfig {
        CacheConfig {
            ttl_ms: self.cache_ttl_ms,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Shared application state.
pub struct AppState {
    /// Server configuration
    pub config: ApiConfig,
    /// Token listing service
    pub tokens: TokenListService,
    /// Process start, for uptime
    pub started_at: Instant,
}

impl AppState {
    /// Wires the Binance client and a fresh cache from `config`.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = AlphaClient::with_config(config.upstream())?;
        let cache = TokenListCache::with_config(config.cache());
        let tokens = TokenListService::new(Arc::new(client), cache);
        Ok(Self::with_service(config, tokens))
    }

    /// Builds state around an existing service.
    pub fn with_service(config: ApiConfig, tokens: TokenListService) -> Self {
        Self {
            config,
            tokens,
            started_at: Instant::now(),
        }
    }
}
