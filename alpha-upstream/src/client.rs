//! Binance Alpha client implementation.
//!
//! One GET per call, browser-like headers, hard timeout. Retrying and
//! falling back are the caller's business.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use url::Url;

use alpha_core::constants::*;
use alpha_core::error::{AlphaError, Result};
use alpha_core::traits::TokenSource;
use alpha_core::types::UpstreamListing;

/// Upstream client configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Token listing endpoint
    pub url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
    /// `User-Agent` header
    pub user_agent: String,
    /// `Accept` header
    pub accept: String,
    /// `Accept-Language` header
    pub accept_language: String,
    /// `Referer` header
    pub referer: String,
    /// `Origin` header
    pub origin: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.into(),
            timeout_ms: DEFAULT_UPSTREAM_TIMEOUT_MS,
            user_agent: UPSTREAM_USER_AGENT.into(),
            accept: UPSTREAM_ACCEPT.into(),
            accept_language: UPSTREAM_ACCEPT_LANGUAGE.into(),
            referer: UPSTREAM_REFERER.into(),
            origin: UPSTREAM_ORIGIN.into(),
        }
    }
}

impl UpstreamConfig {
    /// Default headers and timeout against a different endpoint.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in [
            (ACCEPT, &self.accept),
            (ACCEPT_LANGUAGE, &self.accept_language),
            (REFERER, &self.referer),
            (ORIGIN, &self.origin),
        ] {
            let value = HeaderValue::from_str(value)
                .map_err(|e| AlphaError::ConfigError(format!("invalid {} header: {}", name, e)))?;
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

/// Client for the upstream token listing.
pub struct AlphaClient {
    config: UpstreamConfig,
    url: Url,
    http_client: reqwest::Client,
}

impl AlphaClient {
    /// Creates a client against the Binance endpoint with default headers.
    pub fn new() -> Result<Self> {
        Self::with_config(UpstreamConfig::default())
    }

    /// Creates a client with the given config.
    pub fn with_config(config: UpstreamConfig) -> Result<Self> {
        let url = Url::parse(&config.url)
            .map_err(|e| AlphaError::ConfigError(format!("invalid upstream URL '{}': {}", config.url, e)))?;

        let http_client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .default_headers(config.default_headers()?)
            .build()
            .map_err(|e| AlphaError::ConfigError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            url,
            http_client,
        })
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Fetches and decodes the listing once.
    #[instrument(skip(self), fields(url = %self.url))]
    pub async fn fetch(&self) -> Result<UpstreamListing> {
        let response = self
            .http_client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AlphaError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        let listing = UpstreamListing::from_slice(&body)?;

        debug!(
            success = ?listing.success,
            tokens = listing.data.as_ref().map_or(0, Vec::len),
            "Fetched upstream listing"
        );
        Ok(listing)
    }

    fn transport_error(&self, err: reqwest::Error) -> AlphaError {
        if err.is_timeout() {
            AlphaError::Timeout {
                millis: self.config.timeout_ms,
            }
        } else {
            AlphaError::HttpError(err.to_string())
        }
    }
}

#[async_trait]
impl TokenSource for AlphaClient {
    async fn fetch_listing(&self) -> Result<UpstreamListing> {
        self.fetch().await
    }

    fn name(&self) -> &str {
        self.url.host_str().unwrap_or("upstream")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LIST_PATH: &str = "/bapi/alpha/token/list";

    async fn client_for(server: &MockServer) -> AlphaClient {
        let config = UpstreamConfig::with_url(format!("{}{}", server.uri(), LIST_PATH));
        AlphaClient::with_config(config).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = UpstreamConfig::default();
        assert_eq!(config.url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_url_is_config_error() {
        let result = AlphaClient::with_config(UpstreamConfig::with_url("not a url"));
        assert!(matches!(result, Err(AlphaError::ConfigError(_))));
    }

    #[test]
    fn test_invalid_header_is_config_error() {
        let config = UpstreamConfig {
            referer: "bad\nvalue".into(),
            ..UpstreamConfig::default()
        };
        assert!(matches!(AlphaClient::with_config(config), Err(AlphaError::ConfigError(_))));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LIST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "code": "000000",
                "success": true,
                "data": [{ "symbol": "LISA", "chainName": "BSC" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let listing = client_for(&server).await.fetch_listing().await.unwrap();
        assert_eq!(listing.success, Some(true));
        assert_eq!(listing.data.map(|d| d.len()), Some(1));
    }

    #[tokio::test]
    async fn test_sends_browser_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true, "data": [] })))
            .mount(&server)
            .await;

        client_for(&server).await.fetch().await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let headers = &requests[0].headers;
        let get = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned);
        assert_eq!(get("user-agent").as_deref(), Some(UPSTREAM_USER_AGENT));
        assert_eq!(get("accept").as_deref(), Some(UPSTREAM_ACCEPT));
        assert_eq!(get("accept-language").as_deref(), Some(UPSTREAM_ACCEPT_LANGUAGE));
        assert_eq!(get("referer").as_deref(), Some(UPSTREAM_REFERER));
        assert_eq!(get("origin").as_deref(), Some(UPSTREAM_ORIGIN));
    }

    #[tokio::test]
    async fn test_unsuccessful_body_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false, "message": "busy" })))
            .mount(&server)
            .await;

        let listing = client_for(&server).await.fetch().await.unwrap();
        assert!(matches!(listing.into_response(), Err(AlphaError::UpstreamRejected(_))));
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, AlphaError::UpstreamStatus { status: 503 }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>captcha</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, AlphaError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": true, "data": [] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let config = UpstreamConfig::with_url(format!("{}{}", server.uri(), LIST_PATH)).with_timeout_ms(50);
        let client = AlphaClient::with_config(config).unwrap();

        let err = client.fetch().await.unwrap_err();
        assert!(matches!(err, AlphaError::Timeout { millis: 50 }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let server = MockServer::start().await;
        let url = format!("{}{}", server.uri(), LIST_PATH);
        drop(server);

        let client = AlphaClient::with_config(UpstreamConfig::with_url(url)).unwrap();
        let err = client.fetch().await.unwrap_err();
        assert!(err.is_transport());
    }
}
