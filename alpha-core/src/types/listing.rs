//! Token listing responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AlphaError, Result};
use crate::types::{TokenRecord, UpstreamToken};

/// Body of `GET /api/alpha-tokens`.
///
/// `fallback` and `error` are only present when the fixed dataset is served.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenListResponse {
    /// Always true for served listings
    pub success: bool,
    /// Token records
    pub data: Vec<TokenRecord>,
    /// Set when the upstream failed and the fixed dataset was served
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<bool>,
    /// Why the fixed dataset was served
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Other top-level upstream fields (`code`, `message`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenListResponse {
    /// Creates a successful listing with no extra fields.
    pub fn new(data: Vec<TokenRecord>) -> Self {
        Self {
            success: true,
            data,
            fallback: None,
            error: None,
            extra: Map::new(),
        }
    }

    /// Returns true if this is the fixed fallback dataset.
    pub fn is_fallback(&self) -> bool {
        self.fallback == Some(true)
    }

    /// Number of token records.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if there are no token records.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Upstream body exactly as received.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpstreamListing {
    /// Upstream success flag; missing counts as failure
    #[serde(default)]
    pub success: Option<bool>,
    /// Raw token records
    #[serde(default)]
    pub data: Option<Vec<UpstreamToken>>,
    /// Other top-level fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UpstreamListing {
    /// Parses an upstream body.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| AlphaError::MalformedResponse(e.to_string()))
    }

    /// Validates the listing and normalizes every record.
    ///
    /// Fails when the upstream reported `success: false` (or omitted it) or
    /// sent no `data` array.
    pub fn into_response(self) -> Result<TokenListResponse> {
        if self.success != Some(true) {
            let message = self
                .extra
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("success flag not set")
                .to_string();
            return Err(AlphaError::UpstreamRejected(message));
        }

        let data = self
            .data
            .ok_or_else(|| AlphaError::MalformedResponse("missing data array".into()))?;

        // `fallback` and `error` mark the fixed dataset; an upstream copy would
        // make a live listing look like one.
        let mut extra = self.extra;
        extra.remove("fallback");
        extra.remove("error");

        Ok(TokenListResponse {
            success: true,
            data: data.into_iter().map(UpstreamToken::into_record).collect(),
            fallback: None,
            error: None,
            extra,
        })
    }
}
