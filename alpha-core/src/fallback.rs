//! Fixed listing served when the upstream cannot be reached.
//!
//! Network names here are intentionally left raw (`"SOLANA"`); the dataset
//! is served byte-for-byte as written and never cached.

use crate::constants::FALLBACK_ERROR_MESSAGE;
use crate::types::{TokenListResponse, TokenRecord};

/// `(name, symbol, contract address, network)` for every fallback token.
const FALLBACK_TOKENS: [(&str, &str, &str, &str); 5] = [
    ("AgentLISA", "LISA", "0x0AA9D742A1e3C4Ad2947eBbf268aFA15D7c9bFBd", "BSC"),
    ("AI16Z", "AI16Z", "HeLp6NuQkmYB4pYWo2zYs22mESHXPQYzXbB8n4V98jwC", "SOLANA"),
    ("Zerebro", "ZEREBRO", "HrrkVQ3RB8i...", "SOLANA"),
    ("Fartcoin", "FARTCOIN", "9BB6NFEcjBCtnNLFko2FqVQBq8HHM13kCyYcdQbgpump", "SOLANA"),
    ("Moodeng", "MOODENG", "ED5nyyWEzpPPiWimP8vYm7sD7TD3LAt3Q3gRTWHzPJBY", "SOLANA"),
];

/// The fixed fallback token records.
pub fn fallback_tokens() -> Vec<TokenRecord> {
    FALLBACK_TOKENS
        .iter()
        .map(|(name, symbol, address, network)| TokenRecord::new(*name, *symbol, *address, *network, ""))
        .collect()
}

/// The full fallback response: `success: true`, `fallback: true` and an
/// error description.
pub fn fallback_response() -> TokenListResponse {
    TokenListResponse {
        fallback: Some(true),
        error: Some(FALLBACK_ERROR_MESSAGE.to_string()),
        ..TokenListResponse::new(fallback_tokens())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fallback_has_five_tokens() {
        let response = fallback_response();
        assert!(response.success);
        assert!(response.is_fallback());
        assert_eq!(response.len(), 5);
        assert_eq!(response.error.as_deref(), Some("Using fallback data due to API error"));
    }

    #[test]
    fn test_fallback_wire_format() {
        let out = serde_json::to_value(fallback_response()).unwrap();
        assert_eq!(out["fallback"], true);
        assert_eq!(
            out["data"][0],
            json!({
                "name": "AgentLISA",
                "symbol": "LISA",
                "contractAddress": "0x0AA9D742A1e3C4Ad2947eBbf268aFA15D7c9bFBd",
                "network": "BSC",
                "logo": ""
            })
        );
        assert_eq!(out["data"][4]["symbol"], "MOODENG");
    }

    #[test]
    fn test_fallback_networks_are_not_normalized() {
        let networks: Vec<String> = fallback_tokens().into_iter().map(|t| t.network).collect();
        assert_eq!(networks, ["BSC", "SOLANA", "SOLANA", "SOLANA", "SOLANA"]);
    }
}
