//! Token records, raw and normalized.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::network::{normalize_network, raw_network};

/// A token as served to clients.
///
/// Only `network` is rewritten; every other upstream field is kept in
/// `fields` exactly as received (nulls, numbers and nested objects included)
/// and serialized back at the top level of the record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// Normalized chain name
    #[serde(default)]
    pub network: String,
    /// Every other field, passed through untouched
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl TokenRecord {
    /// Creates a record from the five listing fields.
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        contract_address: impl Into<String>,
        network: impl Into<String>,
        logo: impl Into<String>,
    ) -> Self {
        let mut fields = Map::new();
        fields.insert("name".into(), Value::String(name.into()));
        fields.insert("symbol".into(), Value::String(symbol.into()));
        fields.insert("contractAddress".into(), Value::String(contract_address.into()));
        fields.insert("logo".into(), Value::String(logo.into()));

        Self {
            network: network.into(),
            fields,
        }
    }

    /// Raw field value, if present.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// String field value; `None` when absent or not a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Token name
    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    /// Ticker symbol
    pub fn symbol(&self) -> Option<&str> {
        self.get_str("symbol")
    }

    /// Contract or mint address on `network`
    pub fn contract_address(&self) -> Option<&str> {
        self.get_str("contractAddress")
    }

    /// Logo URL
    pub fn logo(&self) -> Option<&str> {
        self.get_str("logo")
    }
}

/// A token exactly as the upstream sent it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpstreamToken(pub Map<String, Value>);

impl UpstreamToken {
    /// Raw chain name, see [`raw_network`].
    pub fn raw_network(&self) -> Option<&str> {
        raw_network(&self.0)
    }

    /// Converts into a served record, normalizing the chain name.
    pub fn into_record(self) -> TokenRecord {
        let network = normalize_network(self.raw_network());
        let mut fields = self.0;
        fields.remove("network");

        TokenRecord { network, fields }
    }
}

impl From<Map<String, Value>> for UpstreamToken {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn upstream(value: Value) -> UpstreamToken {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_into_record_normalizes_chain_name() {
        let record = upstream(json!({
            "name": "Moodeng",
            "symbol": "MOODENG",
            "contractAddress": "ED5nyyWEzpPPiWimP8vYm7sD7TD3LAt3Q3gRTWHzPJBY",
            "chainName": "SOL",
            "logo": "https://example.com/moodeng.png"
        }))
        .into_record();

        assert_eq!(record.name(), Some("Moodeng"));
        assert_eq!(record.network, "Solana");
        assert_eq!(record.logo(), Some("https://example.com/moodeng.png"));
        assert_eq!(record.get("chainName"), Some(&json!("SOL")));
    }

    #[test]
    fn test_into_record_replaces_network_field() {
        let record = upstream(json!({ "symbol": "X", "network": "bnb" })).into_record();
        assert_eq!(record.network, "BSC");
        assert!(!record.fields.contains_key("network"));

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out, json!({ "symbol": "X", "network": "BSC" }));
    }

    #[test]
    fn test_into_record_without_chain_is_unknown() {
        let record = upstream(json!({ "symbol": "X" })).into_record();
        assert_eq!(record.network, "Unknown");
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let record = upstream(json!({
            "symbol": "LISA",
            "chain": "bsc",
            "price": "0.0123",
            "listingTime": 1735689600000u64
        }))
        .into_record();

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["price"], "0.0123");
        assert_eq!(out["listingTime"], 1735689600000u64);
        assert_eq!(out["chain"], "bsc");
        assert_eq!(out["network"], "BSC");
    }

    #[test]
    fn test_null_absent_and_non_string_fields_unchanged() {
        let record = upstream(json!({
            "symbol": "X",
            "name": null,
            "decimals": 18,
            "logo": { "small": "a.png" },
            "chainName": "bsc"
        }))
        .into_record();

        assert_eq!(record.name(), None);
        assert_eq!(record.contract_address(), None);

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(
            out,
            json!({
                "symbol": "X",
                "name": null,
                "decimals": 18,
                "logo": { "small": "a.png" },
                "chainName": "bsc",
                "network": "BSC"
            })
        );
        assert!(out.get("contractAddress").is_none());
    }

    #[test]
    fn test_new_sets_listing_fields() {
        let record = TokenRecord::new("AgentLISA", "LISA", "0x0AA9", "BSC", "");
        assert_eq!(record.symbol(), Some("LISA"));
        assert_eq!(record.contract_address(), Some("0x0AA9"));
        assert_eq!(record.logo(), Some(""));
        assert_eq!(record.network, "BSC");
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = upstream(json!({ "symbol": "X", "price": 1.5, "network": "eth" })).into_record();
        let back: TokenRecord = serde_json::from_value(serde_json::to_value(&record).unwrap()).unwrap();
        assert_eq!(back, record);
    }
}
