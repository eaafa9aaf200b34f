//! Chain name normalization.
//!
//! Upstream records label their chain inconsistently (`"BSC"`, `"BNB Smart
//! Chain"`, `"sol"`, ...). Known aliases collapse to one display name;
//! anything else is passed through untouched.

use std::fmt;

use serde_json::{Map, Value};

use crate::constants::UNKNOWN_NETWORK;

/// Chains with a canonical display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    /// Solana
    Solana,
    /// BNB Smart Chain
    Bsc,
    /// Ethereum mainnet
    Ethereum,
    /// Polygon PoS
    Polygon,
    /// Avalanche C-Chain
    Avalanche,
    /// Arbitrum One
    Arbitrum,
}

impl Network {
    /// All known networks.
    pub const ALL: [Network; 6] = [
        Network::Solana,
        Network::Bsc,
        Network::Ethereum,
        Network::Polygon,
        Network::Avalanche,
        Network::Arbitrum,
    ];

    /// Parses an alias, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        let key = raw.trim().to_uppercase();
        let network = match key.as_str() {
            "SOL" | "SOLANA" => Network::Solana,
            "BSC" | "BNB" | "BNB SMART CHAIN" | "BINANCE SMART CHAIN" => Network::Bsc,
            "ETH" | "ETHEREUM" => Network::Ethereum,
            "POLYGON" | "MATIC" => Network::Polygon,
            "AVAX" | "AVALANCHE" => Network::Avalanche,
            "ARB" | "ARBITRUM" => Network::Arbitrum,
            _ => return None,
        };
        Some(network)
    }

    /// Display name served to clients.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Network::Solana => "Solana",
            Network::Bsc => "BSC",
            Network::Ethereum => "Ethereum",
            Network::Polygon => "Polygon",
            Network::Avalanche => "Avalanche",
            Network::Arbitrum => "Arbitrum",
        }
    }

    /// Upper-case aliases recognized by [`Network::parse`].
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Network::Solana => &["SOL", "SOLANA"],
            Network::Bsc => &["BSC", "BNB", "BNB SMART CHAIN", "BINANCE SMART CHAIN"],
            Network::Ethereum => &["ETH", "ETHEREUM"],
            Network::Polygon => &["POLYGON", "MATIC"],
            Network::Avalanche => &["AVAX", "AVALANCHE"],
            Network::Arbitrum => &["ARB", "ARBITRUM"],
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Normalizes a raw chain name.
///
/// - Known aliases map to their canonical name.
/// - Unknown names are returned unchanged (original case and whitespace).
/// - Missing or empty names become `"Unknown"`. A whitespace-only name is
///   not empty and passes through like any other unknown name.
pub fn normalize_network(raw: Option<&str>) -> String {
    match raw {
        None | Some("") => UNKNOWN_NETWORK.to_string(),
        Some(s) => match Network::parse(s) {
            Some(network) => network.canonical_name().to_string(),
            None => s.to_string(),
        },
    }
}

/// Fields consulted, in order, for a record's raw chain name.
pub const NETWORK_SOURCE_FIELDS: [&str; 3] = ["chainName", "network", "chain"];

/// Picks the raw chain name out of an upstream record.
///
/// The first non-empty string among `chainName`, `network` and `chain` wins.
/// Non-string values are skipped.
pub fn raw_network(fields: &Map<String, Value>) -> Option<&str> {
    NETWORK_SOURCE_FIELDS
        .iter()
        .filter_map(|key| fields.get(*key).and_then(Value::as_str))
        .find(|s| !s.is_empty())
}
