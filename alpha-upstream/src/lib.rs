//! HTTP client for the Binance Alpha token listing.

mod client;

pub use client::{AlphaClient, UpstreamConfig};
