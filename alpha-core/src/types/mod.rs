//! Domain types for the Alpha proxy.
//!
//! - [`TokenRecord`]: A token as served to clients, network normalized
//! - [`TokenListResponse`]: The body of `GET /api/alpha-tokens`
//! - [`UpstreamToken`] / [`UpstreamListing`]: The raw upstream payload

mod listing;
mod token;

pub use listing::*;
pub use token::*;
