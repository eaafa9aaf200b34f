//! # Alpha Core
//!
//! Core types, errors, and traits for the Alpha token listing proxy.
//!
//! This crate provides the building blocks shared by the other Alpha crates:
//!
//! - **Types**: Token records and listing responses, raw and normalized
//! - **Network**: Normalization of chain names to canonical display names
//! - **Fallback**: The fixed dataset served when the upstream is unavailable
//! - **Errors**: Upstream and configuration error types
//! - **Traits**: `TokenSource` and `Clock` seams for injection in tests
//!
//! ## Example
//!
//! ```rust
//! use alpha_core::{normalize_network, fallback_response};
//!
//! assert_eq!(normalize_network(Some(" bnb smart chain ")), "BSC");
//! assert_eq!(fallback_response().data.len(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod clock;
pub mod constants;
pub mod error;
pub mod fallback;
pub mod network;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use clock::{ManualClock, SystemClock};
pub use constants::*;
pub use error::{AlphaError, Result};
pub use fallback::fallback_response;
pub use network::{normalize_network, Network};
pub use traits::*;
pub use types::*;
