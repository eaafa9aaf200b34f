//! Scripted token source for tests.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

use alpha_core::error::{AlphaError, Result};
use alpha_core::traits::TokenSource;
use alpha_core::types::UpstreamListing;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Ok,
    Rejected,
    Unreachable,
}

pub(crate) struct ScriptedSource {
    mode: Mutex<Mode>,
    calls: AtomicU64,
}

impl ScriptedSource {
    fn with_mode(mode: Mode) -> Self {
        Self {
            mode: Mutex::new(mode),
            calls: AtomicU64::new(0),
        }
    }

    pub(crate) fn ok() -> Self {
        Self::with_mode(Mode::Ok)
    }

    pub(crate) fn rejected() -> Self {
        Self::with_mode(Mode::Rejected)
    }

    pub(crate) fn unreachable() -> Self {
        Self::with_mode(Mode::Unreachable)
    }

    pub(crate) fn recover(&self) {
        *self.mode.lock() = Mode::Ok;
    }

    pub(crate) fn break_upstream(&self) {
        *self.mode.lock() = Mode::Unreachable;
    }

    pub(crate) fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

pub(crate) fn sample_listing() -> UpstreamListing {
    serde_json::from_value(json!({
        "code": "000000",
        "success": true,
        "data": [
            { "name": "AgentLISA", "symbol": "LISA", "contractAddress": "0x0AA9", "chainName": "BNB Smart Chain" },
            { "name": "AI16Z", "symbol": "AI16Z", "contractAddress": "HeLp6", "chainName": "sol" },
            { "name": "Mystery", "symbol": "MYST", "contractAddress": "0xdead" },
            { "name": "Brett", "symbol": "BRETT", "contractAddress": "0x532f", "chain": "Base" }
        ]
    }))
    .expect("sample listing is valid JSON")
}

#[async_trait]
impl TokenSource for ScriptedSource {
    async fn fetch_listing(&self) -> Result<UpstreamListing> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mode = *self.mode.lock();
        match mode {
            Mode::Ok => Ok(sample_listing()),
            Mode::Rejected => Ok(serde_json::from_value(json!({ "success": false, "message": "busy" }))?),
            Mode::Unreachable => Err(AlphaError::HttpError("connection refused".into())),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
