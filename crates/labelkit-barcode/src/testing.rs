//! Deterministic symbol encoders for tests.
//!
//! The real symbol generator is an external capability; nothing in this
//! workspace should need it to run a test. These stubs return canned
//! vector descriptions (or canned failures) so encode pipelines stay
//! deterministic and offline.

use crate::encoder::{SymbolEncoder, SymbolRequest};
use async_trait::async_trait;
use std::sync::Mutex;

/// A linear-symbol-shaped vector description: stroke paths plus a rect,
/// 116x60 intrinsic units.
pub const BARS_SVG: &str = r##"<svg version="1.1" width="116" height="60" viewBox="0 0 116 60" xmlns="http://www.w3.org/2000/svg">
 <g fill="#000000">
  <path d="M4 0 L4 48 M8 0 L8 48 M14 0 L14 48"/>
  <path d="M20 0 V48 H24 V0 Z"/>
  <rect x="30" y="0" width="6" height="48"/>
 </g>
</svg>"##;

/// Returns a fixed vector description for every request.
pub struct StaticSymbolEncoder {
    svg: String,
}

impl StaticSymbolEncoder {
    pub fn new(svg: impl Into<String>) -> Self {
        Self { svg: svg.into() }
    }

    /// The stock linear-symbol description.
    pub fn bars() -> Self {
        Self::new(BARS_SVG)
    }
}

#[async_trait]
impl SymbolEncoder for StaticSymbolEncoder {
    async fn encode(&self, _request: &SymbolRequest) -> anyhow::Result<String> {
        Ok(self.svg.clone())
    }
}

/// Fails every request with a fixed message.
pub struct FailingSymbolEncoder {
    message: String,
}

impl FailingSymbolEncoder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl SymbolEncoder for FailingSymbolEncoder {
    async fn encode(&self, _request: &SymbolRequest) -> anyhow::Result<String> {
        anyhow::bail!("{}", self.message)
    }
}

/// Returns a fixed description and records every request it saw.
pub struct RecordingSymbolEncoder {
    svg: String,
    requests: Mutex<Vec<SymbolRequest>>,
}

impl RecordingSymbolEncoder {
    pub fn bars() -> Self {
        Self {
            svg: BARS_SVG.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<SymbolRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

#[async_trait]
impl SymbolEncoder for RecordingSymbolEncoder {
    async fn encode(&self, request: &SymbolRequest) -> anyhow::Result<String> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request.clone());
        Ok(self.svg.clone())
    }
}
