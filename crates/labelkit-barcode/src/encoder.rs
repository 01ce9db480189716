//! Barcode encoding orchestration.
//!
//! The actual symbol generator is an opaque capability behind the
//! [`SymbolEncoder`] trait: the embedding application supplies the real
//! implementation, tests supply a deterministic stub. [`BarcodeEncoder`]
//! owns the fixed pipeline around it: validate the payload, compute the
//! device scale, invoke the capability, read the intrinsic size, and pull
//! out the vector paths.

use crate::svg;
use crate::symbology::Symbology;
use async_trait::async_trait;
use labelkit_core::{units, EncodingError, Result};
use tracing::debug;

/// A request for vector symbol output.
#[derive(Debug, Clone)]
pub struct SymbolRequest {
    pub symbology: Symbology,
    pub value: String,
    /// Unitless integer device scale, one unit per 100 mils of target width.
    pub scale: u32,
    /// Bar height in mm for linear symbologies; matrix symbologies size
    /// themselves.
    pub bar_height_mm: Option<u32>,
    /// Render the human-readable text line under the bars.
    pub include_text: bool,
}

impl SymbolRequest {
    /// The bwip-style encoder id for the requested symbology.
    pub fn bcid(&self) -> &'static str {
        self.symbology.bcid()
    }
}

/// Symbol-generation capability.
///
/// Implementations may run in-process or call out to a sidecar; either way
/// the future must resolve to a complete SVG vector description. Failures
/// are reported as-is and wrapped by the caller; nothing here retries.
#[async_trait]
pub trait SymbolEncoder: Send + Sync {
    async fn encode(&self, request: &SymbolRequest) -> anyhow::Result<String>;
}

/// An encoded symbol ready for translation.
///
/// Transient: lives for the processing of one barcode element.
#[derive(Debug, Clone)]
pub struct BarcodeResult {
    /// The raw vector description as returned by the capability.
    pub svg: String,
    /// Intrinsic width declared by the description.
    pub width: f64,
    /// Intrinsic height declared by the description.
    pub height: f64,
    /// Flattened path data, document order.
    pub paths: Vec<String>,
}

/// Validates, scales, and encodes barcode payloads.
pub struct BarcodeEncoder<'a> {
    symbol_encoder: &'a dyn SymbolEncoder,
}

impl<'a> BarcodeEncoder<'a> {
    /// Creates an encoder over a symbol-generation capability.
    pub fn new(symbol_encoder: &'a dyn SymbolEncoder) -> Self {
        Self { symbol_encoder }
    }

    /// Encodes a payload for a target footprint.
    ///
    /// The payload is validated against the symbology's rules before the
    /// capability is invoked, so rejections carry corrective messages
    /// rather than generator errors. The returned result still has to be
    /// fitted and translated; see `translate::build_group`.
    pub async fn encode(
        &self,
        symbology: Symbology,
        value: &str,
        target_width_mm: f64,
        target_height_mm: f64,
        include_text: bool,
    ) -> Result<BarcodeResult> {
        symbology.validate(value)?;

        let scale = units::device_scale_for_width(target_width_mm);
        let request = SymbolRequest {
            symbology,
            value: value.to_string(),
            scale,
            bar_height_mm: if symbology.is_matrix() { None } else { Some(10) },
            include_text,
        };

        debug!(
            symbology = %symbology,
            scale,
            target_width_mm,
            target_height_mm,
            "requesting vector symbol"
        );

        let svg_text = self
            .symbol_encoder
            .encode(&request)
            .await
            .map_err(|cause| EncodingError::SymbolGeneration {
                symbology: symbology.to_string(),
                reason: cause.to_string(),
            })?;

        if svg_text.trim().is_empty() {
            return Err(EncodingError::EmptyOutput {
                symbology: symbology.to_string(),
            }
            .into());
        }

        let (width, height) = svg::intrinsic_size(&svg_text);
        let paths = svg::extract_paths(&svg_text);
        debug!(width, height, path_count = paths.len(), "vector symbol received");

        Ok(BarcodeResult {
            svg: svg_text,
            width,
            height,
            paths,
        })
    }
}
