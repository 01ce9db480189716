//! Label element and project model.
//!
//! `LabelSpec` is what the request-handling layer hands over (all fields
//! deserialize straight from its JSON); `LightBurnProject` is the assembled
//! document model the writer consumes. Projects are built fresh per
//! generation request and discarded after serialization.

use labelkit_barcode::{ShapeGroup, Symbology};
use labelkit_materials::CutSetting;
use serde::{Deserialize, Serialize};

/// A text line on the label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextElement {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Text height in mm; maps directly to the font size parameter.
    pub height: f64,
    /// Font spec override; the writer's industrial default applies when
    /// absent.
    pub font: Option<String>,
    #[serde(default)]
    pub layer_index: u32,
}

/// A rectangle, optionally with rounded corners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RectElement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: Option<f64>,
    #[serde(default)]
    pub layer_index: u32,
}

/// A barcode with its target footprint.
///
/// `geometry` is attached during assembly once the symbol has been encoded
/// and translated; a barcode reaching the writer without it is a geometry
/// defect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeElement {
    pub symbology: Symbology,
    pub value: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub layer_index: u32,
    #[serde(default)]
    pub geometry: Option<ShapeGroup>,
}

/// One element of a label, in drawing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LabelElement {
    Text(TextElement),
    Rect(RectElement),
    Barcode(BarcodeElement),
}

impl LabelElement {
    /// The cut layer this element is routed to.
    pub fn layer_index(&self) -> u32 {
        match self {
            Self::Text(e) => e.layer_index,
            Self::Rect(e) => e.layer_index,
            Self::Barcode(e) => e.layer_index,
        }
    }

    /// Shape kind name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Rect(_) => "Rect",
            Self::Barcode(_) => "Barcode",
        }
    }
}

/// An assembled project ready for serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightBurnProject {
    pub name: String,
    /// Physical label width, mm.
    pub width: f64,
    /// Physical label height, mm.
    pub height: f64,
    /// Storefront material identifier the cut setting was resolved from.
    pub material_id: String,
    /// Elements in drawing order; the writer never reorders or drops them.
    pub elements: Vec<LabelElement>,
    /// Resolved cut parameters applied to every used layer.
    pub cut_setting: CutSetting,
    /// Final value of this generation's shape-id counter.
    pub shapes_allocated: u32,
}

/// One field identifier/value pair, in layout order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelField {
    pub key: String,
    pub value: String,
}

impl LabelField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Requested barcode content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarcodeSpec {
    pub symbology: Symbology,
    pub value: String,
}

/// A label generation request as handed over by the web layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelSpec {
    /// Template or project name; carried into the document notes.
    pub name: String,
    /// Storefront material identifier.
    pub material_id: String,
    /// Physical width, mm.
    pub width: f64,
    /// Physical height, mm.
    pub height: f64,
    /// Field values in layout order.
    #[serde(default)]
    pub fields: Vec<LabelField>,
    #[serde(default)]
    pub barcode: Option<BarcodeSpec>,
    /// Opaque logo reference; not processed by this core.
    #[serde(default)]
    pub logo: Option<String>,
    /// Copy count; consumed by the ordering layer, not by this core.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Explicit cut parameters, bypassing material resolution.
    #[serde(default)]
    pub cut_setting_override: Option<CutSetting>,
}

fn default_quantity() -> u32 {
    1
}
