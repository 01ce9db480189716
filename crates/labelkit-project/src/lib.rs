//! # LabelKit Project
//!
//! Label layout and LightBurn document generation: the element model, the
//! project assembler (material resolution, field layout, barcode
//! encoding), the `.lbrn2` writer, and the stock label templates.
//!
//! Assembly always completes barcode encoding before serialization starts;
//! the writer audits geometry before emitting anything, so callers either
//! receive a complete document or a typed error, never a partial file.

pub mod assembler;
pub mod model;
pub mod templates;
pub mod writer;

pub use assembler::{layout_label, ProjectAssembler, MARGIN_MM};
pub use model::{
    BarcodeElement, BarcodeSpec, LabelElement, LabelField, LabelSpec, LightBurnProject,
    RectElement, TextElement,
};
pub use templates::ElementLayout;
pub use writer::{LightBurnWriter, DEFAULT_FONT, LAYER_COLORS};
