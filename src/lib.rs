//! # LabelKit
//!
//! Industrial label compiler: turns a structured label description
//! (material, physical dimensions, text fields, an optional barcode) into
//! a LightBurn `.lbrn2` project document ready for laser engraving.
//!
//! This crate is the library facade over the workspace members:
//!
//! - `labelkit-core` - error taxonomy, geometry primitives, unit
//!   conversion
//! - `labelkit-materials` - the material catalog and storefront mapping
//! - `labelkit-barcode` - symbology validation, the symbol-generation
//!   capability boundary, vector path translation
//! - `labelkit-project` - layout, assembly, templates, and the document
//!   writer
//!
//! ## Usage
//!
//! ```rust,ignore
//! use labelkit::{compile_label, MaterialCatalog};
//!
//! let catalog = MaterialCatalog::builtin()?;
//! // `encoder` is the application's SymbolEncoder implementation.
//! let document = compile_label(&spec, &catalog, &encoder).await?;
//! ```
//!
//! Generation is pure per request: no persistence, no retries, no global
//! state. Every failure aborts the generation with a typed [`Error`];
//! `Error::is_user_facing()` tells the web layer whether to show the
//! message or raise an internal alert.

pub use labelkit_core::{
    units, ConfigurationError, EncodingError, Error, GeometryError, Point, Result,
    ShapeIdAllocator, ValidationError, XForm,
};

pub use labelkit_materials::{
    CutMode, CutSetting, Material, MaterialCatalog, MaterialEntry, WebMaterialMapping,
};

pub use labelkit_barcode::{
    BarcodeEncoder, BarcodeResult, ShapeGroup, SymbolEncoder, SymbolRequest, Symbology,
    VertexShape,
};

pub use labelkit_project::{
    layout_label, templates, BarcodeElement, BarcodeSpec, LabelElement, LabelField, LabelSpec,
    LightBurnProject, LightBurnWriter, ProjectAssembler, RectElement, TextElement, DEFAULT_FONT,
    MARGIN_MM,
};

/// Compiles a label spec into a LightBurn project document.
///
/// One call per generated file: resolves the material, lays out the
/// elements, encodes any barcode through `symbol_encoder`, and serializes.
/// The returned string is the complete document; delivery is the caller's
/// concern.
pub async fn compile_label(
    spec: &LabelSpec,
    catalog: &MaterialCatalog,
    symbol_encoder: &dyn SymbolEncoder,
) -> Result<String> {
    let assembler = ProjectAssembler::new(catalog, symbol_encoder);
    let project = assembler.assemble(spec).await?;
    LightBurnWriter::new().serialize(&project)
}
