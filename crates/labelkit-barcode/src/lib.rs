//! # LabelKit Barcode
//!
//! Barcode handling for LabelKit: payload validation per symbology, the
//! opaque symbol-generation capability boundary, and translation of the
//! returned vector description into LightBurn vertex-list geometry.
//!
//! ## Pipeline
//!
//! ```text
//! Symbology::validate (payload rules, user-facing messages)
//!   └── BarcodeEncoder::encode (device scale, capability call, SVG scan)
//!         └── translate::build_group (vertex lists + aspect-preserving fit)
//! ```
//!
//! The symbol generator itself is supplied by the embedding application via
//! [`SymbolEncoder`]; the `testing` module ships deterministic stand-ins.

pub mod encoder;
pub mod svg;
pub mod symbology;
pub mod testing;
pub mod translate;

pub use encoder::{BarcodeEncoder, BarcodeResult, SymbolEncoder, SymbolRequest};
pub use symbology::Symbology;
pub use translate::{build_group, path_to_vertices, ShapeGroup, VertexShape};
