//! # LabelKit Materials
//!
//! Laser material catalog for LabelKit: the per-material/per-finish cut
//! parameters and the mapping from storefront material identifiers to
//! catalog entries. The catalog is built and validated once at startup and
//! is immutable afterwards; resolution misses are configuration defects
//! surfaced as typed errors, never silently defaulted.

pub mod catalog;
pub mod model;

pub use catalog::{MaterialCatalog, WebMaterialMapping};
pub use model::{CutMode, CutSetting, Material, MaterialEntry};
