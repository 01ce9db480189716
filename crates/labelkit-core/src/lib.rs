//! # LabelKit Core
//!
//! Core types and utilities for LabelKit.
//! Provides the error taxonomy shared by every layer of label generation,
//! the geometry primitives of the LightBurn document model, and the unit
//! conversions used when driving symbol generators.

pub mod error;
pub mod geometry;
pub mod units;

pub use error::{
    ConfigurationError, EncodingError, Error, GeometryError, Result, ValidationError,
};
pub use geometry::{Point, ShapeIdAllocator, XForm};
