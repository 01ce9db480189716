//! Error handling for LabelKit
//!
//! Provides error types for all layers of label generation:
//! - Configuration errors (material catalog / web mapping defects)
//! - Validation errors (barcode values rejected by their symbology)
//! - Encoding errors (symbol-generation capability failures)
//! - Geometry errors (defective or unsupported vector geometry)
//!
//! All error types use `thiserror` for ergonomic error handling. A failed
//! generation aborts in full; nothing in this crate retries or substitutes
//! defaults.

use thiserror::Error;

/// Configuration error type
///
/// Represents catalog-maintenance defects: a web material identifier with no
/// mapping, or a mapping that points at a material or finish the catalog does
/// not contain. These must never be papered over with default cut parameters.
#[derive(Error, Debug, Clone)]
pub enum ConfigurationError {
    /// No mapping exists for a web material identifier
    #[error("No material mapping for web material: {web_material_id}")]
    UnmappedWebMaterial {
        /// The identifier the calling layer sent.
        web_material_id: String,
    },

    /// The named material is not in the catalog
    #[error("Material not found: {material}")]
    MaterialNotFound {
        /// The material name that failed to resolve.
        material: String,
    },

    /// The named finish entry is not in the material
    #[error("Material {material} has no entry named: {entry}")]
    EntryNotFound {
        /// The material that was searched.
        material: String,
        /// The entry description that failed to resolve.
        entry: String,
    },

    /// A material was registered with no entries at all
    #[error("Material {material} has no entries")]
    EmptyMaterial {
        /// The material with the empty entry list.
        material: String,
    },

    /// A cut setting failed its load-time range checks
    #[error("Invalid cut setting for {material}/{entry}: {reason}")]
    InvalidCutSetting {
        /// The owning material name.
        material: String,
        /// The owning entry description.
        entry: String,
        /// Why the setting is out of range.
        reason: String,
    },
}

/// Validation error type
///
/// Represents a barcode value that fails its symbology's rules. These are
/// expected, user-triggerable errors; every variant carries a
/// symbology-specific message suitable for direct display.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    /// The value is empty or missing
    #[error("{symbology} value cannot be empty")]
    EmptyValue {
        /// Display name of the symbology.
        symbology: String,
    },

    /// The value exceeds the symbology's length limit
    #[error("{symbology} value too long (max {max_len} characters)")]
    TooLong {
        /// Display name of the symbology.
        symbology: String,
        /// Maximum number of characters the symbology accepts.
        max_len: usize,
    },

    /// The value contains characters the symbology cannot encode
    #[error("{symbology} only supports {allowed}")]
    InvalidCharacters {
        /// Display name of the symbology.
        symbology: String,
        /// Human-readable description of the permitted character set.
        allowed: String,
    },

    /// The value is not the exact digit count the symbology requires
    #[error("{symbology} requires exactly {min_digits}-{max_digits} digits")]
    DigitCount {
        /// Display name of the symbology.
        symbology: String,
        /// Minimum digit count (without check digit).
        min_digits: usize,
        /// Maximum digit count (with check digit).
        max_digits: usize,
    },
}

/// Encoding error type
///
/// Represents a failure of the underlying symbol-generation capability.
/// The wrapped cause is preserved; the failure is not retried here.
#[derive(Error, Debug, Clone)]
pub enum EncodingError {
    /// The symbol generator reported an error
    #[error("Failed to generate {symbology} barcode: {reason}")]
    SymbolGeneration {
        /// Display name of the symbology.
        symbology: String,
        /// The underlying cause as reported by the capability.
        reason: String,
    },

    /// The symbol generator returned no usable output
    #[error("Symbol generator returned empty output for {symbology}")]
    EmptyOutput {
        /// Display name of the symbology.
        symbology: String,
    },
}

/// Geometry error type
///
/// Represents defective vector geometry: non-finite coordinates, a barcode
/// element that reached serialization without encoded geometry, or a vector
/// path using commands the vertex-list destination cannot express.
#[derive(Error, Debug, Clone)]
pub enum GeometryError {
    /// A path command has no vertex-list translation (curves)
    #[error("Unsupported path command '{command}'")]
    UnsupportedPathCommand {
        /// The offending command letter.
        command: char,
    },

    /// The path data could not be scanned into commands and arguments
    #[error("Malformed path data: {reason}")]
    MalformedPath {
        /// Why the scan failed.
        reason: String,
    },

    /// The symbol's intrinsic size cannot be fitted to a target
    #[error("Symbol intrinsic size {width}x{height} cannot be fitted")]
    DegenerateSymbolSize {
        /// Declared intrinsic width.
        width: f64,
        /// Declared intrinsic height.
        height: f64,
    },

    /// A shape carries a non-finite coordinate or size
    #[error("Shape {index} ({kind}) has non-finite geometry")]
    NonFinite {
        /// Position of the shape in the project's element order.
        index: usize,
        /// The shape kind ("Text", "Rect", "Barcode").
        kind: &'static str,
    },

    /// A barcode element reached the writer without encoded geometry
    #[error("Barcode '{value}' has no encoded geometry")]
    MissingBarcodeGeometry {
        /// The barcode value, for the internal alert.
        value: String,
    },
}

/// Main error type for LabelKit
///
/// A unified error type that can represent any failure of a label
/// generation. This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Validation error
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Encoding error
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error should be shown to the end user.
    ///
    /// Validation errors carry corrective messages for the person who typed
    /// the barcode value; everything else is a deployment or caller defect
    /// that belongs in an internal alert.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a configuration error
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is an encoding error
    pub fn is_encoding_error(&self) -> bool {
        matches!(self, Error::Encoding(_))
    }

    /// Check if this is a geometry error
    pub fn is_geometry_error(&self) -> bool {
        matches!(self, Error::Geometry(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
