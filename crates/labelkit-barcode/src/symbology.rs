//! Barcode symbologies and payload validation.
//!
//! Each symbology validates its payload *before* the symbol generator runs,
//! so users get a corrective, symbology-specific message instead of an
//! opaque generator failure.

use labelkit_core::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported barcode symbologies.
///
/// Serialized ids match the storefront's barcode type strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbology {
    Code128,
    Code39,
    Qr,
    DataMatrix,
    Ean13,
    UpcA,
}

impl Symbology {
    /// The bwip-style encoder id for this symbology.
    pub fn bcid(&self) -> &'static str {
        match self {
            Self::Code128 => "code128",
            Self::Code39 => "code39",
            Self::Qr => "qrcode",
            Self::DataMatrix => "datamatrix",
            Self::Ean13 => "ean13",
            Self::UpcA => "upca",
        }
    }

    /// True for 2D module-grid symbologies, which size themselves and take
    /// no bar-height option.
    pub fn is_matrix(&self) -> bool {
        matches!(self, Self::Qr | Self::DataMatrix)
    }

    /// Validates a payload against this symbology's rules.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let length = value.chars().count();
        match self {
            // Code 128 encodes any ASCII; length is the only limit.
            Self::Code128 => {
                if length == 0 {
                    return Err(self.empty());
                }
                if length > 48 {
                    return Err(ValidationError::TooLong {
                        symbology: self.to_string(),
                        max_len: 48,
                    });
                }
                Ok(())
            }
            Self::Code39 => {
                if length == 0 {
                    return Err(self.empty());
                }
                let re = Regex::new(r"^[A-Za-z0-9\-. $/+%*]+$").expect("invalid code 39 regex");
                if !re.is_match(value) {
                    return Err(ValidationError::InvalidCharacters {
                        symbology: self.to_string(),
                        allowed: "A-Z, 0-9, and -. $/+%".to_string(),
                    });
                }
                Ok(())
            }
            Self::Qr => {
                if length == 0 {
                    return Err(self.empty());
                }
                // Longer payloads encode but stop scanning reliably at
                // label engraving sizes.
                if length > 2000 {
                    return Err(ValidationError::TooLong {
                        symbology: self.to_string(),
                        max_len: 2000,
                    });
                }
                Ok(())
            }
            Self::DataMatrix => {
                if length == 0 {
                    return Err(self.empty());
                }
                Ok(())
            }
            Self::Ean13 => {
                let re = Regex::new(r"^\d{12,13}$").expect("invalid ean-13 regex");
                if !re.is_match(value) {
                    return Err(ValidationError::DigitCount {
                        symbology: self.to_string(),
                        min_digits: 12,
                        max_digits: 13,
                    });
                }
                Ok(())
            }
            Self::UpcA => {
                let re = Regex::new(r"^\d{11,12}$").expect("invalid upc-a regex");
                if !re.is_match(value) {
                    return Err(ValidationError::DigitCount {
                        symbology: self.to_string(),
                        min_digits: 11,
                        max_digits: 12,
                    });
                }
                Ok(())
            }
        }
    }

    fn empty(&self) -> ValidationError {
        ValidationError::EmptyValue {
            symbology: self.to_string(),
        }
    }
}

impl std::fmt::Display for Symbology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code128 => write!(f, "Code 128"),
            Self::Code39 => write!(f, "Code 39"),
            Self::Qr => write!(f, "QR"),
            Self::DataMatrix => write!(f, "DataMatrix"),
            Self::Ean13 => write!(f, "EAN-13"),
            Self::UpcA => write!(f, "UPC-A"),
        }
    }
}

impl FromStr for Symbology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "code128" => Ok(Self::Code128),
            "code39" => Ok(Self::Code39),
            "qr" | "qrcode" => Ok(Self::Qr),
            "datamatrix" => Ok(Self::DataMatrix),
            "ean13" => Ok(Self::Ean13),
            "upca" => Ok(Self::UpcA),
            _ => Err(format!("Unknown symbology: {}", s)),
        }
    }
}
