//! Material and cut-setting data model.
//!
//! A `Material` groups the finish variants we run on the fiber laser; each
//! variant owns one validated `CutSetting`. Settings are range-checked when
//! the catalog is built, never at request time.

use serde::{Deserialize, Serialize};

/// How the laser traverses shapes on a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CutMode {
    /// Raster scan fill (engraving).
    Scan,
    /// Vector cut along the outline.
    Cut,
    /// Photo-quality dithered image pass.
    Image,
}

impl CutMode {
    /// The mode name as it appears in the output document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scan => "Scan",
            Self::Cut => "Cut",
            Self::Image => "Image",
        }
    }
}

impl Default for CutMode {
    fn default() -> Self {
        Self::Scan
    }
}

impl std::fmt::Display for CutMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Physical laser parameters applied to one cut layer.
///
/// Power values are percentages (0-100); speed is mm/s; frequency is Hz;
/// interval is the raster line spacing in mm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutSetting {
    pub mode: CutMode,
    pub min_power: Option<f64>,
    pub max_power: f64,
    pub speed: f64,
    pub frequency: Option<u32>,
    pub num_passes: Option<u32>,
    pub interval: Option<f64>,
    pub angle: Option<f64>,
    #[serde(default)]
    pub cross_hatch: bool,
    pub overscan: Option<f64>,
    pub dpi: Option<u32>,
    pub dither_mode: Option<String>,
}

impl CutSetting {
    /// Range-checks the setting. Returns the first violation found.
    ///
    /// Wrong power or speed on a fiber laser scraps material or worse, so
    /// out-of-range values are rejected when the catalog loads.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.max_power) {
            return Err(format!("maxPower {} outside 0-100", self.max_power));
        }
        if let Some(min) = self.min_power {
            if min < 0.0 {
                return Err(format!("minPower {} below 0", min));
            }
            if min > self.max_power {
                return Err(format!(
                    "minPower {} exceeds maxPower {}",
                    min, self.max_power
                ));
            }
        }
        if !(self.speed > 0.0) {
            return Err(format!("speed {} must be positive", self.speed));
        }
        Ok(())
    }
}

/// One finish variant of a material ("Satin Black", "Deep", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialEntry {
    /// Finish description shown to catalog maintainers.
    pub description: String,
    /// Grouping label carried over from the material library.
    pub sub_category: String,
    /// Stock thickness in mm, when the finish is thickness-specific.
    pub thickness: Option<f64>,
    /// The laser parameters for this finish.
    pub settings: CutSetting,
}

/// A stock material with its finish variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub entries: Vec<MaterialEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setting(min: Option<f64>, max: f64, speed: f64) -> CutSetting {
        CutSetting {
            mode: CutMode::Scan,
            min_power: min,
            max_power: max,
            speed,
            frequency: None,
            num_passes: None,
            interval: None,
            angle: None,
            cross_hatch: false,
            overscan: None,
            dpi: None,
            dither_mode: None,
        }
    }

    #[test]
    fn test_validate_accepts_in_range() {
        assert!(setting(Some(35.0), 100.0, 632.0).validate().is_ok());
        assert!(setting(None, 40.0, 1666.67).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_power_violations() {
        assert!(setting(None, 120.0, 500.0).validate().is_err());
        assert!(setting(Some(-1.0), 50.0, 500.0).validate().is_err());
        assert!(setting(Some(60.0), 50.0, 500.0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_speed() {
        assert!(setting(None, 50.0, 0.0).validate().is_err());
        assert!(setting(None, 50.0, -10.0).validate().is_err());
        assert!(setting(None, 50.0, f64::NAN).validate().is_err());
    }

    #[test]
    fn test_cut_setting_serde_round_trip() {
        let original = CutSetting {
            mode: CutMode::Image,
            min_power: Some(23.0),
            max_power: 46.0,
            speed: 240.0,
            frequency: Some(45000),
            num_passes: Some(2),
            interval: Some(0.0806),
            angle: None,
            cross_hatch: false,
            overscan: None,
            dpi: Some(315),
            dither_mode: Some("jarvis".to_string()),
        };
        let json = serde_json::to_string(&original).unwrap();
        let back: CutSetting = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
