//! Unit conversion utilities
//!
//! Label geometry is specified in millimeters; bwip-style symbol generators
//! compute their device scale in mils (1/1000 inch). This module holds the
//! conversion constants and the integer scale rule used when requesting
//! vector symbol output.

/// Millimeters per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Mils (1/1000 inch) per millimeter.
pub const MILS_PER_MM: f64 = 39.37;

/// Convert millimeters to mils.
pub fn mm_to_mils(mm: f64) -> f64 {
    mm * MILS_PER_MM
}

/// Convert mils to millimeters.
pub fn mils_to_mm(mils: f64) -> f64 {
    mils / MILS_PER_MM
}

/// Integer device scale for a symbol rendered at the given target width.
///
/// The generator consumes a unitless integer scale; one scale unit covers
/// 100 mils of target width. The result is rounded and clamped to at
/// least 1 so a tiny target still produces a drawable symbol.
pub fn device_scale_for_width(target_width_mm: f64) -> u32 {
    let scale = target_width_mm * MILS_PER_MM / 100.0;
    scale.round().max(1.0) as u32
}
