//! Shared geometry primitives
//!
//! A point, the 6-value affine transform used by LightBurn shape blocks,
//! and the request-scoped shape-identifier allocator. The allocator is a
//! plain value threaded through one generation; concurrent generations each
//! own their own and can never interleave identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point in millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A 6-value affine transform in LightBurn's `a b c d e f` order.
///
/// Shape placement only ever needs identity-scale translation or uniform
/// scale plus translation, so those are the two constructors offered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XForm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl XForm {
    /// Identity-scale transform translating to (x, y).
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: x,
            f: y,
        }
    }

    /// Uniform scale transform translating to (x, y).
    pub fn scale_translate(scale: f64, x: f64, y: f64) -> Self {
        Self {
            a: scale,
            b: 0.0,
            c: 0.0,
            d: scale,
            e: x,
            f: y,
        }
    }

    /// True when every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Default for XForm {
    fn default() -> Self {
        Self::translate(0.0, 0.0)
    }
}

impl fmt::Display for XForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.a, self.b, self.c, self.d, self.e, self.f
        )
    }
}

/// Request-scoped allocator for shape identifiers.
///
/// Created fresh inside each assembly and passed by mutable reference
/// wherever shapes are built. The final watermark is surfaced on the
/// finished project so callers can observe how many shapes one generation
/// produced.
#[derive(Debug, Default)]
pub struct ShapeIdAllocator {
    next: u32,
}

impl ShapeIdAllocator {
    /// Creates an allocator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next identifier.
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of identifiers handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
