//! Path-to-vertex translation.
//!
//! LightBurn path shapes are vertex lists; SVG path data is a command
//! stream. Translation is a tokenizer pass (command letters, numbers,
//! separators) followed by a single left-to-right scan that tracks the pen
//! position. Only straight-line commands have a vertex-list meaning:
//! curve commands are rejected with a typed error instead of silently
//! dropping geometry, since a dropped segment would corrupt a scannable
//! symbol.

use crate::encoder::BarcodeResult;
use labelkit_core::{Error, GeometryError, Point, Result, ShapeIdAllocator, XForm};
use serde::{Deserialize, Serialize};

/// One token of SVG path data.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PathToken {
    Command(char),
    Number(f64),
}

/// Scans path data into command and number tokens.
///
/// Separators are whitespace and commas; a sign character starts a new
/// number unless it follows an exponent marker.
fn tokenize(data: &str) -> Result<Vec<PathToken>> {
    fn flush(current: &mut String, tokens: &mut Vec<PathToken>) -> Result<()> {
        if current.is_empty() {
            return Ok(());
        }
        let number: f64 = current.parse().map_err(|_| {
            Error::from(GeometryError::MalformedPath {
                reason: format!("invalid number '{}'", current),
            })
        })?;
        tokens.push(PathToken::Number(number));
        current.clear();
        Ok(())
    }

    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in data.chars() {
        match ch {
            // An exponent marker mid-number belongs to the number.
            'e' | 'E' if !current.is_empty() => current.push(ch),
            c if c.is_ascii_alphabetic() => {
                flush(&mut current, &mut tokens)?;
                tokens.push(PathToken::Command(c));
            }
            ' ' | ',' | '\n' | '\r' | '\t' => {
                flush(&mut current, &mut tokens)?;
            }
            '-' | '+' => {
                // "10-5" packs two numbers; "1e-3" does not.
                if !current.is_empty() && !current.ends_with('e') && !current.ends_with('E') {
                    flush(&mut current, &mut tokens)?;
                }
                current.push(ch);
            }
            _ => current.push(ch),
        }
    }
    flush(&mut current, &mut tokens)?;

    Ok(tokens)
}

/// Translates SVG path data into an ordered vertex list.
///
/// `M`/`L` emit a vertex per coordinate pair, `H`/`V` move one axis, and
/// `Z` emits nothing (shapes close implicitly in the destination format).
/// Lowercase command letters are folded to their absolute forms, matching
/// the generator contract. Curve commands are a `GeometryError`.
pub fn path_to_vertices(data: &str) -> Result<Vec<Point>> {
    let tokens = tokenize(data)?;
    let mut vertices = Vec::new();
    let mut current = Point::new(0.0, 0.0);
    let mut i = 0;

    // Consumes number arguments starting at `i`; returns None when the next
    // token is a command.
    let number_at = |tokens: &[PathToken], i: usize| -> Option<f64> {
        match tokens.get(i) {
            Some(PathToken::Number(n)) => Some(*n),
            _ => None,
        }
    };

    while i < tokens.len() {
        let command = match tokens[i] {
            PathToken::Command(c) => c,
            PathToken::Number(_) => {
                return Err(GeometryError::MalformedPath {
                    reason: "number where a command was expected".to_string(),
                }
                .into());
            }
        };
        i += 1;

        match command.to_ascii_uppercase() {
            'M' | 'L' => {
                let mut pairs = 0;
                while let Some(x) = number_at(&tokens, i) {
                    let y = number_at(&tokens, i + 1).ok_or_else(|| {
                        Error::from(GeometryError::MalformedPath {
                            reason: format!("truncated coordinate pair after '{}'", command),
                        })
                    })?;
                    current = Point::new(x, y);
                    vertices.push(current);
                    i += 2;
                    pairs += 1;
                }
                if pairs == 0 {
                    return Err(GeometryError::MalformedPath {
                        reason: format!("command '{}' has no coordinates", command),
                    }
                    .into());
                }
            }
            'H' => {
                let mut seen = 0;
                while let Some(x) = number_at(&tokens, i) {
                    current.x = x;
                    vertices.push(current);
                    i += 1;
                    seen += 1;
                }
                if seen == 0 {
                    return Err(GeometryError::MalformedPath {
                        reason: format!("command '{}' has no coordinates", command),
                    }
                    .into());
                }
            }
            'V' => {
                let mut seen = 0;
                while let Some(y) = number_at(&tokens, i) {
                    current.y = y;
                    vertices.push(current);
                    i += 1;
                    seen += 1;
                }
                if seen == 0 {
                    return Err(GeometryError::MalformedPath {
                        reason: format!("command '{}' has no coordinates", command),
                    }
                    .into());
                }
            }
            'Z' => {}
            'C' | 'S' | 'Q' | 'T' | 'A' => {
                return Err(GeometryError::UnsupportedPathCommand {
                    command: command.to_ascii_uppercase(),
                }
                .into());
            }
            _ => {
                return Err(GeometryError::MalformedPath {
                    reason: format!("unknown command '{}'", command),
                }
                .into());
            }
        }
    }

    Ok(vertices)
}

/// One translated path shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexShape {
    pub id: u32,
    pub vertices: Vec<Point>,
}

/// A translated symbol: child path shapes under one fit-and-place
/// transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeGroup {
    pub id: u32,
    /// Uniform scale fitting the intrinsic size into the target footprint.
    pub scale: f64,
    /// Placement of the group origin, mm.
    pub x: f64,
    pub y: f64,
    pub children: Vec<VertexShape>,
}

impl ShapeGroup {
    /// The group's affine transform: fit scale plus placement.
    pub fn xform(&self) -> XForm {
        XForm::scale_translate(self.scale, self.x, self.y)
    }
}

/// Translates an encoded symbol into a placed group.
///
/// The fit scale is `min(target_w / intrinsic_w, target_h / intrinsic_h)`,
/// preserving aspect ratio without overflowing either axis. Child shape ids
/// come from the request-scoped allocator.
pub fn build_group(
    result: &BarcodeResult,
    target_width: f64,
    target_height: f64,
    x: f64,
    y: f64,
    ids: &mut ShapeIdAllocator,
) -> Result<ShapeGroup> {
    if !(result.width > 0.0) || !(result.height > 0.0) {
        return Err(GeometryError::DegenerateSymbolSize {
            width: result.width,
            height: result.height,
        }
        .into());
    }

    let scale = (target_width / result.width).min(target_height / result.height);
    let id = ids.next_id();

    let mut children = Vec::with_capacity(result.paths.len());
    for data in &result.paths {
        children.push(VertexShape {
            id: ids.next_id(),
            vertices: path_to_vertices(data)?,
        });
    }

    Ok(ShapeGroup {
        id,
        scale,
        x,
        y,
        children,
    })
}
