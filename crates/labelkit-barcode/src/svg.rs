//! Vector-description scanning.
//!
//! Symbol generators hand back an SVG string. Only two primitives ever
//! carry barcode geometry: `<path d="...">` and `<rect>`. This module pulls
//! those out with a plain tag scan and reads the declared intrinsic size,
//! preferring the viewBox over the width/height attributes.

/// Extracts an attribute value from a single tag's text.
fn extract_attr_str<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let pattern = format!("{}=\"", attr);
    if let Some(start) = tag.find(&pattern) {
        let val_start = start + pattern.len();
        if let Some(end) = tag[val_start..].find('"') {
            return Some(&tag[val_start..val_start + end]);
        }
    }
    None
}

fn extract_attr_f64(tag: &str, attr: &str) -> Option<f64> {
    extract_attr_str(tag, attr).and_then(|s| s.parse().ok())
}

/// Returns the text of the first `<name ...>` tag at or after `from`,
/// along with the scan position just past it.
fn next_tag<'a>(svg: &'a str, name: &str, from: usize) -> Option<(&'a str, usize)> {
    let open = format!("<{}", name);
    let start = from + svg[from..].find(&open)?;
    let end = start + svg[start..].find('>')?;
    Some((&svg[start..end], end + 1))
}

/// Declared intrinsic size of the vector description.
///
/// The viewBox wins when present (malformed values degrade to 100, matching
/// the generator contract); otherwise the `<svg>` tag's width/height
/// attributes; otherwise 100x100.
pub fn intrinsic_size(svg: &str) -> (f64, f64) {
    if let Some(start) = svg.find("viewBox=\"") {
        let val_start = start + 9;
        if let Some(end) = svg[val_start..].find('"') {
            let parts: Vec<&str> = svg[val_start..val_start + end].split_whitespace().collect();
            let width = parts.get(2).and_then(|s| s.parse().ok()).unwrap_or(100.0);
            let height = parts.get(3).and_then(|s| s.parse().ok()).unwrap_or(100.0);
            return (width, height);
        }
    }

    if let Some((tag, _)) = next_tag(svg, "svg", 0) {
        let width = extract_attr_f64(tag, "width");
        let height = extract_attr_f64(tag, "height");
        if width.is_some() || height.is_some() {
            return (width.unwrap_or(100.0), height.unwrap_or(100.0));
        }
    }

    (100.0, 100.0)
}

/// Extracts every path primitive's data, in document order: literal
/// `d` attributes first, then `<rect>` elements synthesized into closed
/// 4-vertex paths so box-based symbologies translate the same way as
/// path-based ones.
pub fn extract_paths(svg: &str) -> Vec<String> {
    let mut paths = Vec::new();

    let mut search = 0;
    while let Some((tag, next)) = next_tag(svg, "path", search) {
        if let Some(d) = extract_attr_str(tag, "d") {
            paths.push(d.to_string());
        }
        search = next;
    }

    let mut search = 0;
    while let Some((tag, next)) = next_tag(svg, "rect", search) {
        let x = extract_attr_f64(tag, "x").unwrap_or(0.0);
        let y = extract_attr_f64(tag, "y").unwrap_or(0.0);
        if let (Some(width), Some(height)) =
            (extract_attr_f64(tag, "width"), extract_attr_f64(tag, "height"))
        {
            paths.push(format!(
                "M{},{} L{},{} L{},{} L{},{} Z",
                x,
                y,
                x + width,
                y,
                x + width,
                y + height,
                x,
                y + height
            ));
        }
        search = next;
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<svg version="1.1" width="226" height="142" viewBox="0 0 116 60" xmlns="http://www.w3.org/2000/svg">
 <g fill="#000000">
  <path d="M4 0 L4 48" stroke="#000000"/>
  <path d="M8 0 V48 H10 V0 Z"/>
  <rect x="30" y="2" width="6" height="48"/>
 </g>
</svg>"##;

    #[test]
    fn test_intrinsic_size_prefers_viewbox() {
        assert_eq!(intrinsic_size(SAMPLE), (116.0, 60.0));
    }

    #[test]
    fn test_intrinsic_size_falls_back_to_attributes() {
        let svg = r#"<svg width="80" height="40"><path d="M0 0 L1 1"/></svg>"#;
        assert_eq!(intrinsic_size(svg), (80.0, 40.0));
    }

    #[test]
    fn test_intrinsic_size_defaults_to_100() {
        assert_eq!(intrinsic_size("<svg><path d=\"M0 0\"/></svg>"), (100.0, 100.0));
        // A malformed viewBox degrades to the default rather than failing.
        assert_eq!(intrinsic_size("<svg viewBox=\"0 0\"></svg>"), (100.0, 100.0));
    }

    #[test]
    fn test_extract_paths_takes_d_verbatim() {
        let paths = extract_paths(SAMPLE);
        assert_eq!(paths.len(), 3);
        assert_eq!(paths[0], "M4 0 L4 48");
        assert_eq!(paths[1], "M8 0 V48 H10 V0 Z");
    }

    #[test]
    fn test_rects_become_closed_paths() {
        let paths = extract_paths(SAMPLE);
        assert_eq!(paths[2], "M30,2 L36,2 L36,50 L30,50 Z");
    }

    #[test]
    fn test_rect_without_size_is_skipped() {
        let svg = r#"<svg><rect x="1" y="1"/><rect x="0" y="0" width="2" height="3"/></svg>"#;
        let paths = extract_paths(svg);
        assert_eq!(paths, vec!["M0,0 L2,0 L2,3 L0,3 Z".to_string()]);
    }

    #[test]
    fn test_rect_position_defaults_to_origin() {
        let svg = r#"<svg><rect width="4" height="2"/></svg>"#;
        assert_eq!(extract_paths(svg), vec!["M0,0 L4,0 L4,2 L0,2 Z".to_string()]);
    }
}
