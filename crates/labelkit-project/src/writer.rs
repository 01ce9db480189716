//! LightBurn document writer.
//!
//! Emits the `.lbrn2` project XML: header, notes, one cut-parameter block
//! per layer actually used, then every shape in its original element order.
//! The geometry audit runs before a single byte is written, so a defective
//! element can never leave a truncated document behind.

use crate::model::{BarcodeElement, LabelElement, LightBurnProject, RectElement, TextElement};
use labelkit_core::{GeometryError, Result, XForm};
use labelkit_materials::{CutMode, CutSetting};
use std::collections::BTreeSet;

/// Stock label font: Arial at bold weight, size driven by the shape's `H`.
pub const DEFAULT_FONT: &str = "Arial,-1,100,5,75,0,0,0,0,0";

/// Layer palette cycled by layer index: black, red, green, yellow, blue,
/// magenta, cyan.
pub const LAYER_COLORS: [u32; 7] = [0, 255, 65280, 16776960, 16711680, 16711935, 65535];

/// Escape the five XML special characters.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Serializes assembled projects to LightBurn project documents.
#[derive(Debug, Default)]
pub struct LightBurnWriter;

impl LightBurnWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serializes the project, or fails without emitting anything.
    pub fn serialize(&self, project: &LightBurnProject) -> Result<String> {
        audit_geometry(project)?;

        let mut xml = String::new();
        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str(
            "<LightBurnProject AppVersion=\"1.7.00\" FormatVersion=\"1\" \
             MaterialHeight=\"0\" MirrorX=\"False\" MirrorY=\"False\">\n",
        );

        xml.push_str(&format!(
            "    <Notes ShowOnLoad=\"0\" Notes=\"Generated by LabelKit&#10;Material: {}&#10;Project: {}\"/>\n",
            escape_xml(&project.material_id),
            escape_xml(&project.name)
        ));

        for layer in used_layers(project) {
            write_cut_setting(&mut xml, &project.cut_setting, layer);
        }

        for element in &project.elements {
            match element {
                LabelElement::Text(text) => write_text(&mut xml, text),
                LabelElement::Rect(rect) => write_rect(&mut xml, rect),
                LabelElement::Barcode(barcode) => write_barcode(&mut xml, barcode),
            }
        }

        xml.push_str("</LightBurnProject>\n");
        Ok(xml)
    }
}

/// Distinct layer indices referenced by the project's elements, ascending.
fn used_layers(project: &LightBurnProject) -> BTreeSet<u32> {
    project.elements.iter().map(|e| e.layer_index()).collect()
}

/// Rejects non-finite or missing geometry before any output exists.
fn audit_geometry(project: &LightBurnProject) -> Result<()> {
    for (index, element) in project.elements.iter().enumerate() {
        let finite = |values: &[f64]| values.iter().all(|v| v.is_finite());
        let ok = match element {
            LabelElement::Text(t) => finite(&[t.x, t.y, t.height]),
            LabelElement::Rect(r) => {
                finite(&[r.x, r.y, r.width, r.height, r.corner_radius.unwrap_or(0.0)])
            }
            LabelElement::Barcode(b) => {
                let group = b.geometry.as_ref().ok_or_else(|| {
                    GeometryError::MissingBarcodeGeometry {
                        value: b.value.clone(),
                    }
                })?;
                finite(&[b.x, b.y, b.width, b.height])
                    && group.xform().is_finite()
                    && group
                        .children
                        .iter()
                        .all(|child| child.vertices.iter().all(|v| v.is_finite()))
            }
        };
        if !ok {
            return Err(GeometryError::NonFinite {
                index,
                kind: element.kind(),
            }
            .into());
        }
    }
    Ok(())
}

fn write_cut_setting(xml: &mut String, settings: &CutSetting, index: u32) {
    let color = LAYER_COLORS[(index as usize) % LAYER_COLORS.len()];

    xml.push_str(&format!("    <CutSetting type=\"{}\">\n", settings.mode.as_str()));
    xml.push_str(&format!("        <index Value=\"{}\"/>\n", index));
    xml.push_str(&format!("        <name Value=\"C0{}\"/>\n", index));
    xml.push_str(&format!("        <color Value=\"{}\"/>\n", color));
    xml.push_str("        <LinkPath Value=\"\"/>\n");

    if let Some(min_power) = settings.min_power {
        xml.push_str(&format!("        <minPower Value=\"{}\"/>\n", min_power));
    }
    xml.push_str(&format!("        <maxPower Value=\"{}\"/>\n", settings.max_power));
    xml.push_str("        <maxPower2 Value=\"20\"/>\n");
    xml.push_str(&format!("        <speed Value=\"{}\"/>\n", settings.speed));

    if let Some(frequency) = settings.frequency {
        xml.push_str(&format!("        <frequency Value=\"{}\"/>\n", frequency));
    }

    xml.push_str("        <PPI Value=\"0\"/>\n");
    xml.push_str("        <JumpSpeed Value=\"4000\"/>\n");

    if let Some(num_passes) = settings.num_passes {
        if num_passes > 1 {
            xml.push_str(&format!("        <numPasses Value=\"{}\"/>\n", num_passes));
        }
    }

    xml.push_str("        <perfLen Value=\"0.01\"/>\n");
    xml.push_str("        <perfSkip Value=\"0.01\"/>\n");
    xml.push_str("        <dotTime Value=\"1\"/>\n");

    if settings.mode == CutMode::Scan {
        xml.push_str("        <scanOpt Value=\"byGroup\"/>\n");
    }

    if settings.cross_hatch {
        xml.push_str("        <crossHatch Value=\"1\"/>\n");
    }

    xml.push_str(&format!(
        "        <overscan Value=\"{}\"/>\n",
        settings.overscan.unwrap_or(0.0)
    ));

    if let Some(interval) = settings.interval {
        xml.push_str(&format!("        <interval Value=\"{}\"/>\n", interval));
    }

    if let Some(angle) = settings.angle {
        xml.push_str(&format!("        <angle Value=\"{}\"/>\n", angle));
    }

    xml.push_str("        <priority Value=\"0\"/>\n");
    xml.push_str("        <tabCount Value=\"1\"/>\n");
    xml.push_str("        <tabCountMax Value=\"1\"/>\n");

    if settings.mode == CutMode::Image {
        if let Some(dpi) = settings.dpi {
            xml.push_str("        <cellsPerInch Value=\"200\"/>\n");
            xml.push_str(&format!(
                "        <ditherMode Value=\"{}\"/>\n",
                settings.dither_mode.as_deref().unwrap_or("jarvis")
            ));
            xml.push_str(&format!("        <dpi Value=\"{}\"/>\n", dpi));
        }
    }

    xml.push_str("    </CutSetting>\n");
}

fn write_text(xml: &mut String, element: &TextElement) {
    let font = element.font.as_deref().unwrap_or(DEFAULT_FONT);

    xml.push_str(&format!(
        "    <Shape Type=\"Text\" CutIndex=\"{}\" Font=\"{}\" Str=\"{}\" H=\"{}\" LS=\"0\" LnS=\"0\" Ah=\"1\" Av=\"1\" Bold=\"1\">\n",
        element.layer_index,
        escape_xml(font),
        escape_xml(&element.text),
        element.height
    ));
    xml.push_str(&format!(
        "        <XForm>{}</XForm>\n",
        XForm::translate(element.x, element.y)
    ));
    xml.push_str("    </Shape>\n");
}

fn write_rect(xml: &mut String, element: &RectElement) {
    xml.push_str(&format!(
        "    <Shape Type=\"Rect\" CutIndex=\"{}\" W=\"{}\" H=\"{}\" ",
        element.layer_index, element.width, element.height
    ));
    if let Some(corner_radius) = element.corner_radius {
        xml.push_str(&format!("Cr=\"{}\" ", corner_radius));
    }
    xml.push_str(">\n");
    xml.push_str(&format!(
        "        <XForm>{}</XForm>\n",
        XForm::translate(element.x, element.y)
    ));
    xml.push_str("    </Shape>\n");
}

fn write_barcode(xml: &mut String, element: &BarcodeElement) {
    // The audit guarantees geometry is present by the time we write.
    let Some(group) = element.geometry.as_ref() else {
        return;
    };

    xml.push_str(&format!(
        "    <Shape Type=\"Group\" CutIndex=\"{}\">\n",
        element.layer_index
    ));
    xml.push_str(&format!("        <XForm>{}</XForm>\n", group.xform()));
    xml.push_str("        <Children>\n");

    for child in &group.children {
        xml.push_str(&format!(
            "            <Shape Type=\"Path\" CutIndex=\"{}\">\n",
            element.layer_index
        ));
        xml.push_str("                <XForm>1 0 0 1 0 0</XForm>\n");
        xml.push_str("                <VertList>");
        for vertex in &child.vertices {
            xml.push_str(&format!("V{} {}", vertex.x, vertex.y));
        }
        xml.push_str("</VertList>\n");
        xml.push_str("            </Shape>\n");
    }

    xml.push_str("        </Children>\n");
    xml.push_str("    </Shape>\n");
}
