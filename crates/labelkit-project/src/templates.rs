//! Label templates.
//!
//! Pre-built layouts for the labels the shop actually sells. The
//! field-driven templates produce a `LabelSpec` for the standard top-down
//! layout; the tag templates position their text directly and are fed to
//! `ProjectAssembler::assemble_elements` together with a material id.

use crate::model::{BarcodeSpec, LabelElement, LabelField, LabelSpec, TextElement};
use labelkit_barcode::Symbology;

/// A template that positions its own elements instead of using the
/// field layout.
#[derive(Debug, Clone)]
pub struct ElementLayout {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub elements: Vec<LabelElement>,
}

fn field_spec(name: &str, fields: Vec<LabelField>, material_id: &str, width: f64, height: f64) -> LabelSpec {
    LabelSpec {
        name: name.to_string(),
        material_id: material_id.to_string(),
        width,
        height,
        fields,
        barcode: None,
        logo: None,
        quantity: 1,
        cut_setting_override: None,
    }
}

/// Equipment nameplate: stacked field values.
pub fn equipment_nameplate(
    fields: Vec<LabelField>,
    material_id: &str,
    width: f64,
    height: f64,
) -> LabelSpec {
    field_spec("equipment-nameplate", fields, material_id, width, height)
}

/// Asset tag: stacked fields over a scannable barcode.
pub fn asset_tag(
    fields: Vec<LabelField>,
    material_id: &str,
    width: f64,
    height: f64,
    barcode_value: &str,
    symbology: Symbology,
) -> LabelSpec {
    let mut spec = field_spec("asset-tag", fields, material_id, width, height);
    spec.barcode = Some(BarcodeSpec {
        symbology,
        value: barcode_value.to_string(),
    });
    spec
}

/// Control panel label: stacked field values.
pub fn control_panel_label(
    fields: Vec<LabelField>,
    material_id: &str,
    width: f64,
    height: f64,
) -> LabelSpec {
    field_spec("control-panel-label", fields, material_id, width, height)
}

fn centered_text(text: &str, x: f64, y: f64, height: f64) -> LabelElement {
    LabelElement::Text(TextElement {
        text: text.to_string(),
        x,
        y,
        height,
        font: None,
        layer_index: 0,
    })
}

/// Round valve tag: service line over the valve number.
pub fn valve_tag(valve_number: &str, service: &str, diameter: f64) -> ElementLayout {
    ElementLayout {
        name: "valve-tag".to_string(),
        width: diameter,
        height: diameter,
        elements: vec![
            centered_text(service, diameter / 2.0, diameter * 0.65, diameter * 0.15),
            centered_text(valve_number, diameter / 2.0, diameter * 0.35, diameter * 0.25),
        ],
    }
}

/// Safety sign: DANGER/WARNING/CAUTION word over the message line.
pub fn safety_sign(signal_word: &str, message: &str, width: f64, height: f64) -> ElementLayout {
    ElementLayout {
        name: "safety-sign".to_string(),
        width,
        height,
        elements: vec![
            centered_text(
                &signal_word.to_uppercase(),
                width / 2.0,
                height * 0.75,
                height * 0.2,
            ),
            centered_text(message, width / 2.0, height * 0.4, height * 0.1),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_tag_carries_barcode() {
        let spec = asset_tag(
            vec![LabelField::new("assetId", "A-1")],
            "anodized-aluminum-black",
            50.0,
            25.0,
            "ASSET-00042",
            Symbology::Code128,
        );
        assert_eq!(spec.name, "asset-tag");
        let barcode = spec.barcode.unwrap();
        assert_eq!(barcode.symbology, Symbology::Code128);
        assert_eq!(barcode.value, "ASSET-00042");
    }

    #[test]
    fn test_valve_tag_positions_scale_with_diameter() {
        let layout = valve_tag("V-101", "COOLING WATER", 40.0);
        assert_eq!(layout.width, 40.0);
        assert_eq!(layout.height, 40.0);
        match &layout.elements[1] {
            LabelElement::Text(t) => {
                assert_eq!(t.text, "V-101");
                assert_eq!(t.y, 14.0);
                assert_eq!(t.height, 10.0);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_safety_sign_uppercases_signal_word() {
        let layout = safety_sign("danger", "High voltage inside", 100.0, 60.0);
        match &layout.elements[0] {
            LabelElement::Text(t) => {
                assert_eq!(t.text, "DANGER");
                assert_eq!(t.height, 12.0);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }
}
