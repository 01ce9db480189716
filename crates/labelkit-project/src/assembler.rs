//! Project assembly.
//!
//! Resolves cut parameters, lays out text fields and the optional barcode
//! on the physical canvas, and encodes barcode geometry before any
//! serialization can happen. One failure of any step aborts the whole
//! assembly; retry policy belongs to the caller.

use crate::model::{
    BarcodeElement, LabelElement, LabelSpec, LightBurnProject, TextElement,
};
use labelkit_barcode::{translate, BarcodeEncoder, SymbolEncoder};
use labelkit_core::{ConfigurationError, Error, Result, ShapeIdAllocator};
use labelkit_materials::{CutSetting, MaterialCatalog};
use tracing::{debug, info};
use uuid::Uuid;

/// Layout margin on every edge, mm.
pub const MARGIN_MM: f64 = 2.0;

/// Labels taller than this get the larger text size.
const TALL_LABEL_THRESHOLD_MM: f64 = 30.0;
const TALL_LINE_HEIGHT_MM: f64 = 5.0;
const SHORT_LINE_HEIGHT_MM: f64 = 3.0;
/// Baseline advance between successive fields, in line heights.
const LINE_ADVANCE_FACTOR: f64 = 1.5;

const BARCODE_WIDTH_FRACTION: f64 = 0.6;
const BARCODE_HEIGHT_FRACTION: f64 = 0.25;

/// Lays out a spec's fields and barcode as label elements.
///
/// Fields are placed top-down from `height - margin`, skipping blank
/// values entirely; the barcode sits bottom-center at 60% x 25% of the
/// label. Pure; barcode geometry is attached later by the assembler.
pub fn layout_label(spec: &LabelSpec) -> Vec<LabelElement> {
    let mut elements = Vec::new();

    let line_height = if spec.height > TALL_LABEL_THRESHOLD_MM {
        TALL_LINE_HEIGHT_MM
    } else {
        SHORT_LINE_HEIGHT_MM
    };
    let mut current_y = spec.height - MARGIN_MM - line_height;

    for field in &spec.fields {
        if field.value.trim().is_empty() {
            continue;
        }
        elements.push(LabelElement::Text(TextElement {
            text: field.value.clone(),
            x: MARGIN_MM,
            y: current_y,
            height: line_height,
            font: None,
            layer_index: 0,
        }));
        current_y -= line_height * LINE_ADVANCE_FACTOR;
    }

    if let Some(barcode) = &spec.barcode {
        let width = spec.width * BARCODE_WIDTH_FRACTION;
        let height = spec.height * BARCODE_HEIGHT_FRACTION;
        elements.push(LabelElement::Barcode(BarcodeElement {
            symbology: barcode.symbology,
            value: barcode.value.clone(),
            x: (spec.width - width) / 2.0,
            y: MARGIN_MM,
            width,
            height,
            layer_index: 0,
            geometry: None,
        }));
    }

    elements
}

/// Assembles label specs into serializable projects.
pub struct ProjectAssembler<'a> {
    catalog: &'a MaterialCatalog,
    encoder: BarcodeEncoder<'a>,
}

impl<'a> ProjectAssembler<'a> {
    /// Creates an assembler over the material catalog and the symbol
    /// generation capability.
    pub fn new(catalog: &'a MaterialCatalog, symbol_encoder: &'a dyn SymbolEncoder) -> Self {
        Self {
            catalog,
            encoder: BarcodeEncoder::new(symbol_encoder),
        }
    }

    /// Assembles a full project from a label spec.
    pub async fn assemble(&self, spec: &LabelSpec) -> Result<LightBurnProject> {
        let cut_setting = self.resolve_cut_setting(spec)?;
        let elements = layout_label(spec);
        self.finish(
            spec.name.clone(),
            spec.material_id.clone(),
            spec.width,
            spec.height,
            cut_setting,
            elements,
        )
        .await
    }

    /// Assembles caller-built elements (template layouts) against a
    /// storefront material.
    pub async fn assemble_elements(
        &self,
        name: &str,
        material_id: &str,
        width: f64,
        height: f64,
        elements: Vec<LabelElement>,
    ) -> Result<LightBurnProject> {
        let cut_setting = self.catalog.resolve_for_web_material(material_id)?.clone();
        self.finish(
            name.to_string(),
            material_id.to_string(),
            width,
            height,
            cut_setting,
            elements,
        )
        .await
    }

    /// Resolves the active cut setting: explicit override first, then the
    /// material catalog. A miss aborts the assembly; cut parameters are
    /// never guessed.
    pub fn resolve_cut_setting(&self, spec: &LabelSpec) -> Result<CutSetting> {
        match &spec.cut_setting_override {
            Some(setting) => {
                setting.validate().map_err(|reason| {
                    Error::from(ConfigurationError::InvalidCutSetting {
                        material: spec.material_id.clone(),
                        entry: "override".to_string(),
                        reason,
                    })
                })?;
                Ok(setting.clone())
            }
            None => self
                .catalog
                .resolve_for_web_material(&spec.material_id)
                .cloned(),
        }
    }

    async fn finish(
        &self,
        name: String,
        material_id: String,
        width: f64,
        height: f64,
        cut_setting: CutSetting,
        mut elements: Vec<LabelElement>,
    ) -> Result<LightBurnProject> {
        let generation = Uuid::new_v4();
        debug!(%generation, name = %name, material_id = %material_id, "assembling label project");

        // Shape ids are scoped to this generation; concurrent assemblies
        // each thread their own allocator.
        let mut ids = ShapeIdAllocator::new();

        for element in &mut elements {
            if let LabelElement::Barcode(barcode) = element {
                if barcode.geometry.is_some() {
                    continue;
                }
                let encoded = self
                    .encoder
                    .encode(
                        barcode.symbology,
                        &barcode.value,
                        barcode.width,
                        barcode.height,
                        false,
                    )
                    .await?;
                let group = translate::build_group(
                    &encoded,
                    barcode.width,
                    barcode.height,
                    barcode.x,
                    barcode.y,
                    &mut ids,
                )?;
                debug!(
                    %generation,
                    symbology = %barcode.symbology,
                    children = group.children.len(),
                    "barcode geometry attached"
                );
                barcode.geometry = Some(group);
            }
        }

        info!(
            %generation,
            elements = elements.len(),
            shapes = ids.allocated(),
            "label project assembled"
        );

        Ok(LightBurnProject {
            name,
            width,
            height,
            material_id,
            elements,
            cut_setting,
            shapes_allocated: ids.allocated(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BarcodeSpec, LabelField};
    use labelkit_barcode::Symbology;

    fn spec(height: f64, values: &[&str]) -> LabelSpec {
        LabelSpec {
            name: "test".to_string(),
            material_id: "stainless-steel".to_string(),
            width: 50.0,
            height,
            fields: values
                .iter()
                .enumerate()
                .map(|(i, v)| LabelField::new(format!("f{}", i), *v))
                .collect(),
            barcode: None,
            logo: None,
            quantity: 1,
            cut_setting_override: None,
        }
    }

    fn text_positions(elements: &[LabelElement]) -> Vec<f64> {
        elements
            .iter()
            .filter_map(|e| match e {
                LabelElement::Text(t) => Some(t.y),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_short_label_uses_3mm_lines() {
        let elements = layout_label(&spec(20.0, &["PUMP-1", "480V"]));
        assert_eq!(elements.len(), 2);
        // First baseline: 20 - 2 - 3 = 15, then down 4.5 per line.
        assert_eq!(text_positions(&elements), vec![15.0, 10.5]);
        match &elements[0] {
            LabelElement::Text(t) => {
                assert_eq!(t.height, 3.0);
                assert_eq!(t.x, MARGIN_MM);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_tall_label_uses_5mm_lines() {
        let elements = layout_label(&spec(40.0, &["A", "B"]));
        assert_eq!(text_positions(&elements), vec![33.0, 25.5]);
    }

    #[test]
    fn test_blank_fields_consume_no_line() {
        let with_blanks = layout_label(&spec(20.0, &["PUMP-1", "", "   ", "480V"]));
        let without = layout_label(&spec(20.0, &["PUMP-1", "480V"]));
        assert_eq!(text_positions(&with_blanks), text_positions(&without));
        assert_eq!(with_blanks.len(), 2);
    }

    #[test]
    fn test_barcode_is_centered_at_bottom() {
        let mut s = spec(20.0, &[]);
        s.barcode = Some(BarcodeSpec {
            symbology: Symbology::Code128,
            value: "ASSET-00042".to_string(),
        });
        let elements = layout_label(&s);
        assert_eq!(elements.len(), 1);
        match &elements[0] {
            LabelElement::Barcode(b) => {
                assert_eq!(b.width, 30.0); // 60% of 50
                assert_eq!(b.height, 5.0); // 25% of 20
                assert_eq!(b.x, 10.0); // centered
                assert_eq!(b.y, MARGIN_MM);
                assert!(b.geometry.is_none());
            }
            other => panic!("expected barcode, got {:?}", other),
        }
    }
}
