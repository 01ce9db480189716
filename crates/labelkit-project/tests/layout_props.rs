// Layout property tests
// The field layout walks down from the top margin; for any label that can
// hold its fields, placements must be strictly decreasing and stay inside
// the margins, and blank values must be invisible to the layout.

use labelkit_project::{layout_label, LabelElement, LabelField, LabelSpec, MARGIN_MM};
use proptest::prelude::*;

fn spec(height: f64, values: Vec<String>) -> LabelSpec {
    LabelSpec {
        name: "prop".to_string(),
        material_id: "stainless-steel".to_string(),
        width: 60.0,
        height,
        fields: values
            .into_iter()
            .enumerate()
            .map(|(i, v)| LabelField::new(format!("f{}", i), v))
            .collect(),
        barcode: None,
        logo: None,
        quantity: 1,
        cut_setting_override: None,
    }
}

fn text_ys(elements: &[LabelElement]) -> Vec<f64> {
    elements
        .iter()
        .filter_map(|e| match e {
            LabelElement::Text(t) => Some(t.y),
            _ => None,
        })
        .collect()
}

/// How many lines fit between the margins at this label height.
fn max_fitting_fields(height: f64) -> usize {
    let line_height = if height > 30.0 { 5.0 } else { 3.0 };
    let advance = line_height * 1.5;
    let mut count = 0;
    let mut y = height - MARGIN_MM - line_height;
    while y >= MARGIN_MM {
        count += 1;
        y -= advance;
    }
    count
}

proptest! {
    #[test]
    fn prop_placements_decrease_within_margins(
        height in 12.0f64..200.0,
        requested in 1usize..8,
    ) {
        let count = requested.min(max_fitting_fields(height));
        let values = (0..count).map(|i| format!("FIELD-{}", i)).collect();
        let elements = layout_label(&spec(height, values));
        let ys = text_ys(&elements);

        prop_assert_eq!(ys.len(), count);
        for pair in ys.windows(2) {
            prop_assert!(pair[1] < pair[0], "placements must strictly decrease");
        }
        for y in &ys {
            prop_assert!(*y >= MARGIN_MM - 1e-9, "below bottom margin: {}", y);
            prop_assert!(*y <= height - MARGIN_MM + 1e-9, "above top margin: {}", y);
        }
    }

    #[test]
    fn prop_blanks_are_invisible_to_layout(
        height in 12.0f64..200.0,
        requested in 1usize..6,
        blank in prop::sample::select(vec!["", " ", "   ", "\t"]),
    ) {
        let count = requested.min(max_fitting_fields(height));
        let values: Vec<String> = (0..count).map(|i| format!("FIELD-{}", i)).collect();

        // Interleave a blank before every real value.
        let mut with_blanks = Vec::new();
        for value in &values {
            with_blanks.push(blank.to_string());
            with_blanks.push(value.clone());
        }

        let plain = layout_label(&spec(height, values));
        let padded = layout_label(&spec(height, with_blanks));

        prop_assert_eq!(text_ys(&plain), text_ys(&padded));
        prop_assert_eq!(plain.len(), padded.len());
    }
}
