// Catalog integrity tests
// Every storefront material identifier must resolve to in-range cut
// parameters; an unmapped identifier ever reaching production is a
// deployment defect, so the full table is checked here.

use labelkit_materials::{CutMode, MaterialCatalog};

#[test]
fn test_every_web_material_resolves() {
    let catalog = MaterialCatalog::builtin().unwrap();

    let ids: Vec<&str> = catalog.web_material_ids().collect();
    assert_eq!(ids.len(), 14);

    for id in ids {
        let setting = catalog
            .resolve_for_web_material(id)
            .unwrap_or_else(|e| panic!("{} failed to resolve: {}", id, e));

        assert!(
            setting.max_power >= 0.0 && setting.max_power <= 100.0,
            "{} maxPower out of range",
            id
        );
        if let Some(min) = setting.min_power {
            assert!(min >= 0.0 && min <= setting.max_power, "{} minPower out of range", id);
        }
        assert!(setting.speed > 0.0, "{} speed not positive", id);
    }
}

#[test]
fn test_known_storefront_ids_present() {
    let catalog = MaterialCatalog::builtin().unwrap();
    for id in [
        "anodized-aluminum-thin",
        "anodized-aluminum-thick",
        "anodized-aluminum-black",
        "anodized-aluminum-color",
        "stainless-steel",
        "brass",
        "copper",
        "abs-plastic",
        "abs-plastic-white",
        "leather",
        "wood",
        "slate",
        "ceramic",
        "powder-coat",
    ] {
        assert!(
            catalog.resolve_for_web_material(id).is_ok(),
            "storefront id {} is unmapped",
            id
        );
    }
}

#[test]
fn test_photo_entries_carry_image_parameters() {
    let catalog = MaterialCatalog::builtin().unwrap();
    let setting = catalog.lookup("Aluminum", Some("Photo Quality")).unwrap();
    assert_eq!(setting.mode, CutMode::Image);
    assert_eq!(setting.dpi, Some(315));
    assert_eq!(setting.dither_mode.as_deref(), Some("jarvis"));
}
