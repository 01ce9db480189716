// Facade tests
// The one-call entry point the request-handling layer uses, driven with a
// deserialized web payload and the deterministic encoder stub.

use labelkit::{compile_label, LabelSpec, MaterialCatalog};
use labelkit_barcode::testing::StaticSymbolEncoder;

#[tokio::test]
async fn test_compile_label_from_web_payload() {
    let catalog = MaterialCatalog::builtin().unwrap();
    let encoder = StaticSymbolEncoder::bars();

    let spec: LabelSpec = serde_json::from_str(
        r#"{
            "name": "asset-tag",
            "material_id": "anodized-aluminum-black",
            "width": 50.0,
            "height": 25.0,
            "fields": [
                {"key": "assetId", "value": "FORKLIFT-07"},
                {"key": "dept", "value": ""},
                {"key": "serial", "value": "SN 44-1092"}
            ],
            "barcode": {"symbology": "code128", "value": "ASSET-00042"}
        }"#,
    )
    .unwrap();

    let document = compile_label(&spec, &catalog, &encoder).await.unwrap();

    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(document.contains("AppVersion=\"1.7.00\""));
    // Blank field skipped: two text shapes plus the barcode group.
    assert_eq!(document.matches("<Shape Type=\"Text\"").count(), 2);
    assert_eq!(document.matches("<Shape Type=\"Group\"").count(), 1);
    assert!(document.ends_with("</LightBurnProject>\n"));
}

#[tokio::test]
async fn test_document_survives_file_delivery() {
    let catalog = MaterialCatalog::builtin().unwrap();
    let encoder = StaticSymbolEncoder::bars();

    let spec: LabelSpec = serde_json::from_str(
        r#"{
            "name": "valve-tag",
            "material_id": "brass",
            "width": 40.0,
            "height": 40.0,
            "fields": [{"key": "service", "value": "COOLING WATER"}]
        }"#,
    )
    .unwrap();

    let document = compile_label(&spec, &catalog, &encoder).await.unwrap();

    // The caller writes the document out as an attachment; byte identity
    // must survive the round trip.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("valve-tag.lbrn2");
    std::fs::write(&path, &document).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), document);
}

#[tokio::test]
async fn test_compile_label_unmapped_material() {
    let catalog = MaterialCatalog::builtin().unwrap();
    let encoder = StaticSymbolEncoder::bars();

    let spec: LabelSpec = serde_json::from_str(
        r#"{"name": "t", "material_id": "unobtainium", "width": 50.0, "height": 20.0}"#,
    )
    .unwrap();

    let err = compile_label(&spec, &catalog, &encoder).await.unwrap_err();
    assert!(err.is_configuration_error());
}
