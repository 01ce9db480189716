// Encode pipeline integration tests
// Drives BarcodeEncoder against the deterministic stubs and checks the
// request shape handed to the capability, then the fit behavior of the
// translated group.

use labelkit_barcode::testing::RecordingSymbolEncoder;
use labelkit_barcode::{build_group, BarcodeEncoder, BarcodeResult, Symbology};
use labelkit_core::ShapeIdAllocator;
use proptest::prelude::*;

#[tokio::test]
async fn test_request_carries_device_scale_and_bar_height() {
    let recorder = RecordingSymbolEncoder::bars();
    let encoder = BarcodeEncoder::new(&recorder);

    encoder
        .encode(Symbology::Code128, "ASSET-00042", 36.0, 7.5, false)
        .await
        .unwrap();
    encoder
        .encode(Symbology::Qr, "https://example.com", 20.0, 20.0, true)
        .await
        .unwrap();

    let requests = recorder.requests();
    assert_eq!(requests.len(), 2);

    // 36mm at 39.37 mil/mm is 14.17 scale units, which rounds to 14.
    assert_eq!(requests[0].scale, 14);
    assert_eq!(requests[0].bar_height_mm, Some(10));
    assert!(!requests[0].include_text);
    assert_eq!(requests[0].bcid(), "code128");

    assert_eq!(requests[1].bar_height_mm, None);
    assert!(requests[1].include_text);
    assert_eq!(requests[1].bcid(), "qrcode");
}

#[tokio::test]
async fn test_encode_then_fit_end_to_end() {
    let recorder = RecordingSymbolEncoder::bars();
    let encoder = BarcodeEncoder::new(&recorder);

    let result = encoder
        .encode(Symbology::Code128, "ASSET-00042", 60.0, 15.0, false)
        .await
        .unwrap();

    let mut ids = ShapeIdAllocator::new();
    let group = build_group(&result, 60.0, 15.0, 10.0, 2.0, &mut ids).unwrap();

    // The stub symbol is 116x60; height is the binding axis here.
    assert!((group.scale - 0.25).abs() < 1e-12);
    assert_eq!(group.children.len(), 3);
    assert!(group.children.iter().all(|c| !c.vertices.is_empty()));
    assert_eq!(group.xform().to_string(), "0.25 0 0 0.25 10 2");
}

proptest! {
    // Aspect-preserving fit: never overflows either axis, exactly fills
    // at least one.
    #[test]
    fn prop_fit_scale_is_tight(
        intrinsic_w in 1.0f64..500.0,
        intrinsic_h in 1.0f64..500.0,
        target_w in 1.0f64..200.0,
        target_h in 1.0f64..200.0,
    ) {
        let result = BarcodeResult {
            svg: String::new(),
            width: intrinsic_w,
            height: intrinsic_h,
            paths: vec![],
        };
        let mut ids = ShapeIdAllocator::new();
        let group = build_group(&result, target_w, target_h, 0.0, 0.0, &mut ids).unwrap();

        let fitted_w = group.scale * intrinsic_w;
        let fitted_h = group.scale * intrinsic_h;
        prop_assert!(fitted_w <= target_w * (1.0 + 1e-9));
        prop_assert!(fitted_h <= target_h * (1.0 + 1e-9));

        let fills_w = (fitted_w - target_w).abs() <= target_w * 1e-9;
        let fills_h = (fitted_h - target_h).abs() <= target_h * 1e-9;
        prop_assert!(fills_w || fills_h);
    }
}
