use super::*;

#[test]
fn file_name_from_title() {
    assert_eq!(
        export_file_name("My Scientific Plot"),
        "my-scientific-plot-plot.png"
    );
    assert_eq!(export_file_name("  Growth\t Curve  "), "growth-curve-plot.png");
    assert_eq!(export_file_name(""), "-plot.png");
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = [64, 32, 0, 128, 10, 20, 30, 255, 9, 9, 9, 0];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..12], &[9, 9, 9, 0]);
}

#[test]
fn encodes_decodable_png() {
    let frame = FrameRGBA {
        width: 3,
        height: 2,
        data: vec![255; 3 * 2 * 4],
        premultiplied: true,
    };
    let bytes = encode_png(&frame).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(1, 1).0, [255, 255, 255, 255]);
}

#[test]
fn rejects_mismatched_length() {
    let frame = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 10],
        premultiplied: true,
    };
    let err = encode_png(&frame).unwrap_err();
    assert!(err.to_string().starts_with("export error:"));
}
