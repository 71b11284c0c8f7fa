use std::io::Cursor;

use super::*;

fn png_bytes(img: RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_image_png_keeps_straight_alpha() {
    let img = RgbaImage::from_raw(1, 1, vec![100u8, 50, 200, 128]).unwrap();
    let decoded = decode_image(&png_bytes(img)).unwrap();
    assert_eq!(decoded.dimensions(), (1, 1));
    assert_eq!(decoded.as_raw().as_slice(), &[100u8, 50, 200, 128]);
}

#[test]
fn decode_garbage_is_asset_error() {
    assert!(matches!(
        decode_image(b"definitely not a png"),
        Err(PictureError::Asset(_))
    ));
}

#[test]
fn svg_rasterizes_at_intrinsic_and_requested_size() {
    let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2">
        <rect x="0" y="0" width="4" height="2" fill="#ff0000"/></svg>"##;

    let native = rasterize_svg(svg, None).unwrap();
    assert_eq!(native.dimensions(), (4, 2));
    assert_eq!(native.get_pixel(1, 1).0, [255, 0, 0, 255]);

    let scaled = rasterize_svg(svg, Some(Size::new(8, 4))).unwrap();
    assert_eq!(scaled.dimensions(), (8, 4));
    assert_eq!(scaled.get_pixel(4, 2).0, [255, 0, 0, 255]);

    assert!(rasterize_svg(svg, Some(Size::new(0, 4))).is_err());
    assert!(rasterize_svg(br#"<svg"#, None).is_err());
}

#[test]
fn unpremultiply_restores_straight_channels() {
    let mut px = [64u8, 32, 0, 128, 10, 20, 30, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 0]);
    assert_eq!(&px[8..], &[1, 2, 3, 255]);
}

#[test]
fn svg_extension_detection_is_case_insensitive() {
    assert!(is_svg(Path::new("icons/camera.SVG")));
    assert!(!is_svg(Path::new("layout1.png")));
    assert!(!is_svg(Path::new("svg")));
}
