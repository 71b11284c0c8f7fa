use super::*;

/// White disc-ish pictogram: opaque white center pixel, soft edge, transparent corners.
fn sample_picto() -> RgbaImage {
    RgbaImage::from_fn(3, 3, |x, y| match (x, y) {
        (1, 1) => Rgba([255, 255, 255, 255]),
        (0, 0) | (2, 2) => Rgba([0, 0, 0, 0]),
        _ => Rgba([255, 255, 255, 96]),
    })
}

fn alpha(img: &RgbaImage) -> Vec<u8> {
    img.pixels().map(|p| p.0[3]).collect()
}

#[test]
fn white_recolor_keeps_alpha_bit_for_bit() {
    let src = sample_picto();
    let out = set_picto_color(&src, Color::WHITE, None);
    assert_eq!(alpha(&out), alpha(&src));
    assert_eq!(out.get_pixel(1, 1).0, [255, 255, 255, 255]);
}

#[test]
fn foreground_maps_white_and_alpha_is_preserved() {
    let src = sample_picto();
    let fg = Color::rgb(200, 30, 90);
    let out = set_picto_color(&src, fg, Some(Color::rgb(1, 2, 3)));
    assert_eq!(out.get_pixel(1, 1).0, [200, 30, 90, 255]);
    assert_eq!(out.get_pixel(0, 1).0, [200, 30, 90, 96]);
    assert_eq!(out.get_pixel(0, 0).0, [1, 2, 3, 0]);
    assert_eq!(alpha(&out), alpha(&src));
}

#[test]
fn missing_background_defaults_to_exact_complement() {
    let src = sample_picto();
    for fg in [Color::rgb(200, 30, 90), Color::rgb(0, 0, 0), Color::rgb(13, 255, 128)] {
        let out = set_picto_color(&src, fg, None);
        let [r, g, b, a] = out.get_pixel(0, 0).0;
        assert_eq!(Color::rgb(r, g, b), fg.complement());
        assert_eq!(a, 0);
        assert_eq!(default_background(fg), fg.complement());
    }
}

#[test]
fn mid_gray_lands_between_endpoints() {
    let src = RgbaImage::from_pixel(1, 1, Rgba([128, 128, 128, 255]));
    let out = set_picto_color(&src, Color::rgb(255, 0, 0), Some(Color::rgb(0, 0, 255)));
    let [r, g, b, _] = out.get_pixel(0, 0).0;
    assert!((127..=129).contains(&r));
    assert_eq!(g, 0);
    assert!((126..=128).contains(&b));
}

#[test]
fn colored_pixels_use_rec601_luma() {
    let src = RgbaImage::from_fn(3, 1, |x, _| match x {
        0 => Rgba([255, 0, 0, 255]),
        1 => Rgba([0, 255, 0, 255]),
        _ => Rgba([0, 0, 255, 255]),
    });
    let out = set_picto_color(&src, Color::WHITE, Some(Color::BLACK));
    let grays: Vec<u8> = out.pixels().map(|p| p.0[0]).collect();
    assert_eq!(grays, [76, 150, 29]);
    assert!(out.pixels().all(|p| p.0[0] == p.0[1] && p.0[1] == p.0[2]));
}

#[test]
fn only_white_skips_recolor() {
    assert!(!needs_recolor(Color::WHITE));
    assert!(needs_recolor(Color::rgb(255, 255, 254)));
    assert!(needs_recolor(Color::BLACK));
}

#[test]
fn dominant_color_of_uniform_image_is_that_color() {
    let img = RgbaImage::from_pixel(17, 9, Rgba([12, 34, 56, 255]));
    assert_eq!(dominant_color(&img).0, [12, 34, 56, 255]);
}

#[test]
fn dominant_color_averages_halves() {
    let img = RgbaImage::from_fn(4, 2, |x, _| {
        if x < 2 {
            Rgba([200, 0, 0, 255])
        } else {
            Rgba([0, 0, 100, 255])
        }
    });
    let [r, g, b, a] = dominant_color(&img).0;
    assert!((99..=101).contains(&r), "r={r}");
    assert_eq!(g, 0);
    assert!((49..=51).contains(&b), "b={b}");
    assert_eq!(a, 255);
}

#[test]
fn main_color_fails_on_undecodable_file() {
    let path = std::env::temp_dir().join(format!("boothframe_bad_{}.png", std::process::id()));
    std::fs::write(&path, b"nope").unwrap();
    let err = main_color(&path).unwrap_err();
    assert!(matches!(err, crate::PictureError::Asset(_)));
    let _ = std::fs::remove_file(&path);
}
