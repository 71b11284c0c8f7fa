use super::*;

fn ratio(s: Size) -> f64 {
    f64::from(s.width) / f64::from(s.height)
}

#[test]
fn fit_size_hits_constraining_dimension() {
    assert_eq!(
        fit_size(Size::new(400, 200), Size::new(100, 100)),
        Size::new(100, 50)
    );
    assert_eq!(
        fit_size(Size::new(200, 400), Size::new(100, 100)),
        Size::new(50, 100)
    );
    assert_eq!(
        fit_size(Size::new(10, 10), Size::new(300, 200)),
        Size::new(200, 200)
    );
}

#[test]
fn fit_size_never_exceeds_box_and_keeps_aspect() {
    let originals = [(1920, 1080), (1080, 1920), (333, 777), (1, 999), (640, 480)];
    let targets = [(100, 100), (1280, 720), (37, 500), (800, 801)];
    for (ow, oh) in originals {
        for (tw, th) in targets {
            let o = Size::new(ow, oh);
            let t = Size::new(tw, th);
            let f = fit_size(o, t);
            assert!(f.width <= tw && f.height <= th, "{o} in {t} gave {f}");
            assert!(f.width == tw || f.height == th, "{o} in {t} gave {f}");
            // Within 1px of the exact aspect-preserving size.
            let exact_h = f64::from(f.width) / ratio(o);
            let exact_w = f64::from(f.height) * ratio(o);
            assert!(
                (exact_h - f64::from(f.height)).abs() <= 1.0
                    || (exact_w - f64::from(f.width)).abs() <= 1.0,
                "{o} in {t} gave {f}"
            );
        }
    }
}

#[test]
fn crop_box_matches_target_ratio_and_is_centered() {
    let b = center_crop_box(Size::new(400, 200), Size::new(100, 100));
    assert_eq!(b, PixelRect::new(100, 0, 200, 200));

    let b = center_crop_box(Size::new(300, 600), Size::new(3, 2));
    assert_eq!(b, PixelRect::new(0, 200, 300, 200));

    let b = center_crop_box(Size::new(640, 480), Size::new(1280, 960));
    assert_eq!(b, PixelRect::new(0, 0, 640, 480));
}

#[test]
fn crop_box_ratio_within_rounding() {
    for (ow, oh, tw, th) in [(1920, 1080, 3, 4), (1001, 999, 16, 9), (500, 2000, 7, 5)] {
        let b = center_crop_box(Size::new(ow, oh), Size::new(tw, th));
        assert!(b.x + b.width <= ow && b.y + b.height <= oh);
        let expected = f64::from(tw) / f64::from(th);
        let got = ratio(b.size());
        // One pixel of rounding on the short side.
        let tol = 1.0 / f64::from(b.width.min(b.height));
        assert!((got - expected).abs() / expected <= tol, "{b:?}");
    }
}
