use super::*;

fn captures(n: usize, w: u32, h: u32) -> Vec<RgbaImage> {
    (0..n).map(|_| RgbaImage::new(w, h)).collect()
}

#[test]
fn single_and_grid_follow_capture_shape() {
    for n in [1, 4] {
        assert_eq!(
            best_orientation(&captures(n, 3, 4)).unwrap(),
            Orientation::Portrait
        );
        assert_eq!(
            best_orientation(&captures(n, 4, 3)).unwrap(),
            Orientation::Landscape
        );
    }
}

#[test]
fn strips_run_across_capture_shape() {
    for n in [2, 3] {
        assert_eq!(
            best_orientation(&captures(n, 3, 4)).unwrap(),
            Orientation::Landscape
        );
        assert_eq!(
            best_orientation(&captures(n, 4, 3)).unwrap(),
            Orientation::Portrait
        );
    }
}

#[test]
fn square_capture_counts_as_not_portrait() {
    assert_eq!(
        best_orientation(&captures(4, 5, 5)).unwrap(),
        Orientation::Landscape
    );
    assert_eq!(
        best_orientation(&captures(2, 5, 5)).unwrap(),
        Orientation::Portrait
    );
}

#[test]
fn strips_are_the_opposite_of_blocks() {
    for portrait in [true, false] {
        let block = orientation_for(1, portrait).unwrap();
        for n in [2, 3] {
            assert_ne!(orientation_for(n, portrait).unwrap(), block);
        }
        assert_eq!(orientation_for(4, portrait).unwrap(), block);
    }
}

#[test]
fn only_first_capture_matters() {
    let mut caps = captures(4, 3, 4);
    caps[1] = RgbaImage::new(40, 3);
    assert_eq!(best_orientation(&caps).unwrap(), Orientation::Portrait);
}

#[test]
fn out_of_range_counts_fail() {
    assert!(matches!(
        best_orientation(&[]),
        Err(PictureError::InvalidCaptureCount(0))
    ));
    assert!(matches!(
        best_orientation(&captures(5, 3, 4)),
        Err(PictureError::InvalidCaptureCount(5))
    ));
    assert!(orientation_for(0, true).is_err());
    assert!(orientation_for(5, false).is_err());
}
