use super::*;

#[test]
fn size_portrait_is_strict() {
    assert!(Size::new(3, 4).is_portrait());
    assert!(!Size::new(4, 3).is_portrait());
    assert!(!Size::new(4, 4).is_portrait());
}

#[test]
fn size_non_zero_rejects_degenerate() {
    assert!(Size::new(1, 1).non_zero("target").is_ok());
    assert!(matches!(
        Size::new(0, 10).non_zero("target"),
        Err(PictureError::InvalidGeometry(_))
    ));
    assert!(Size::new(10, 0).non_zero("target").is_err());
}

#[test]
fn size_parses_from_str() {
    assert_eq!("640x480".parse::<Size>().unwrap(), Size::new(640, 480));
    assert_eq!(" 12X7 ".parse::<Size>().unwrap(), Size::new(12, 7));
    assert!("640".parse::<Size>().is_err());
    assert!("ax2".parse::<Size>().is_err());
}

#[test]
fn color_complement_is_channel_wise() {
    assert_eq!(Color::rgb(10, 200, 255).complement(), Color::rgb(245, 55, 0));
    assert_eq!(Color::WHITE.complement(), Color::BLACK);
    assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
}

#[test]
fn orientation_parses_known_names_only() {
    assert_eq!("auto".parse::<Orientation>().unwrap(), Orientation::Auto);
    assert_eq!(
        "Portrait".parse::<Orientation>().unwrap(),
        Orientation::Portrait
    );
    assert_eq!(
        "landscape".parse::<Orientation>().unwrap(),
        Orientation::Landscape
    );
    assert!(matches!(
        "square".parse::<Orientation>(),
        Err(PictureError::InvalidOrientation(v)) if v == "square"
    ));
}

#[test]
fn paper_format_validation_and_canonical_order() {
    assert!(PaperFormat::new(0.0, 6.0).is_err());
    assert!(PaperFormat::new(4.0, f64::NAN).is_err());
    assert!(PaperFormat::new(-4.0, 6.0).is_err());

    let p = PaperFormat::new(6.0, 4.0).unwrap();
    assert_eq!(p.inches(), (6.0, 4.0));
    assert_eq!(p.portrait().inches(), (4.0, 6.0));
    assert_eq!(PaperFormat::default().inches(), (4.0, 6.0));
    assert_eq!("5x7".parse::<PaperFormat>().unwrap().inches(), (5.0, 7.0));
}

#[test]
fn paper_format_serde_uses_pair() {
    let p: PaperFormat = serde_json::from_str("[6, 4]").unwrap();
    assert_eq!(p.inches(), (6.0, 4.0));
    assert!(serde_json::from_str::<PaperFormat>("[0, 4]").is_err());
}
