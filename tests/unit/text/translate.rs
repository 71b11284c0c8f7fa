use super::*;

#[test]
fn json_object_maps_keys_to_captions() {
    let t = Translations::from_json_str(r#"{"1": "Smile!", "4": "Four\nshots"}"#).unwrap();
    assert_eq!(t.len(), 2);
    assert_eq!(t.get_translated_text("1").as_deref(), Some("Smile!"));
    assert_eq!(t.get_translated_text("4").as_deref(), Some("Four\nshots"));
    assert_eq!(t.get_translated_text("2"), None);
}

#[test]
fn non_string_values_are_rejected() {
    let err = Translations::from_json_str(r#"{"1": 3}"#).unwrap_err();
    assert!(matches!(err, PictureError::Validation(_)), "{err}");
    assert!(Translations::from_json_str("[]").is_err());
}

#[test]
fn missing_file_is_wrapped() {
    let err = Translations::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
    assert!(matches!(err, PictureError::Other(_)));
    assert!(err.to_string().contains("read translations"));
}

#[test]
fn maps_and_references_translate_too() {
    let mut map = HashMap::new();
    map.insert("3".to_string(), "Three".to_string());
    assert_eq!(map.get_translated_text("3").as_deref(), Some("Three"));

    let t: Translations = [("2", "Two")].into_iter().collect();
    fn lookup(t: impl Translator, key: &str) -> Option<String> {
        t.get_translated_text(key)
    }
    assert_eq!(lookup(&t, "2").as_deref(), Some("Two"));
}

#[test]
fn insert_replaces() {
    let mut t = Translations::new();
    assert!(t.is_empty());
    t.insert("1", "a");
    t.insert("1", "b");
    assert_eq!(t.len(), 1);
    assert_eq!(t.get_translated_text("1").as_deref(), Some("b"));
}
