use super::*;

#[test]
fn path_is_plain_join() {
    let dir = AssetDir::new("/opt/booth/assets");
    assert_eq!(
        dir.path("layout1.png"),
        PathBuf::from("/opt/booth/assets/layout1.png")
    );
    assert_eq!(dir.root(), Path::new("/opt/booth/assets"));
}
