use super::*;

#[test]
fn defaults_match_native_card() {
    let s = RenderSettings::default();
    assert_eq!(s.card_dimensions, Dimensions::new(3200, 1800));
    assert_eq!(s.magick_binary, "convert");
    assert_eq!(s.blur_profile, "0x60");
    assert!(s.docker_container.is_none());
}

#[test]
fn partial_json_keeps_defaults() {
    let s: RenderSettings =
        serde_json::from_str(r#"{ "card_dimensions": "1920x1080", "ref_dir": "/opt/ref" }"#)
            .unwrap();
    assert_eq!(s.card_dimensions, Dimensions::new(1920, 1080));
    assert_eq!(s.ref_dir, PathBuf::from("/opt/ref"));
    assert_eq!(s.magick_binary, "convert");
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<RenderSettings>(r#"{ "bogus": 1 }"#).is_err());
}

#[test]
fn from_json_file_reads_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "magick_binary": "magick", "blur_profile": "0x30" }"#).unwrap();
    let s = RenderSettings::from_json_file(&path).unwrap();
    assert_eq!(s.magick_binary, "magick");
    assert_eq!(s.blur_profile, "0x30");

    assert!(RenderSettings::from_json_file(&dir.path().join("missing.json")).is_err());
}
