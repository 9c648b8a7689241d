use super::*;
use crate::cards::{blacklist, sci_fi, white_text};

fn ref_dir() -> &'static Path {
    Path::new("/ref")
}

#[test]
fn missing_attributes_fall_back_to_card_defaults() {
    let font = Font::default();
    let info = &blacklist::INFO;
    assert_eq!(
        font.file_or(info, ref_dir()),
        PathBuf::from("/ref/CollinHeist/blacklist/Blacklisted.ttf")
    );
    assert_eq!(font.color_or(info), "rgb(177,21,10)");
    assert_eq!(font.case_or(info), FontCase::Upper);
    assert!(font.replacements_or(info).is_empty());

    let generic = Font::default_for(info, ref_dir());
    assert_eq!(generic.file, Some(font.file_or(info, ref_dir())));
    assert_eq!(generic.size, 1.0);
}

#[test]
fn generic_font_is_not_custom() {
    for info in [&blacklist::INFO, &sci_fi::INFO, &white_text::STANDARD_INFO] {
        assert!(!is_custom_font(info, &Font::default(), ref_dir()));
        assert!(!is_custom_font(info, &Font::default_for(info, ref_dir()), ref_dir()));
    }
}

#[test]
fn only_declared_attributes_make_a_font_custom() {
    let shifted = Font {
        vertical_shift: 10,
        ..Font::default()
    };
    assert!(is_custom_font(&blacklist::INFO, &shifted, ref_dir()));
    // sci-fi ignores vertical shift
    assert!(!is_custom_font(&sci_fi::INFO, &shifted, ref_dir()));

    let stroked = Font {
        stroke_width: 2.0,
        ..Font::default()
    };
    assert!(!is_custom_font(&blacklist::INFO, &stroked, ref_dir()));
    assert!(is_custom_font(&white_text::STANDARD_INFO, &stroked, ref_dir()));
}

#[test]
fn replacements_are_compared_when_declared() {
    let font = Font {
        replacements: Some(BTreeMap::from([("&".to_string(), "and".to_string())])),
        ..Font::default()
    };
    assert!(is_custom_font(&white_text::STANDARD_INFO, &font, ref_dir()));
    assert!(!is_custom_font(&blacklist::INFO, &font, ref_dir()));
}

#[test]
fn other_file_is_custom() {
    let font = Font {
        file: Some(PathBuf::from("/fonts/Other.ttf")),
        ..Font::default()
    };
    assert!(is_custom_font(&blacklist::INFO, &font, ref_dir()));
}

#[test]
fn unknown_font_keys_are_rejected() {
    let err = serde_json::from_str::<Font>(r#"{ "size": 1.2, "colour": "red" }"#);
    assert!(err.is_err());

    let font: Font = serde_json::from_str(r#"{ "size": 1.2, "case": "title" }"#).unwrap();
    assert_eq!(font.size, 1.2);
    assert_eq!(font.kerning, 1.0);
    assert_eq!(font.case, Some(FontCase::Title));
}
