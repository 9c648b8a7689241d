use super::*;

fn values() -> Vec<(&'static str, FormatArg)> {
    vec![
        ("season_number", 2u32.into()),
        ("episode_number", 7u32.into()),
        ("abs_number", 123u32.into()),
        ("series", "Show".into()),
    ]
}

#[test]
fn substitutes_plain_fields() {
    let out = format_placeholders("EPISODE {episode_number}", &values()).unwrap();
    assert_eq!(out, "EPISODE 7");
}

#[test]
fn zero_pads_numbers() {
    let out = format_placeholders("S{season_number:02}E{episode_number:02}", &values()).unwrap();
    assert_eq!(out, "S02E07");
    let out = format_placeholders("E{abs_number:02}", &values()).unwrap();
    assert_eq!(out, "E123");
    let out = format_placeholders("{n:03}", &[("n", FormatArg::Int(-5))]).unwrap();
    assert_eq!(out, "-05");
}

#[test]
fn doubled_braces_are_literal() {
    let out = format_placeholders("{{{series}}}", &values()).unwrap();
    assert_eq!(out, "{Show}");
}

#[test]
fn unknown_or_malformed_fields_are_errors() {
    assert!(format_placeholders("{missing}", &values()).is_err());
    assert!(format_placeholders("{episode_number", &values()).is_err());
    assert!(format_placeholders("a } b", &values()).is_err());
    assert!(format_placeholders("{series:02}", &values()).is_err());
    assert!(format_placeholders("{episode_number:>4}", &values()).is_err());
}

#[test]
fn templates_without_fields_pass_through() {
    let out = format_placeholders("/logos/logo.png", &values()).unwrap();
    assert_eq!(out, "/logos/logo.png");
}
