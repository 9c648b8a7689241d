use super::*;

#[test]
fn args_macro_stringifies_mixed_values() {
    let k = -1.25 * 1.0;
    let shift = 245 + 10;
    let v = args!["-kerning", k, "-annotate", format!("+0+{shift}"), 3.0 * 1.0];
    assert_eq!(v, vec!["-kerning", "-1.25", "-annotate", "+0+255", "3"]);
    assert!(args![].is_empty());
}

#[test]
fn display_quotes_only_unsafe_arguments() {
    let mut cmd = MagickCommand::new();
    cmd.args(["/src/a b.jpg", "+profile", "*", "-resize", "3200x1800^"]);
    cmd.args(["-annotate", "+0+245", "It's Here"]);
    assert_eq!(
        cmd.to_string(),
        "convert '/src/a b.jpg' +profile '*' -resize '3200x1800^' -annotate +0+245 'It'\\''s Here'"
    );
}

#[test]
fn contains_seq_matches_contiguous_runs() {
    let mut cmd = MagickCommand::new();
    cmd.args(["-fill", "black", "-stroke", "black"]);
    assert!(cmd.contains_seq(&["black", "-stroke"]));
    assert!(!cmd.contains_seq(&["-fill", "-stroke"]));
    assert!(!cmd.contains_seq(&[]));
    assert_eq!(cmd.output(), Some("black"));
}

#[test]
fn escape_text_handles_imagemagick_specials() {
    assert_eq!(escape_text("100% Real"), "100%% Real");
    assert_eq!(escape_text("a\\b"), "a\\\\b");
    assert_eq!(escape_text("@home"), "\\@home");
    assert_eq!(escape_text("me@home"), "me@home");
    assert_eq!(escape_text("Line\nTwo"), "Line\nTwo");
}

#[test]
fn file_operands_are_absolute() {
    let mut cmd = MagickCommand::new();
    cmd.file(Path::new("relative/source.jpg"));
    assert!(Path::new(&cmd.as_args()[0]).is_absolute());
    assert!(cmd.as_args()[0].ends_with("source.jpg"));
}
