use super::*;
use crate::cards::support::{fields, render, settings, try_render, write_png};
use crate::magick::runner::RecordingRunner;

const COUNT_METRICS: &str = "\
  Metrics: text: SEASON 2 ; width: 400; height: 70; ascent: 60; descent: -10
  Metrics: text: - ; width: 50; height: 80; ascent: 60; descent: -20
  Metrics: text: EPISODE 5; width: 380; height: 75; ascent: 60; descent: -15
";

fn runner() -> RecordingRunner {
    RecordingRunner::new().with_fallback_dimensions(Dimensions::new(1875, 930))
}

#[test]
fn missing_logo_is_an_error() {
    let card = WhiteTextStandardLogo::new(fields("Pilot"), Some("/nowhere/logo.png".to_string()));
    let err = try_render(&card, &settings(), runner()).unwrap_err();
    assert!(matches!(err, CardError::MissingAsset { what: "logo file", .. }));

    let card = WhiteTextTitleOnlyLogo::new(fields("Pilot"), None);
    let err = try_render(&card, &settings(), runner()).unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
}

#[test]
fn logo_template_expands_season_number() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo-s2.png");
    write_png(&logo, 4, 4);

    let mut f = fields("Pilot").with_index("Season 2", "Episode 5");
    f.season_number = 2;
    let template = format!("{}/logo-s{{season_number}}.png", dir.path().display());
    let card = WhiteTextStandardLogo::new(f, Some(template));
    let cmds = render(&card, runner().with_output(COUNT_METRICS));
    assert_eq!(cmds[0].as_args()[0], path_arg(&logo));
}

#[test]
fn bad_logo_template_is_used_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo-{show}.png");
    write_png(&logo, 4, 4);

    let card = WhiteTextStandardLogo::new(fields("Pilot"), Some(logo.display().to_string()));
    let cmds = render(&card, runner());
    assert_eq!(cmds[0].as_args()[0], path_arg(&logo));
}

#[test]
fn standard_logo_measures_and_composites_index_text() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    write_png(&logo, 4, 4);

    let card = WhiteTextStandardLogo::new(
        fields("Pilot").with_index("Season 2", "Episode 5"),
        Some(logo.display().to_string()),
    );
    let cmds = render(&card, runner().with_output(COUNT_METRICS));
    assert_eq!(cmds.len(), 6);

    assert!(cmds[0].contains_seq(&["-resize", "x1030", "-resize", "1875x1030>"]));
    assert!(cmds[1].contains_seq(&["-size", "3200x1800", "xc:#000000"]));
    assert!(cmds[1].contains_seq(&["-gravity", "north", "-geometry", "+0+110", "-composite"]));

    assert_eq!(Some(cmds[2].as_args()[0].as_str()), cmds[1].output());
    assert!(cmds[2].contains_seq(&["+profile", "*"]));
    assert!(cmds[2].contains_seq(&["-interline-spacing", "-70"]));
    assert!(cmds[2].contains_seq(&["-annotate", "+0+245", "Pilot"]));

    assert!(cmds[3].contains_seq(&["-debug", "annotate", "xc:"]));
    assert!(cmds[3].contains_seq(&["-annotate", "+1600+697.2", "SEASON 2 "]));
    assert_eq!(cmds[3].output(), Some("null:"));

    let count = &cmds[4];
    assert!(count.contains_seq(&["-size", "830x105", "-alpha", "on"]));
    assert!(count.contains_seq(&["-annotate", "+0+80", "SEASON 2 "]));
    assert!(count.contains_seq(&["-annotate", "+400+73.5", "-"]));
    assert!(count.contains_seq(&["-annotate", "+450+80", "EPISODE 5"]));
    let count_image = count.output().unwrap().strip_prefix("PNG32:").unwrap().to_string();

    let last = &cmds[5];
    assert_eq!(Some(last.as_args()[0].as_str()), cmds[2].output());
    assert_eq!(last.as_args()[1], count_image);
    assert!(last.contains_seq(&["-gravity", "center", "-geometry", "+0+690.2", "-composite"]));
    assert_eq!(last.output(), Some("/out/card.jpg"));
}

#[test]
fn unmeasurable_index_text_uses_fallback_layout() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    write_png(&logo, 4, 4);

    let card = WhiteTextStandardLogo::new(
        fields("Pilot").with_index("Season 2", "Episode 5"),
        Some(logo.display().to_string()),
    );
    let cmds = render(&card, runner());
    assert!(cmds[4].contains_seq(&["-size", "774x108"]));
    assert!(cmds[4].contains_seq(&["-annotate", "+370+76.5", "-"]));
    assert!(cmds[4].contains_seq(&["-annotate", "+417+83", "EPISODE 5"]));
}

#[test]
fn standard_logo_hidden_season_annotates_episode_directly() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    write_png(&logo, 4, 4);

    let card = WhiteTextStandardLogo::new(
        fields("Pilot").with_index("", "Episode 5"),
        Some(logo.display().to_string()),
    );
    let cmds = render(&card, runner());
    assert_eq!(cmds.len(), 4);
    assert!(cmds[3].contains_seq(&["-annotate", "+0+697.2", "EPISODE 5"]));
    assert_eq!(cmds[3].output(), Some("/out/card.jpg"));
}

#[test]
fn title_only_logo_blurs_backdrop_without_resizing() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    write_png(&logo, 4, 4);

    let mut f = fields("Pilot");
    f.style.blur = true;
    let mut card = WhiteTextTitleOnlyLogo::new(f, Some(logo));
    card.background = "#112233".to_string();
    let cmds = render(&card, runner());
    assert_eq!(cmds.len(), 3);
    assert!(cmds[1].contains_seq(&["xc:#112233"]));
    let title = &cmds[2];
    assert_eq!(Some(title.as_args()[0].as_str()), cmds[1].output());
    assert!(title.contains_seq(&["-blur", "0x60", "-font"]));
    assert!(!title.contains_seq(&["+profile", "*"]));
    assert!(title.contains_seq(&["-interline-spacing", "-17"]));
    assert_eq!(title.output(), Some("/out/card.jpg"));
    assert!(!card.uses_source_file());
}
