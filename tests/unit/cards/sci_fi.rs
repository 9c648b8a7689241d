use super::*;
use crate::cards::support::{fields, render, settings, try_render};
use crate::magick::runner::RecordingRunner;

#[test]
fn overlays_are_recoloured_and_faded() {
    let card = SciFi::new(fields("Signal").with_index("Season 1", "Episode 4"));
    let cmds = render(&card, RecordingRunner::new());
    let cmd = &cmds[0];

    assert!(cmd.contains_seq(&[
        "(",
        "/ref/azuravian/ref/SciFi/Base.png",
        "-fill",
        "black",
        "-colorize",
        "100%",
        "-alpha",
        "set",
        "-channel",
        "A",
        "-evaluate",
        "Divide",
        "1",
        ")",
        "-composite",
    ]));
    assert!(cmd.contains_seq(&["/ref/azuravian/ref/SciFi/Top.png", "-fill", "rgb(255, 49, 255)"]));
    let faded = (1.0_f64 / 0.6).to_string();
    assert!(cmd.contains_seq(&["Divide", faded.as_str()]));
}

#[test]
fn title_has_cursor_and_index_drops_episode_prefix() {
    let card = SciFi::new(fields("Signal").with_index("Season 1", "Episode 4"));
    let cmds = render(&card, RecordingRunner::new());
    let cmd = &cmds[0];

    assert!(cmd.contains_seq(&["-gravity", "southeast"]));
    assert!(cmd.contains_seq(&["-fill", "white", "-annotate", "+200+250", "Signal_"]));
    assert!(cmd.contains_seq(&["label:SEASON 1", "-font"]));
    assert!(cmd.contains_seq(&["label:4", "+smush", "5.42", ")"]));
    assert!(cmd.contains_seq(&["-geometry", "+160+100", "-composite"]));
}

#[test]
fn hidden_season_annotates_episode_only() {
    let mut f = fields("Signal").with_index("Season 1", "Episode 12");
    f.hide_season_text = true;
    let cmds = render(&SciFi::new(f), RecordingRunner::new());
    assert!(cmds[0].contains_seq(&["-annotate", "+160+100", "12"]));
    assert!(!cmds[0].contains_seq(&["+smush", "5.42"]));
}

#[test]
fn zero_overlay_alpha_is_rejected() {
    let mut card = SciFi::new(fields("Signal"));
    card.overlay_middle_alpha = 0.0;
    let err = try_render(&card, &settings(), RecordingRunner::new()).unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));

    card.overlay_middle_alpha = -0.5;
    assert!(try_render(&card, &settings(), RecordingRunner::new()).is_err());
}
