use super::*;
use crate::cards::support::{fields, render};
use crate::magick::runner::RecordingRunner;

#[test]
fn single_command_with_title_and_episode_text() {
    let mut card = WhiteTextBroadcast::new(fields("Pilot").with_index("", "s01e02"));
    card.episode_text_color = "gold".to_string();
    let cmds = render(&card, RecordingRunner::new());
    assert_eq!(cmds.len(), 1);
    let cmd = &cmds[0];
    assert!(cmd.contains_seq(&["/ref/lyonza/GRADIENTABS.png", "-composite"]));
    assert!(cmd.contains_seq(&["-font", "/ref/lyonza/TerminalDosis-Bold.ttf", "-kerning", "-1.25"]));
    assert!(cmd.contains_seq(&["-interline-spacing", "-17", "-pointsize", "180"]));
    assert!(cmd.contains_seq(&["-strokewidth", "3", "-annotate", "+0+50", "Pilot"]));
    assert!(cmd.contains_seq(&["-gravity", "west", "-fill", "black"]));
    assert!(cmd.contains_seq(&["-annotate", "+100-750", "S01E02", "-fill", "gold"]));
    assert_eq!(cmd.output(), Some("/out/card.jpg"));
}

#[test]
fn hidden_episode_text_is_not_drawn() {
    let mut f = fields("Pilot").with_index("", "S01E02");
    f.hide_episode_text = true;
    let cmds = render(&WhiteTextBroadcast::new(f), RecordingRunner::new());
    assert!(!cmds[0].contains_seq(&["-annotate", "+100-750", "S01E02"]));
}
