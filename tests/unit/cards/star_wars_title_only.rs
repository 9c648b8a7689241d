use super::*;
use crate::cards::support::{fields, render};
use crate::font::is_custom_font;
use crate::magick::runner::RecordingRunner;

#[test]
fn upper_case_title_over_star_gradient() {
    let card = StarWarsTitleOnly::new(fields("A New Hope").with_index("Season 1", "Episode 4"));
    let cmds = render(&card, RecordingRunner::new());
    assert_eq!(cmds.len(), 1);
    let cmd = &cmds[0];
    assert!(cmd.contains_seq(&["/ref/Wdvh/star_gradient_title_only.png", "-composite"]));
    assert!(cmd.contains_seq(&["-font", "/ref/star_wars/Monstice-Base.ttf", "-gravity", "northwest"]));
    assert!(cmd.contains_seq(&["-pointsize", "124", "-kerning", "0.5", "-interline-spacing", "20"]));
    assert!(cmd.contains_seq(&["-fill", "#DAC960", "-annotate", "+320+1529", "A NEW HOPE"]));
    assert!(!cmd.contains_seq(&["EPISODE 4"]));
}

#[test]
fn series_fonts_are_never_custom() {
    let mut font = crate::font::Font::default();
    font.size = 2.0;
    assert!(!is_custom_font(&INFO, &font, std::path::Path::new("/ref")));
}
