use super::*;
use crate::cards::support::{settings, write_png};
use crate::foundation::{core::Dimensions, error::CardError};
use crate::magick::{command::MagickCommand, runner::RecordingRunner};

fn spec(value: serde_json::Value) -> CardSpec {
    serde_json::from_value(value).unwrap()
}

#[test]
fn every_identifier_deserializes_to_its_card() {
    let infos = all_infos();
    assert_eq!(infos.len(), 16);
    for info in infos {
        let card = spec(serde_json::json!({
            "card_type": info.identifier,
            "source_file": "/src/source.jpg",
            "card_file": "/out/card.jpg",
            "title_text": "Pilot",
            "logo_file": "/logo.png",
        }));
        assert_eq!(card.info().identifier, info.identifier);
        assert!(std::ptr::eq(info_for(info.identifier).unwrap(), info));
    }
    assert!(info_for("olivier").is_none());
}

#[test]
fn card_attributes_are_read_from_the_same_object() {
    let card = spec(serde_json::json!({
        "card_type": "slim",
        "card_file": "/out/card.jpg",
        "title_text": "Pilot",
        "season_text": "Season 2",
        "blur": true,
        "omit_gradient": true,
        "font": { "size": 1.5, "color": "red" },
    }));
    let CardSpec::Slim(slim) = card else {
        panic!("expected a slim card");
    };
    assert!(slim.omit_gradient);
    assert!(slim.fields.style.blur);
    assert!(!slim.fields.style.grayscale);
    assert_eq!(slim.fields.season_text, "Season 2");
    assert_eq!(slim.fields.font.size, 1.5);
    assert_eq!(slim.fields.font.color.as_deref(), Some("red"));
}

#[test]
fn unknown_card_type_is_rejected() {
    let err = serde_json::from_value::<CardSpec>(serde_json::json!({
        "card_type": "olivier",
        "card_file": "/out/card.jpg",
        "title_text": "Pilot",
    }));
    assert!(err.is_err());
}

#[test]
fn title_is_replaced_cased_and_split() {
    let card = spec(serde_json::json!({
        "card_type": "blacklist",
        "card_file": "/out/card.jpg",
        "title_text": "the long goodbye (part one) [again]",
    }));
    assert_eq!(format_title(card.as_card()), "THE LONG\nGOODBYE (PART\nONE) [AGAIN]");

    let card = spec(serde_json::json!({
        "card_type": "blacklist",
        "card_file": "/out/card.jpg",
        "title_text": "Pilot (1)",
        "font": { "case": "source", "replacements": { "(": "[", ")": "]" } },
    }));
    assert_eq!(format_title(card.as_card()), "Pilot [1]");
}

#[test]
fn render_requires_the_source_image() {
    let card = spec(serde_json::json!({
        "card_type": "retro",
        "source_file": "/nonexistent/source.jpg",
        "card_file": "/out/card.jpg",
        "title_text": "Pilot",
    }));
    let settings = settings();
    let mut runner = RecordingRunner::new();
    let mut ctx = RenderContext::new(&mut runner, &settings);
    let err = render_card(card, &mut ctx).unwrap_err();
    assert!(matches!(err, CardError::MissingAsset { what: "source image", .. }));
    assert!(runner.commands().is_empty());
}

#[test]
fn render_formats_the_title_before_creating() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    write_png(&source, 8, 8);

    let card = spec(serde_json::json!({
        "card_type": "star-wars-title-only",
        "source_file": source,
        "card_file": "/out/card.jpg",
        "title_text": "Ōkami Returns Home Tonight",
    }));
    let settings = settings();
    let mut runner = RecordingRunner::new();
    let mut ctx = RenderContext::new(&mut runner, &settings);
    render_card(card, &mut ctx).unwrap();

    let cmds = runner.into_commands();
    assert_eq!(cmds.len(), 1);
    assert!(cmds[0].contains_seq(&["+320+1529", "OKAMI RETURNS\nHOME TONIGHT"]));
}

#[test]
fn logo_cards_do_not_need_a_source_image() {
    let dir = tempfile::tempdir().unwrap();
    let logo = dir.path().join("logo.png");
    write_png(&logo, 8, 8);

    let card = spec(serde_json::json!({
        "card_type": "white-text-title-only-logo",
        "card_file": "/out/card.jpg",
        "title_text": "Pilot",
        "logo": logo,
    }));
    let settings = settings();
    let mut runner = RecordingRunner::new().with_fallback_dimensions(Dimensions::new(8, 8));
    let mut ctx = RenderContext::new(&mut runner, &settings);
    render_card(card, &mut ctx).unwrap();
    assert_eq!(runner.commands().len(), 3);
}

#[test]
fn extras_are_only_modified_for_cards_with_rules() {
    let mut extras = serde_json::Map::new();
    extras.insert("frame_color".to_string(), serde_json::json!("red"));

    modify_extras("sci-fi", &mut extras, false, false);
    assert_eq!(extras["frame_color"], "red");

    modify_extras("tinted-frame-plus", &mut extras, false, true);
    assert_eq!(extras["frame_color"], "white");
}

fn render_args(mut value: serde_json::Value) -> Vec<String> {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.png");
    write_png(&source, 8, 8);
    value["source_file"] = serde_json::json!(source);
    value["card_file"] = serde_json::json!("/out/card.jpg");

    let settings = settings();
    let mut runner = RecordingRunner::new();
    let mut ctx = RenderContext::new(&mut runner, &settings);
    render_card(spec(value), &mut ctx).unwrap();
    runner
        .into_commands()
        .into_iter()
        .flat_map(MagickCommand::into_args)
        .collect()
}

#[test]
fn absent_episode_text_comes_from_the_card_format() {
    let args = render_args(serde_json::json!({
        "card_type": "blacklist",
        "title_text": "Pilot",
        "episode_number": 7,
    }));
    assert_eq!(args[args.len() - 3..], ["+150+400", "NO. 7", "/out/card.jpg"]);

    let args = render_args(serde_json::json!({
        "card_type": "white-text-broadcast",
        "title_text": "Pilot",
        "season_number": 2,
        "episode_number": 7,
    }));
    assert!(args.iter().any(|a| a == "S02E07"));
}

#[test]
fn absolute_format_falls_back_to_the_episode_number() {
    let source = serde_json::json!({
        "card_type": "white-text-absolute",
        "title_text": "Pilot",
        "episode_number": 7,
    });
    let mut with_abs = source.clone();
    with_abs["abs_number"] = serde_json::json!(113);

    assert!(render_args(source).iter().any(|a| a == "E07"));
    assert!(render_args(with_abs).iter().any(|a| a == "E113"));
}

#[test]
fn explicit_episode_text_is_kept() {
    let args = render_args(serde_json::json!({
        "card_type": "blacklist",
        "title_text": "Pilot",
        "episode_text": "Chapter 7",
    }));
    assert!(args.iter().any(|a| a == "CHAPTER 7"));
    assert!(!args.iter().any(|a| a.starts_with("NO.")));
}
