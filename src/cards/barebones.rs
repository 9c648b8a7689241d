use std::sync::LazyLock;

use regex::Regex;

use crate::{
    cards::base::{
        CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_EPISODE_TEXT_FORMAT,
        SeasonTitlePolicy,
    },
    font::FontAttr,
    foundation::error::CardResult,
    magick::command::{Fragments, MagickCommand, args, escape_text},
    text::{
        numbers::number_to_words,
        title::{FontCase, SplitCharacteristics, SplitStyle},
    },
};

static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)(\d+)$").expect("static regex"));

const EPISODE_TEXT_FONT: RefAsset =
    RefAsset::remote("Yozora", "ref/barebones/Montserrat-SemiBold.ttf");

pub static INFO: CardInfo = CardInfo {
    identifier: "barebones",
    archive_name: "Barebones Style",
    title_characteristics: SplitCharacteristics::new(16, 5, SplitStyle::Top),
    title_font: RefAsset::remote("Yozora", "ref/barebones/Montserrat-Bold.ttf"),
    title_color: "#FFFFFF",
    default_font_case: FontCase::Upper,
    font_replacements: &[],
    episode_text_format: STANDARD_EPISODE_TEXT_FORMAT,
    uses_season_title: false,
    custom_font_attrs: &[
        FontAttr::File,
        FontAttr::Size,
        FontAttr::Color,
        FontAttr::StrokeWidth,
    ],
    season_title_policy: SeasonTitlePolicy::FormatOnly,
};

fn default_episode_text_color() -> String {
    "#FFFFFF".to_string()
}

/// Spell out a trailing number, e.g. `Episode 21` becomes `EPISODE TWENTY-ONE`.
pub fn spell_episode_number(text: &str) -> String {
    let spelled = TRAILING_NUMBER.captures(text).and_then(|caps| {
        let number = caps[2].parse::<u64>().ok()?;
        Some(format!("{}{}", &caps[1], number_to_words(number)))
    });
    spelled.unwrap_or_else(|| text.to_string()).to_uppercase()
}

/// Plain upper-case title in the left third with spelled-out episode text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Barebones {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_episode_text_color")]
    pub episode_text_color: String,
}

impl Barebones {
    pub fn new(fields: CardFields) -> Self {
        Self {
            fields,
            episode_text_color: default_episode_text_color(),
        }
    }

    fn title_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let font = &self.fields.font;
        let color = font.color_or(&INFO);
        let title = escape_text(&self.fields.title_text.to_uppercase());
        args![
            "(",
            "-font",
            ctx.title_font(&INFO, font),
            "-gravity",
            "northwest",
            "-pointsize",
            124.0 * font.size,
            "-kerning",
            0.5,
            "-fill",
            "black",
            "-stroke",
            "black",
            "-strokewidth",
            6.0 * font.stroke_width,
            "-annotate",
            "+320+829",
            title,
            ")",
            "(",
            "-fill",
            color,
            "-stroke",
            color,
            "-strokewidth",
            0,
            "-annotate",
            "+320+829",
            title,
            ")",
        ]
    }

    fn episode_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let text = escape_text(&spell_episode_number(self.fields.episode_text()));
        let color = &self.episode_text_color;
        args![
            "-gravity",
            "west",
            "-font",
            ctx.asset(&EPISODE_TEXT_FONT),
            "-pointsize",
            53,
            "-kerning",
            19,
            "-fill",
            "black",
            "-stroke",
            "black",
            "-strokewidth",
            4.5,
            "-annotate",
            "+325-140",
            text,
            "-fill",
            color,
            "-stroke",
            color,
            "-strokewidth",
            0,
            "-annotate",
            "+325-140",
            text,
        ]
    }
}

impl CardType for Barebones {
    fn info(&self) -> &'static CardInfo {
        &INFO
    }

    fn fields(&self) -> &CardFields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut CardFields {
        &mut self.fields
    }

    fn create(&self, ctx: &mut RenderContext<'_>) -> CardResult<()> {
        let f = &self.fields;
        let scratch = ctx.scratch()?;
        let resized = scratch.path().join("resized_source.png");

        let mut cmd = MagickCommand::new();
        cmd.file(&f.source_file)
            .extend(ctx.resize_and_style(f.style))
            .file(&resized);
        ctx.run(&cmd)?;

        let mut cmd = MagickCommand::new();
        cmd.file(&resized).extend(self.title_fragments(ctx));
        if !f.hide_episode() {
            cmd.extend(self.episode_fragments(ctx));
        }
        cmd.extend(ctx.resize_output()).file(&f.card_file);
        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/barebones.rs"]
mod tests;
