use crate::{
    cards::base::{CardFields, CardInfo, CardType, RefAsset, RenderContext, SeasonTitlePolicy},
    foundation::error::CardResult,
    magick::command::{MagickCommand, args, escape_text, path_arg},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

const TITLE_FONT: RefAsset = RefAsset::Local("star_wars/Monstice-Base.ttf");
const TITLE_COLOR: &str = "#DAC960";
const STAR_GRADIENT: RefAsset = RefAsset::remote("Wdvh", "star_gradient_title_only.png");

pub static INFO: CardInfo = CardInfo {
    identifier: "star-wars-title-only",
    archive_name: "Star Wars Title Only Style",
    title_characteristics: SplitCharacteristics::new(16, 5, SplitStyle::Top),
    title_font: TITLE_FONT,
    title_color: TITLE_COLOR,
    default_font_case: FontCase::Upper,
    font_replacements: &[("Ō", "O"), ("ō", "o")],
    episode_text_format: " ",
    uses_season_title: false,
    // the font is fixed, so no series font is ever custom
    custom_font_attrs: &[],
    season_title_policy: SeasonTitlePolicy::Never,
};

/// Upper-case gold title over a star field, without index text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StarWarsTitleOnly {
    #[serde(flatten)]
    pub fields: CardFields,
}

impl StarWarsTitleOnly {
    pub fn new(fields: CardFields) -> Self {
        Self { fields }
    }
}

impl CardType for StarWarsTitleOnly {
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
        let mut cmd = MagickCommand::new();
        cmd.file(&f.source_file)
            .extend(ctx.resize_and_style(f.style))
            .arg(ctx.asset(&STAR_GRADIENT))
            .arg("-composite")
            .extend(args![
                "-font",
                ctx.asset(&TITLE_FONT),
                "-gravity",
                "northwest",
                "-pointsize",
                124,
                "-kerning",
                0.5,
                "-interline-spacing",
                20,
                "-fill",
                TITLE_COLOR,
                "-annotate",
                "+320+1529",
                escape_text(&f.title_text.to_uppercase()),
            ])
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));
        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/star_wars_title_only.rs"]
mod tests;
