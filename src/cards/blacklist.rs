use crate::{
    cards::base::{CardFields, CardInfo, CardType, RefAsset, RenderContext, SeasonTitlePolicy},
    font::FontAttr,
    foundation::error::CardResult,
    magick::command::{MagickCommand, args, path_arg},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

pub static INFO: CardInfo = CardInfo {
    identifier: "blacklist",
    archive_name: "Blacklist Style",
    title_characteristics: SplitCharacteristics::new(15, 4, SplitStyle::Top),
    title_font: RefAsset::remote("CollinHeist", "blacklist/Blacklisted.ttf"),
    title_color: "rgb(177,21,10)",
    default_font_case: FontCase::Upper,
    font_replacements: &[],
    episode_text_format: "NO. {episode_number}",
    uses_season_title: false,
    custom_font_attrs: &[
        FontAttr::File,
        FontAttr::Size,
        FontAttr::Color,
        FontAttr::VerticalShift,
        FontAttr::InterlineSpacing,
        FontAttr::Kerning,
    ],
    season_title_policy: SeasonTitlePolicy::Never,
};

/// Title in the top left corner with the episode number beneath it.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Blacklist {
    #[serde(flatten)]
    pub fields: CardFields,
}

impl Blacklist {
    pub fn new(fields: CardFields) -> Self {
        Self { fields }
    }
}

impl CardType for Blacklist {
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
        let title = f.title();
        let lines = title.split('\n').count();
        let episode_offset = 150 + 250 * lines;

        let mut cmd = MagickCommand::new();
        cmd.file(&f.source_file)
            .extend(ctx.resize_and_style(f.style))
            .extend(args![
                "-font",
                ctx.title_font(&INFO, &f.font),
                "-fill",
                f.font.color_or(&INFO),
                "-interline-spacing",
                30 + f.font.interline_spacing,
                "-pointsize",
                230.0 * f.font.size,
                "-gravity",
                "northwest",
                "-annotate",
                "+150+150",
                title,
                "-pointsize",
                120,
                "-annotate",
                format!("+150+{episode_offset}"),
                f.episode(),
            ])
            .arg(path_arg(&f.card_file));

        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/blacklist.rs"]
mod tests;
