use crate::{
    cards::base::{
        CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_EPISODE_TEXT_FORMAT,
        STANDARD_FONT_ATTRS, STANDARD_REPLACEMENTS, SeasonTitlePolicy,
    },
    foundation::{core::Dimensions, error::CardResult},
    magick::command::{MagickCommand, args, path_arg},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

pub static INFO: CardInfo = CardInfo {
    identifier: "standard-all-bold",
    archive_name: "All Bold Style",
    title_characteristics: SplitCharacteristics::new(32, 3, SplitStyle::Bottom),
    title_font: RefAsset::Local("Sequel-Neue.otf"),
    title_color: "#EBEBEB",
    default_font_case: FontCase::Source,
    font_replacements: STANDARD_REPLACEMENTS,
    episode_text_format: STANDARD_EPISODE_TEXT_FORMAT,
    uses_season_title: true,
    custom_font_attrs: STANDARD_FONT_ATTRS,
    season_title_policy: SeasonTitlePolicy::FormatOrMap,
};

const COUNT_FONT: RefAsset = RefAsset::Local("Proxima Nova Semibold.otf");
const COUNT_COLOR: &str = "#CFCFCF";
const GRADIENT: RefAsset = RefAsset::Local("GRADIENT.png");

/// The standard layout with bold season and episode text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StandardAllBold {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    "•".to_string()
}

impl StandardAllBold {
    pub fn new(fields: CardFields) -> Self {
        Self {
            fields,
            separator: default_separator(),
        }
    }

    fn count_text(&self) -> String {
        let f = &self.fields;
        if f.hide_season() {
            f.episode()
        } else {
            format!("{} {} {}", f.season(), self.separator, f.episode())
        }
    }
}

impl CardType for StandardAllBold {
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
        let font = &f.font;
        let size = Dimensions::card();
        let shift = 245 + font.vertical_shift;
        let title = f.title();
        let count = self.count_text();

        let mut cmd = MagickCommand::new();
        // this card never applied grayscale, only blur
        cmd.file(&f.source_file)
            .extend(args![
                "+profile",
                "*",
                "-gravity",
                "center",
                "-resize",
                format!("{size}^"),
                "-extent",
                size,
            ]);
        if f.style.blur {
            cmd.extend(args!["-blur", ctx.settings.blur_profile]);
        }
        cmd.arg(ctx.asset(&GRADIENT))
            .arg("-composite")
            .extend(args![
                "-font",
                ctx.title_font(&INFO, font),
                "-kerning",
                -1.25 * font.kerning,
                "-interword-spacing",
                50,
                "-interline-spacing",
                -22 + font.interline_spacing,
                "-pointsize",
                157.41 * font.size,
                "-gravity",
                "south",
                "-fill",
                "black",
                "-stroke",
                "black",
                "-strokewidth",
                3.0 * font.stroke_width,
                "-annotate",
                format!("+0+{shift}"),
                title,
                "-fill",
                font.color_or(&INFO),
                "-annotate",
                format!("+0+{shift}"),
                title,
            ])
            .extend(args![
                "-font",
                ctx.asset(&COUNT_FONT),
                "-kerning",
                5.42,
                "-pointsize",
                67.75,
                "-gravity",
                "center",
                "+interword-spacing",
                "-fill",
                "black",
                "-stroke",
                "black",
                "-strokewidth",
                6,
                "-annotate",
                "+0+697.2",
                count,
                "-fill",
                COUNT_COLOR,
                "-stroke",
                COUNT_COLOR,
                "-strokewidth",
                0.75,
                "-annotate",
                "+0+697.2",
                count,
            ])
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));

        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/standard_all_bold.rs"]
mod tests;
