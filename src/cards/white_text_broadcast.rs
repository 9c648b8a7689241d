use crate::{
    cards::{
        base::{
            CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_REPLACEMENTS,
            SeasonTitlePolicy,
        },
        white_text::WDVH_FONT_ATTRS,
    },
    foundation::error::CardResult,
    magick::command::{Fragments, MagickCommand, args, path_arg},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

const TITLE_FONT: RefAsset = RefAsset::remote("lyonza", "TerminalDosis-Bold.ttf");
const GRADIENT: RefAsset = RefAsset::remote("lyonza", "GRADIENTABS.png");

pub static INFO: CardInfo = CardInfo {
    identifier: "white-text-broadcast",
    archive_name: "Broadcast Ordering Style",
    title_characteristics: SplitCharacteristics::new(32, 3, SplitStyle::Bottom),
    title_font: TITLE_FONT,
    title_color: "#FFFFFF",
    default_font_case: FontCase::Source,
    font_replacements: STANDARD_REPLACEMENTS,
    episode_text_format: "S{season_number:02}E{episode_number:02}",
    uses_season_title: true,
    custom_font_attrs: WDVH_FONT_ATTRS,
    season_title_policy: SeasonTitlePolicy::Never,
};

fn default_episode_text_color() -> String {
    "#FFFFFF".to_string()
}

/// White text with `SxxExx` episode text in the top left, in one command.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhiteTextBroadcast {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_episode_text_color")]
    pub episode_text_color: String,
}

impl WhiteTextBroadcast {
    pub fn new(fields: CardFields) -> Self {
        Self {
            fields,
            episode_text_color: default_episode_text_color(),
        }
    }

    fn title_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let font = &self.fields.font;
        let geometry = format!("+0+{}", 50 + font.vertical_shift);
        let title = self.fields.title();
        args![
            "-font",
            ctx.title_font(&INFO, font),
            "-kerning",
            -1.25 * font.kerning,
            "-interword-spacing",
            50,
            "-interline-spacing",
            -17 + font.interline_spacing,
            "-pointsize",
            180.0 * font.size,
            "-gravity",
            "south",
            "-fill",
            "black",
            "-stroke",
            "black",
            "-strokewidth",
            3.0 * font.stroke_width,
            "-annotate",
            geometry,
            title,
            "-fill",
            font.color_or(&INFO),
            "-annotate",
            geometry,
            title,
        ]
    }

    fn index_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        if self.fields.hide_episode() {
            return Fragments::new();
        }
        let episode = self.fields.episode();
        args![
            "-kerning",
            5.42,
            "-pointsize",
            120,
            "-font",
            ctx.asset(&TITLE_FONT),
            "-gravity",
            "west",
            "-fill",
            "black",
            "-stroke",
            "black",
            "-strokewidth",
            6,
            "-annotate",
            "+100-750",
            episode,
            "-fill",
            self.episode_text_color,
            "-stroke",
            "black",
            "-strokewidth",
            0.75,
            "-annotate",
            "+100-750",
            episode,
        ]
    }
}

impl CardType for WhiteTextBroadcast {
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
            .arg(ctx.asset(&GRADIENT))
            .arg("-composite")
            .extend(self.title_fragments(ctx))
            .extend(self.index_fragments(ctx))
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));
        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/white_text_broadcast.rs"]
mod tests;
