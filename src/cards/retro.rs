use std::str::FromStr;

use serde::Deserialize as _;

use crate::{
    cards::base::{
        CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_FONT_ATTRS,
        STANDARD_REPLACEMENTS, SeasonTitlePolicy,
    },
    foundation::error::CardResult,
    magick::command::{Fragments, MagickCommand, args, path_arg},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

const TITLE_FONT: RefAsset = RefAsset::remote("Yozora", "ref/retro/retro.ttf");
const PLAY_GRADIENT: RefAsset = RefAsset::remote("Yozora", "ref/retro/gradient_play.png");
const REWIND_GRADIENT: RefAsset = RefAsset::remote("Yozora", "ref/retro/gradient_rewind.png");

pub static INFO: CardInfo = CardInfo {
    identifier: "retro",
    archive_name: "Retro Style",
    title_characteristics: SplitCharacteristics::new(32, 3, SplitStyle::Bottom),
    title_font: TITLE_FONT,
    title_color: "#FFFFFF",
    default_font_case: FontCase::Source,
    font_replacements: STANDARD_REPLACEMENTS,
    episode_text_format: "S{season_number:02}E{episode_number:02}",
    uses_season_title: true,
    custom_font_attrs: STANDARD_FONT_ATTRS,
    season_title_policy: SeasonTitlePolicy::Never,
};

/// Overlay drawn over the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetroStyle {
    Rewind,
    Play,
}

impl FromStr for RetroStyle {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rewind" => Ok(Self::Rewind),
            "play" => Ok(Self::Play),
            _ => Err(()),
        }
    }
}

/// Colour treatment of the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetroColor {
    Bw,
    Color,
}

impl FromStr for RetroColor {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bw" => Ok(Self::Bw),
            "color" => Ok(Self::Color),
            _ => Err(()),
        }
    }
}

/// Read an override in any case; empty or unrecognised values mean no override.
fn lenient_override<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        tracing::debug!(value = %raw, "ignoring unknown retro override");
    }
    Ok(parsed)
}

fn default_watched() -> bool {
    true
}

/// VHS themed card: watched episodes get the rewind overlay in grayscale,
/// unwatched ones the play overlay in colour, unless overridden.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Retro {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_watched")]
    pub watched: bool,
    #[serde(default, deserialize_with = "lenient_override")]
    pub override_style: Option<RetroStyle>,
    #[serde(default, deserialize_with = "lenient_override")]
    pub override_bw: Option<RetroColor>,
}

impl Retro {
    pub fn new(fields: CardFields) -> Self {
        Self {
            fields,
            watched: default_watched(),
            override_style: None,
            override_bw: None,
        }
    }

    pub fn style(&self) -> RetroStyle {
        match self.override_style {
            Some(style) => style,
            None if self.watched => RetroStyle::Rewind,
            None => RetroStyle::Play,
        }
    }

    pub fn color(&self) -> RetroColor {
        match self.override_bw {
            Some(color) => color,
            None if self.watched => RetroColor::Bw,
            None => RetroColor::Color,
        }
    }

    fn gradient_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let gradient = match self.style() {
            RetroStyle::Rewind => &REWIND_GRADIENT,
            RetroStyle::Play => &PLAY_GRADIENT,
        };
        let mut out = args![ctx.asset(gradient), "-composite"];
        if self.color() == RetroColor::Bw {
            out.extend(args!["-colorspace", "gray"]);
        }
        out
    }

    fn title_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let font = &self.fields.font;
        let geometry = format!("+229+{}", 170 + font.vertical_shift);
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
            150.0 * font.size,
            "-gravity",
            "southwest",
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
            100,
            "-font",
            ctx.asset(&TITLE_FONT),
            "-gravity",
            "northeast",
            "-fill",
            "black",
            "-stroke",
            "black",
            "-strokewidth",
            6,
            "-annotate",
            "+200+229",
            episode,
            "-fill",
            "white",
            "-stroke",
            "black",
            "-strokewidth",
            0.75,
            "-annotate",
            "+200+229",
            episode,
        ]
    }
}

impl CardType for Retro {
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
            .extend(self.gradient_fragments(ctx))
            .extend(self.title_fragments(ctx))
            .extend(self.index_fragments(ctx))
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));
        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/retro.rs"]
mod tests;
