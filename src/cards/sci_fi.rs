use crate::{
    cards::base::{
        CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_REPLACEMENTS,
        SeasonTitlePolicy,
    },
    font::FontAttr,
    foundation::error::{CardError, CardResult},
    magick::command::{Fragments, MagickCommand, args, escape_text, path_arg},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

pub static INFO: CardInfo = CardInfo {
    identifier: "sci-fi",
    archive_name: "Sci-Fi Style",
    title_characteristics: SplitCharacteristics::new(20, 3, SplitStyle::Bottom),
    title_font: FONT,
    title_color: "white",
    default_font_case: FontCase::Source,
    font_replacements: STANDARD_REPLACEMENTS,
    episode_text_format: "S{season_number:02}E{episode_number:02}",
    uses_season_title: true,
    custom_font_attrs: &[
        FontAttr::Color,
        FontAttr::File,
        FontAttr::InterlineSpacing,
        FontAttr::InterwordSpacing,
        FontAttr::Size,
    ],
    season_title_policy: SeasonTitlePolicy::FormatOrMap,
};

const FONT: RefAsset = RefAsset::remote("azuravian", "ref/SciFi/PcapTerminal-BO9B.ttf");
const COUNT_COLOR: &str = "white";

const OVERLAY_BASE: RefAsset = RefAsset::remote("azuravian", "ref/SciFi/Base.png");
const OVERLAY_BOTTOM: RefAsset = RefAsset::remote("azuravian", "ref/SciFi/Bottom.png");
const OVERLAY_MIDDLE: RefAsset = RefAsset::remote("azuravian", "ref/SciFi/Middle.png");
const OVERLAY_TOP: RefAsset = RefAsset::remote("azuravian", "ref/SciFi/Top.png");
const OVERLAY_RECTANGLES: RefAsset = RefAsset::remote("azuravian", "ref/SciFi/Rectangles.png");

/// HUD-style overlays with a terminal font title.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SciFi {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    #[serde(default = "default_bottom_color")]
    pub overlay_bottom_color: String,
    #[serde(default = "default_middle_color")]
    pub overlay_middle_color: String,
    #[serde(default = "default_top_color")]
    pub overlay_top_color: String,
    #[serde(default = "default_rectangles_color")]
    pub overlay_rectangles_color: String,
    #[serde(default = "default_base_alpha")]
    pub overlay_base_alpha: f64,
    #[serde(default = "default_overlay_alpha")]
    pub overlay_bottom_alpha: f64,
    #[serde(default = "default_overlay_alpha")]
    pub overlay_middle_alpha: f64,
    #[serde(default = "default_overlay_alpha")]
    pub overlay_top_alpha: f64,
    #[serde(default = "default_overlay_alpha")]
    pub overlay_rectangles_alpha: f64,
}

fn default_stroke_color() -> String {
    "black".to_string()
}

fn default_bottom_color() -> String {
    "rgb(58, 255, 255)".to_string()
}

fn default_middle_color() -> String {
    "rgb(255, 255, 255)".to_string()
}

fn default_top_color() -> String {
    "rgb(255, 49, 255)".to_string()
}

fn default_rectangles_color() -> String {
    "rgb(102, 211, 122)".to_string()
}

fn default_base_alpha() -> f64 {
    1.0
}

fn default_overlay_alpha() -> f64 {
    0.6
}

impl SciFi {
    pub fn new(fields: CardFields) -> Self {
        Self {
            fields,
            stroke_color: default_stroke_color(),
            overlay_bottom_color: default_bottom_color(),
            overlay_middle_color: default_middle_color(),
            overlay_top_color: default_top_color(),
            overlay_rectangles_color: default_rectangles_color(),
            overlay_base_alpha: default_base_alpha(),
            overlay_bottom_alpha: default_overlay_alpha(),
            overlay_middle_alpha: default_overlay_alpha(),
            overlay_top_alpha: default_overlay_alpha(),
            overlay_rectangles_alpha: default_overlay_alpha(),
        }
    }

    /// Episode text without its leading word, so `EPISODE 4` draws as `4`.
    fn episode_number_text(&self) -> String {
        let upper = self.fields.episode_text().to_uppercase();
        let text = upper.split_once(' ').map_or(upper.as_str(), |(_, rest)| rest);
        escape_text(text)
    }

    fn title_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let font = &self.fields.font;
        let shift = 250 + font.vertical_shift;
        args![
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
            "southeast",
            "-strokewidth",
            3.0 * font.stroke_width,
            "-stroke",
            self.stroke_color,
            "-fill",
            font.color_or(&INFO),
            "-annotate",
            format!("+200+{shift}"),
            format!("{}_", self.fields.title()),
        ]
    }

    fn index_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let f = &self.fields;
        let stroke_width = 3.0 * f.font.stroke_width;
        let single = |text: String| {
            args![
                "-kerning",
                5.42,
                "-pointsize",
                67.75,
                "-font",
                ctx.asset(&FONT),
                "-gravity",
                "northwest",
                "-fill",
                COUNT_COLOR,
                "-strokewidth",
                stroke_width,
                "-stroke",
                self.stroke_color,
                "-annotate",
                "+160+100",
                text,
            ]
        };

        match (f.hide_season(), f.hide_episode()) {
            (true, true) => Fragments::new(),
            (true, false) => single(self.episode_number_text()),
            (false, true) => single(f.season()),
            (false, false) => args![
                "-background",
                "transparent",
                "+interword-spacing",
                "-kerning",
                5.42,
                "-pointsize",
                67.75,
                "-fill",
                COUNT_COLOR,
                "-strokewidth",
                stroke_width,
                "-stroke",
                self.stroke_color,
                "(",
                "-gravity",
                "center",
                "-font",
                ctx.asset(&FONT),
                format!("label:{}", f.season()),
                "-font",
                ctx.asset(&FONT),
                format!("label:{}", self.episode_number_text()),
                "+smush",
                5.42,
                ")",
                "-gravity",
                "northwest",
                "-geometry",
                "+160+100",
                "-composite",
            ],
        }
    }
}

/// Recolour one HUD layer and fade it by `alpha`.
fn overlay_hud(
    ctx: &RenderContext<'_>,
    overlay: &RefAsset,
    color: &str,
    alpha: f64,
) -> CardResult<Fragments> {
    if !(alpha > 0.0 && alpha.is_finite()) {
        return Err(CardError::validation(format!(
            "overlay alpha must be positive, got {alpha}"
        )));
    }
    Ok(args![
        "(",
        ctx.asset(overlay),
        "-fill",
        color,
        "-colorize",
        "100%",
        "-alpha",
        "set",
        "-channel",
        "A",
        "-evaluate",
        "Divide",
        1.0 / alpha,
        ")",
        "-composite",
    ])
}

impl CardType for SciFi {
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
        let layers = [
            (&OVERLAY_BASE, "black", self.overlay_base_alpha),
            (&OVERLAY_BOTTOM, self.overlay_bottom_color.as_str(), self.overlay_bottom_alpha),
            (&OVERLAY_MIDDLE, self.overlay_middle_color.as_str(), self.overlay_middle_alpha),
            (&OVERLAY_TOP, self.overlay_top_color.as_str(), self.overlay_top_alpha),
            (
                &OVERLAY_RECTANGLES,
                self.overlay_rectangles_color.as_str(),
                self.overlay_rectangles_alpha,
            ),
        ];

        let mut cmd = MagickCommand::new();
        cmd.file(&f.source_file).extend(ctx.resize_and_style(f.style));
        for (overlay, color, alpha) in layers {
            cmd.extend(overlay_hud(ctx, overlay, color, alpha)?);
        }
        cmd.extend(self.title_fragments(ctx))
            .extend(self.index_fragments(ctx))
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));

        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/sci_fi.rs"]
mod tests;
