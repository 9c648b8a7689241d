use crate::{
    cards::base::{
        CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_EPISODE_TEXT_FORMAT,
        STANDARD_FONT_ATTRS, STANDARD_REPLACEMENTS, SeasonTitlePolicy,
    },
    foundation::error::CardResult,
    magick::command::{Fragments, MagickCommand, args, path_arg},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

const TITLE_FONT: RefAsset = RefAsset::remote("Yozora", "ref/slim/Comfortaa-Regular.ttf");
const GRADIENT: RefAsset = RefAsset::remote("Yozora", "ref/slim/GRADIENT.png");
const SEASON_COUNT_FONT: RefAsset = RefAsset::remote("Yozora", "ref/slim/Comfortaa-SemiBold.ttf");
const EPISODE_COUNT_FONT: RefAsset = TITLE_FONT;
const COUNT_COLOR: &str = "#a5a5a5";

pub static INFO: CardInfo = CardInfo {
    identifier: "slim",
    archive_name: "Slim Style",
    title_characteristics: SplitCharacteristics::new(45, 3, SplitStyle::Bottom),
    title_font: TITLE_FONT,
    title_color: "#FFFFFF",
    default_font_case: FontCase::Source,
    font_replacements: STANDARD_REPLACEMENTS,
    episode_text_format: STANDARD_EPISODE_TEXT_FORMAT,
    uses_season_title: true,
    custom_font_attrs: STANDARD_FONT_ATTRS,
    season_title_policy: SeasonTitlePolicy::ExactFormatOrMap,
};

/// Thin-stroked title low on the card with small grey index text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slim {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default)]
    pub omit_gradient: bool,
}

fn count_effects() -> Fragments {
    args!["-kerning", 5.42, "-pointsize", 67.75]
}

fn black_stroke() -> Fragments {
    args!["-fill", "black", "-stroke", "black", "-strokewidth", 6]
}

fn count_fill() -> Fragments {
    args![
        "-fill",
        COUNT_COLOR,
        "-stroke",
        COUNT_COLOR,
        "-strokewidth",
        0.75
    ]
}

impl Slim {
    pub fn new(fields: CardFields) -> Self {
        Self {
            fields,
            omit_gradient: false,
        }
    }

    fn title_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let font = &self.fields.font;
        let geometry = format!("+0+{}", 100 + font.vertical_shift);
        let title = self.fields.title();
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
            "south",
            "-fill",
            "black",
            "-stroke",
            "black",
            "-strokewidth",
            font.stroke_width,
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

    /// One centred line of index text in `font`.
    fn single_index(ctx: &RenderContext<'_>, font: &RefAsset, text: &str) -> Fragments {
        let mut out = count_effects();
        out.extend(args!["-font", ctx.asset(font), "-gravity", "center"]);
        out.extend(black_stroke());
        out.extend(args!["-annotate", "+0+697.2", text]);
        out.extend(count_fill());
        out.extend(args!["-annotate", "+0+697.2", text]);
        out
    }

    /// Season and episode labels smushed together, `smush` pixels apart.
    fn label_group(
        ctx: &RenderContext<'_>,
        season: &str,
        episode: &str,
        stroke: Fragments,
        smush: u32,
    ) -> Fragments {
        let mut out = args!["("];
        out.extend(count_effects());
        out.extend(stroke);
        out.extend(args![
            "-font",
            ctx.asset(&SEASON_COUNT_FONT),
            format!("label:{season}"),
            "label:• ",
            "-font",
            ctx.asset(&EPISODE_COUNT_FONT),
            format!("label:{episode}"),
            "+smush",
            smush,
            ")",
            "-geometry",
            "+0+35",
            "-composite",
        ]);
        out
    }

    fn index_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let f = &self.fields;
        match (f.hide_season(), f.hide_episode()) {
            (true, true) => Fragments::new(),
            (true, false) => Self::single_index(ctx, &EPISODE_COUNT_FONT, &f.episode()),
            (false, true) => Self::single_index(ctx, &SEASON_COUNT_FONT, &f.season()),
            (false, false) => {
                let (season, episode) = (f.season(), f.episode());
                let mut out = args![
                    "-background",
                    "transparent",
                    "+interword-spacing",
                    "-gravity",
                    "south",
                ];
                out.extend(Self::label_group(ctx, &season, &episode, black_stroke(), 15));
                out.extend(Self::label_group(ctx, &season, &episode, count_fill(), 18));
                out
            }
        }
    }
}

impl CardType for Slim {
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
        cmd.file(&f.source_file).extend(ctx.resize_and_style(f.style));
        if !self.omit_gradient {
            cmd.arg(ctx.asset(&GRADIENT)).arg("-composite");
        }
        cmd.extend(self.title_fragments(ctx))
            .extend(self.index_fragments(ctx))
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));
        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/slim.rs"]
mod tests;
