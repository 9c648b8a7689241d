//! White title text over a bottom gradient, in three variants.
//!
//! Every variant is a pipeline of `convert` runs chained through a scratch
//! directory: the gradient is flattened onto the source first, then the title
//! is drawn, then (for the standard and absolute variants) the index text.

use std::path::Path;

use crate::{
    cards::base::{
        CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_EPISODE_TEXT_FORMAT,
        STANDARD_FONT_ATTRS, SeasonTitlePolicy,
    },
    font::FontAttr,
    foundation::error::CardResult,
    magick::command::{Fragments, MagickCommand, args, escape_text},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

pub(super) const TITLE_FONT: RefAsset = RefAsset::remote("Wdvh", "TerminalDosis-Bold.ttf");
pub(super) const COUNT_FONT: RefAsset = RefAsset::Local("Sequel-Neue.otf");
pub(super) const STROKE_COLOR: &str = "#062A40";
const GRADIENT: RefAsset = RefAsset::Local("GRADIENT.png");
const ABSOLUTE_GRADIENT: RefAsset = RefAsset::remote("Wdvh", "GRADIENTABS.png");

pub(super) const WDVH_FONT_ATTRS: &[FontAttr] = &[
    FontAttr::File,
    FontAttr::Size,
    FontAttr::Color,
    FontAttr::Replacements,
    FontAttr::VerticalShift,
    FontAttr::InterlineSpacing,
    FontAttr::Kerning,
    FontAttr::StrokeWidth,
];

/// Metadata shared by the white text family; only the naming and season
/// handling differ between variants.
pub(super) const fn wdvh_info(
    identifier: &'static str,
    archive_name: &'static str,
    episode_text_format: &'static str,
    uses_season_title: bool,
    custom_font_attrs: &'static [FontAttr],
    season_title_policy: SeasonTitlePolicy,
) -> CardInfo {
    CardInfo {
        identifier,
        archive_name,
        title_characteristics: SplitCharacteristics::new(32, 3, SplitStyle::Bottom),
        title_font: TITLE_FONT,
        title_color: "#FFFFFF",
        default_font_case: FontCase::Source,
        font_replacements: &[],
        episode_text_format,
        uses_season_title,
        custom_font_attrs,
        season_title_policy,
    }
}

pub static STANDARD_INFO: CardInfo = wdvh_info(
    "white-text-standard",
    "White Text Standard Style",
    STANDARD_EPISODE_TEXT_FORMAT,
    true,
    WDVH_FONT_ATTRS,
    SeasonTitlePolicy::FormatOrMap,
);

pub static ABSOLUTE_INFO: CardInfo = wdvh_info(
    "white-text-absolute",
    "White Text Absolute Ordering Style",
    "E{abs_number:02}",
    false,
    WDVH_FONT_ATTRS,
    SeasonTitlePolicy::Never,
);

pub static TITLE_ONLY_INFO: CardInfo = wdvh_info(
    "white-text-title-only",
    "White Text Title Only Style",
    STANDARD_EPISODE_TEXT_FORMAT,
    false,
    STANDARD_FONT_ATTRS,
    SeasonTitlePolicy::Never,
);

pub(super) fn default_separator() -> String {
    "-".to_string()
}

/// Bottom-centred title with a navy stroke pass then a fill pass.
pub(super) fn title_fragments(
    ctx: &RenderContext<'_>,
    info: &CardInfo,
    fields: &CardFields,
    interline_base: i32,
    offset: i32,
) -> Fragments {
    let font = &fields.font;
    let geometry = format!("+0+{}", offset + font.vertical_shift);
    let title = fields.title();
    args![
        "-font",
        ctx.title_font(info, font),
        "-kerning",
        -1.25 * font.kerning,
        "-interword-spacing",
        50,
        "-interline-spacing",
        interline_base + font.interline_spacing,
        "-pointsize",
        180.0 * font.size,
        "-gravity",
        "south",
        "-fill",
        "white",
        "-stroke",
        STROKE_COLOR,
        "-strokewidth",
        4.0 * font.stroke_width,
        "-annotate",
        geometry,
        title,
        "-fill",
        font.color_or(info),
        "-annotate",
        geometry,
        title,
    ]
}

/// Stroke and fill of index text; both passes use the same operators.
pub(super) fn count_stroke() -> Fragments {
    args!["-fill", "white", "-stroke", STROKE_COLOR, "-strokewidth", 2]
}

/// `text` annotated twice at `geometry` with the index text stroke.
pub(super) fn count_annotations(geometry: &str, text: &str) -> Fragments {
    let mut out = count_stroke();
    out.extend(args!["-annotate", geometry, text]);
    out.extend(count_stroke());
    out.extend(args!["-annotate", geometry, text]);
    out
}

/// Source resized and styled with `gradient` flattened on top, written to `out`.
fn gradient_command(
    ctx: &RenderContext<'_>,
    fields: &CardFields,
    gradient: &RefAsset,
    out: &Path,
) -> MagickCommand {
    let mut cmd = MagickCommand::new();
    cmd.file(&fields.source_file)
        .extend(ctx.resize_and_style(fields.style))
        .arg(ctx.asset(gradient))
        .args(["-background", "None", "-layers", "Flatten"])
        .file(out);
    cmd
}

/// `input` with the title drawn, written to `out`.
fn title_command(
    ctx: &RenderContext<'_>,
    info: &CardInfo,
    fields: &CardFields,
    input: &Path,
    (interline_base, offset): (i32, i32),
) -> MagickCommand {
    let mut cmd = MagickCommand::new();
    cmd.file(input)
        .extend(title_fragments(ctx, info, fields, interline_base, offset));
    cmd
}

/// Gradient, title, and centred `SEASON - EPISODE` text near the bottom.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhiteTextStandard {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl WhiteTextStandard {
    pub fn new(fields: CardFields) -> Self {
        Self {
            fields,
            separator: default_separator(),
        }
    }
}

impl CardType for WhiteTextStandard {
    fn info(&self) -> &'static CardInfo {
        &STANDARD_INFO
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
        let gradient_image = scratch.path().join("source_gradient.png");
        let titled_image = scratch.path().join("gradient_title.png");

        let cmd = gradient_command(ctx, f, &GRADIENT, &gradient_image);
        ctx.run(&cmd)?;

        let mut cmd = title_command(ctx, &STANDARD_INFO, f, &gradient_image, (-70, 145));
        cmd.file(&titled_image);
        ctx.run(&cmd)?;

        let count_text = if f.hide_season() {
            f.episode()
        } else {
            format!(
                "{} {} {}",
                f.season(),
                escape_text(&self.separator),
                f.episode()
            )
        };
        let mut cmd = MagickCommand::new();
        cmd.file(&titled_image)
            .extend(args![
                "-kerning",
                5.42,
                "-pointsize",
                85,
                "-font",
                ctx.asset(&COUNT_FONT),
                "-gravity",
                "center",
            ])
            .extend(count_annotations("+0+800", &count_text))
            .extend(ctx.resize_output())
            .file(&f.card_file);
        ctx.run(&cmd)
    }
}

/// Absolute-ordering variant: episode text only, in the top left.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhiteTextAbsolute {
    #[serde(flatten)]
    pub fields: CardFields,
}

impl WhiteTextAbsolute {
    pub fn new(fields: CardFields) -> Self {
        Self { fields }
    }
}

impl CardType for WhiteTextAbsolute {
    fn info(&self) -> &'static CardInfo {
        &ABSOLUTE_INFO
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
        let gradient_image = scratch.path().join("source_gradient.png");
        let titled_image = scratch.path().join("gradient_title.png");

        let cmd = gradient_command(ctx, f, &ABSOLUTE_GRADIENT, &gradient_image);
        ctx.run(&cmd)?;

        let mut cmd = title_command(ctx, &ABSOLUTE_INFO, f, &gradient_image, (-17, 50));
        cmd.file(&titled_image);
        ctx.run(&cmd)?;

        let mut cmd = MagickCommand::new();
        cmd.file(&titled_image);
        if !f.hide_episode() {
            cmd.extend(args![
                "-kerning",
                5.42,
                "-pointsize",
                120,
                "-font",
                ctx.asset(&COUNT_FONT),
                "-gravity",
                "west",
            ])
            .extend(count_annotations("+100-750", &f.episode()));
        }
        cmd.extend(ctx.resize_output()).file(&f.card_file);
        ctx.run(&cmd)
    }
}

/// Gradient and title, no index text.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhiteTextTitleOnly {
    #[serde(flatten)]
    pub fields: CardFields,
}

impl WhiteTextTitleOnly {
    pub fn new(fields: CardFields) -> Self {
        Self { fields }
    }
}

impl CardType for WhiteTextTitleOnly {
    fn info(&self) -> &'static CardInfo {
        &TITLE_ONLY_INFO
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
        let gradient_image = scratch.path().join("source_gradient.png");

        let cmd = gradient_command(ctx, f, &GRADIENT, &gradient_image);
        ctx.run(&cmd)?;

        let mut cmd = title_command(ctx, &TITLE_ONLY_INFO, f, &gradient_image, (-17, 50));
        cmd.extend(ctx.resize_output()).file(&f.card_file);
        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/white_text.rs"]
mod tests;
