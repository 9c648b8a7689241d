use std::path::{Path, PathBuf};

use crate::{
    cards::base::{
        CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_EPISODE_TEXT_FORMAT,
        STANDARD_REPLACEMENTS, SeasonTitlePolicy,
    },
    font::FontAttr,
    foundation::error::CardResult,
    magick::command::{Fragments, MagickCommand, args, path_arg},
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

pub static INFO: CardInfo = CardInfo {
    identifier: "gradient-logo",
    archive_name: "Gradient Logo Style",
    title_characteristics: SplitCharacteristics::new(32, 3, SplitStyle::Bottom),
    title_font: RefAsset::Local("Sequel-Neue.otf"),
    title_color: "#EBEBEB",
    default_font_case: FontCase::Source,
    font_replacements: STANDARD_REPLACEMENTS,
    episode_text_format: STANDARD_EPISODE_TEXT_FORMAT,
    uses_season_title: true,
    custom_font_attrs: LOGO_FONT_ATTRS,
    season_title_policy: SeasonTitlePolicy::FormatOrMap,
};

pub(super) const LOGO_FONT_ATTRS: &[FontAttr] = &[
    FontAttr::Color,
    FontAttr::File,
    FontAttr::InterlineSpacing,
    FontAttr::Kerning,
    FontAttr::Size,
    FontAttr::StrokeWidth,
    FontAttr::VerticalShift,
];

pub(super) const SEASON_COUNT_FONT: RefAsset = RefAsset::Local("Proxima Nova Semibold.otf");
pub(super) const EPISODE_COUNT_FONT: RefAsset = RefAsset::Local("Proxima Nova Regular.otf");
pub(super) const COUNT_COLOR: &str = "#CFCFCF";
const GRADIENT: RefAsset = RefAsset::remote("Beedman", "leftgradient.png");

/// Left-side gradient with the series logo above the title.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientLogo {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default)]
    pub logo_file: Option<PathBuf>,
}

impl GradientLogo {
    pub fn new(fields: CardFields, logo_file: Option<PathBuf>) -> Self {
        Self { fields, logo_file }
    }
}

/// Trim the logo and fit it into the top left corner.
pub(super) fn logo_fragments(logo: &Path) -> Fragments {
    args![
        "(",
        path_arg(logo),
        "-trim",
        "+repage",
        "-resize",
        "x650",
        "-resize",
        "1155x650>",
        ")",
        "-gravity",
        "northwest",
        "-define",
        "colorspace:auto-grayscale=false",
        "-type",
        "TrueColorAlpha",
        "-geometry",
        "+50+50",
        "-composite",
    ]
}

/// Bottom-left title drawn as a `stroke` pass then a `fill` pass.
pub(super) fn title_fragments(
    ctx: &RenderContext<'_>,
    info: &CardInfo,
    fields: &CardFields,
    fill: &str,
    stroke: &str,
) -> Fragments {
    let font = &fields.font;
    let shift = 125 + font.vertical_shift;
    let title = fields.title();
    args![
        "-font",
        ctx.title_font(info, font),
        "-kerning",
        -1.25 * font.kerning,
        "-interword-spacing",
        50,
        "-interline-spacing",
        -22 + font.interline_spacing,
        "-pointsize",
        157.41 * font.size,
        "-gravity",
        "southwest",
        "-fill",
        stroke,
        "-stroke",
        stroke,
        "-strokewidth",
        3.0 * font.stroke_width,
        "-annotate",
        format!("+50+{shift}"),
        title,
        "-fill",
        fill,
        "-annotate",
        format!("+50+{shift}"),
        title,
    ]
}

/// One line of index text in `font` at the bottom left.
pub(super) fn single_index_fragments(
    ctx: &RenderContext<'_>,
    font: &RefAsset,
    text: &str,
) -> Fragments {
    args![
        "-font",
        ctx.asset(font),
        "-kerning",
        5.42,
        "-pointsize",
        67.75,
        "-fill",
        "black",
        "-stroke",
        "black",
        "-strokewidth",
        6,
        "-gravity",
        "southwest",
        "-annotate",
        "+50+50",
        text,
        "-fill",
        COUNT_COLOR,
        "-stroke",
        COUNT_COLOR,
        "-strokewidth",
        0.75,
        "-annotate",
        "+50+50",
        text,
    ]
}

/// Season (semibold) and episode (regular) labels smushed side by side.
pub(super) fn paired_index_fragments(
    ctx: &RenderContext<'_>,
    season: &str,
    episode: &str,
) -> Fragments {
    let labels = || {
        args![
            "(",
            "-gravity",
            "center",
            "-font",
            ctx.asset(&SEASON_COUNT_FONT),
            format!("label:{season} •"),
            "-font",
            ctx.asset(&EPISODE_COUNT_FONT),
            format!("label:{episode}"),
            "+smush",
            30,
            ")",
            "-gravity",
            "southwest",
            "-geometry",
            "+50+50",
            "-composite",
        ]
    };

    let mut out = args![
        "-background",
        "transparent",
        "+interword-spacing",
        "-kerning",
        5.42,
        "-pointsize",
        67.75,
        "-fill",
        "black",
        "-stroke",
        "black",
        "-strokewidth",
        6,
    ];
    out.extend(labels());
    out.extend(args![
        "-fill",
        COUNT_COLOR,
        "-stroke",
        COUNT_COLOR,
        "-strokewidth",
        0.75,
    ]);
    out.extend(labels());
    out
}

impl CardType for GradientLogo {
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
        let logo = ctx.require_logo(self.logo_file.as_deref())?;

        let index = if f.hide_season() {
            single_index_fragments(ctx, &EPISODE_COUNT_FONT, &f.episode())
        } else {
            paired_index_fragments(ctx, &f.season(), &f.episode())
        };

        let mut cmd = MagickCommand::new();
        cmd.file(&f.source_file)
            .extend(ctx.resize_and_style(f.style))
            .arg(ctx.asset(&GRADIENT))
            .arg("-composite")
            .extend(logo_fragments(logo))
            .extend(title_fragments(ctx, &INFO, f, f.font.color_or(&INFO), "black"))
            .extend(index)
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));

        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/gradient_logo.rs"]
mod tests;
