//! White text cards drawn over a series logo on a flat backdrop.

use std::path::{Path, PathBuf};

use crate::{
    cards::{
        base::{
            CardFields, CardInfo, CardType, RenderContext, STANDARD_EPISODE_TEXT_FORMAT,
            SeasonTitlePolicy,
        },
        white_text::{
            COUNT_FONT, WDVH_FONT_ATTRS, count_annotations, default_separator, title_fragments,
            wdvh_info,
        },
    },
    foundation::{
        core::Dimensions,
        error::{CardError, CardResult},
    },
    magick::{
        command::{MagickCommand, args, escape_text, path_arg},
        metrics::parse_text_metrics,
    },
    text::format::format_placeholders,
};

pub static STANDARD_LOGO_INFO: CardInfo = wdvh_info(
    "white-text-standard-logo",
    "White Text Standard Logo Style",
    STANDARD_EPISODE_TEXT_FORMAT,
    true,
    WDVH_FONT_ATTRS,
    SeasonTitlePolicy::FormatOrMap,
);

pub static TITLE_ONLY_LOGO_INFO: CardInfo = wdvh_info(
    "white-text-title-only-logo",
    "White Text Title Only Logo Style",
    STANDARD_EPISODE_TEXT_FORMAT,
    false,
    WDVH_FONT_ATTRS,
    SeasonTitlePolicy::Never,
);

/// Tallest the logo may be drawn.
const LOGO_HEIGHT: i64 = 1030;
/// Widths and heights of `SEASON `, separator and episode text when
/// ImageMagick reports no metrics.
const FALLBACK_WIDTHS: [u32; 3] = [370, 47, 357];
const FALLBACK_HEIGHTS: [u32; 3] = [68, 83, 83];

fn default_background() -> String {
    "#000000".to_string()
}

/// Fit the logo into 1875x1030 and centre it near the top of a flat canvas.
///
/// Returns the path of the backdrop image inside `scratch`.
fn logo_backdrop(
    ctx: &mut RenderContext<'_>,
    logo: &Path,
    background: &str,
    scratch: &Path,
) -> CardResult<PathBuf> {
    let resized = scratch.join("resized_logo.png");
    let mut cmd = MagickCommand::new();
    cmd.file(logo)
        .args(["-resize", "x1030", "-resize", "1875x1030>"])
        .file(&resized);
    ctx.run(&cmd)?;

    let height = i64::from(ctx.runner.image_dimensions(&resized)?.height);
    let offset = 60 + (LOGO_HEIGHT - height).div_euclid(2);

    let backdrop = scratch.join("backdrop_logo.png");
    let mut cmd = MagickCommand::new();
    cmd.extend(args![
        "-size",
        Dimensions::card(),
        format!("xc:{background}"),
        path_arg(&resized),
        "-set",
        "colorspace",
        "sRGB",
        "-gravity",
        "north",
        "-geometry",
        format!("+0+{offset}"),
        "-composite",
    ])
    .file(&backdrop);
    ctx.run(&cmd)?;
    Ok(backdrop)
}

/// Logo backdrop with the title and a centred `SEASON - EPISODE` line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhiteTextStandardLogo {
    #[serde(flatten)]
    pub fields: CardFields,
    /// Logo path, optionally templated over `season_number` and `episode_number`.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

/// Measured layout of the three-part index text image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CountLayout {
    width: u32,
    season_width: u32,
    separator_width: u32,
    height: u32,
}

impl WhiteTextStandardLogo {
    pub fn new(fields: CardFields, logo: Option<String>) -> Self {
        Self {
            fields,
            logo,
            background: default_background(),
            separator: default_separator(),
        }
    }

    /// Logo path with its template expanded; a bad template is used verbatim.
    fn logo_path(&self) -> Option<PathBuf> {
        let template = self.logo.as_deref()?;
        let path = format_placeholders(
            template,
            &[
                ("season_number", self.fields.season_number.into()),
                ("episode_number", self.fields.episode_number.into()),
            ],
        )
        .unwrap_or_else(|err| {
            tracing::debug!(%err, "logo template not expanded");
            template.to_string()
        });
        Some(PathBuf::from(path))
    }

    fn count_layout(&self, ctx: &mut RenderContext<'_>) -> CardResult<CountLayout> {
        let f = &self.fields;
        let separator = escape_text(&self.separator);
        let mut cmd = MagickCommand::new();
        cmd.args(["-debug", "annotate", "xc:"])
            .extend(args![
                "-kerning",
                5.42,
                "-pointsize",
                85,
                "-font",
                ctx.asset(&COUNT_FONT),
                "-gravity",
                "east",
                "-annotate",
                "+1600+697.2",
                format!("{} ", f.season()),
                "-font",
                ctx.asset(&COUNT_FONT),
                "-gravity",
                "center",
                "-annotate",
                "+0+689.5",
                format!("{separator} "),
                "-gravity",
                "west",
                "-annotate",
                "+1640+697.2",
                f.episode(),
            ])
            .arg("null:");

        let mut metrics = parse_text_metrics(&ctx.runner.run_get_output(&cmd)?);
        if metrics.widths.len() < 2 || metrics.heights.len() < 2 {
            tracing::warn!("unable to measure index text, using fallback dimensions");
            metrics.widths = FALLBACK_WIDTHS.to_vec();
            metrics.heights = FALLBACK_HEIGHTS.to_vec();
        }
        let height = metrics
            .heights
            .iter()
            .copied()
            .max()
            .ok_or_else(|| CardError::metrics("no index text heights"))?;
        Ok(CountLayout {
            width: metrics.widths.iter().sum(),
            season_width: metrics.widths[0],
            separator_width: metrics.widths[1],
            height: height + 25,
        })
    }

    /// Transparent image holding only the index text, written to `out`.
    fn count_image_command(
        &self,
        ctx: &RenderContext<'_>,
        layout: CountLayout,
        out: &Path,
    ) -> MagickCommand {
        let f = &self.fields;
        let baseline = f64::from(layout.height) - 25.0;
        let mut cmd = MagickCommand::new();
        cmd.extend(args![
            "-size",
            Dimensions::new(layout.width, layout.height),
            "-alpha",
            "on",
            "-background",
            "transparent",
            "xc:transparent",
            "-kerning",
            5.42,
            "-pointsize",
            85,
            "-font",
            ctx.asset(&COUNT_FONT),
        ])
        .extend(count_annotations(
            &format!("+0+{baseline}"),
            &format!("{} ", f.season()),
        ))
        .extend(count_annotations(
            &format!("+{}+{}", layout.season_width, baseline - 6.5),
            &escape_text(&self.separator),
        ))
        .extend(count_annotations(
            &format!(
                "+{}+{baseline}",
                layout.season_width + layout.separator_width
            ),
            &f.episode(),
        ))
        .arg(format!("PNG32:{}", path_arg(out)));
        cmd
    }
}

impl CardType for WhiteTextStandardLogo {
    fn info(&self) -> &'static CardInfo {
        &STANDARD_LOGO_INFO
    }

    fn fields(&self) -> &CardFields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut CardFields {
        &mut self.fields
    }

    fn uses_source_file(&self) -> bool {
        false
    }

    fn create(&self, ctx: &mut RenderContext<'_>) -> CardResult<()> {
        let f = &self.fields;
        let logo_path = self.logo_path();
        let logo = ctx.require_logo(logo_path.as_deref())?;
        let scratch = ctx.scratch()?;

        let backdrop = logo_backdrop(ctx, logo, &self.background, scratch.path())?;

        let titled_image = scratch.path().join("logo_title.png");
        let mut cmd = MagickCommand::new();
        cmd.file(&backdrop)
            .extend(ctx.resize_and_style(f.style))
            .extend(title_fragments(ctx, &STANDARD_LOGO_INFO, f, -70, 245))
            .file(&titled_image);
        ctx.run(&cmd)?;

        let mut cmd = MagickCommand::new();
        if f.hide_season() {
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
                .extend(count_annotations("+0+697.2", &f.episode()));
        } else {
            let layout = self.count_layout(ctx)?;
            let count_image = scratch.path().join("series_count_text.png");
            let count_cmd = self.count_image_command(ctx, layout, &count_image);
            ctx.run(&count_cmd)?;

            cmd.file(&titled_image)
                .file(&count_image)
                .args(["-gravity", "center", "-geometry", "+0+690.2", "-composite"]);
        }
        cmd.extend(ctx.resize_output()).file(&f.card_file);
        ctx.run(&cmd)
    }
}

/// Logo backdrop with the title only; blur applies to the whole backdrop.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WhiteTextTitleOnlyLogo {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default)]
    pub logo: Option<PathBuf>,
    #[serde(default = "default_background")]
    pub background: String,
}

impl WhiteTextTitleOnlyLogo {
    pub fn new(fields: CardFields, logo: Option<PathBuf>) -> Self {
        Self {
            fields,
            logo,
            background: default_background(),
        }
    }
}

impl CardType for WhiteTextTitleOnlyLogo {
    fn info(&self) -> &'static CardInfo {
        &TITLE_ONLY_LOGO_INFO
    }

    fn fields(&self) -> &CardFields {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut CardFields {
        &mut self.fields
    }

    fn uses_source_file(&self) -> bool {
        false
    }

    fn create(&self, ctx: &mut RenderContext<'_>) -> CardResult<()> {
        let f = &self.fields;
        let logo = ctx.require_logo(self.logo.as_deref())?;
        let scratch = ctx.scratch()?;

        let backdrop = logo_backdrop(ctx, logo, &self.background, scratch.path())?;

        let mut cmd = MagickCommand::new();
        cmd.file(&backdrop);
        if f.style.blur {
            cmd.args(["-blur", ctx.settings.blur_profile.as_str()]);
        }
        cmd.extend(title_fragments(ctx, &TITLE_ONLY_LOGO_INFO, f, -17, 245))
            .file(&f.card_file);
        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/white_text_logo.rs"]
mod tests;
