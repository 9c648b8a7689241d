use std::path::{Path, PathBuf};

use crate::{
    cards::{
        base::{
            CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_EPISODE_TEXT_FORMAT,
            STANDARD_REPLACEMENTS, SeasonTitlePolicy,
        },
        gradient_logo::{
            EPISODE_COUNT_FONT, LOGO_FONT_ATTRS, SEASON_COUNT_FONT, logo_fragments,
            paired_index_fragments, single_index_fragments, title_fragments,
        },
    },
    foundation::error::CardResult,
    magick::{
        command::{MagickCommand, escape_text, path_arg},
        metrics::parse_histogram,
        runner::MagickRunner,
    },
    text::title::{FontCase, SplitCharacteristics, SplitStyle},
};

pub static INFO: CardInfo = CardInfo {
    identifier: "title-color-match",
    archive_name: "Title Color Match Style",
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

/// Font color that asks for the title to be tinted from the logo.
pub const AUTO_COLOR: &str = "auto";

const GRADIENT: RefAsset = RefAsset::remote("azuravian", "leftgradient.png");

/// Gradient logo card whose title color can be picked from the logo.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TitleColorMatch {
    #[serde(flatten)]
    pub fields: CardFields,
    pub logo_file: PathBuf,
}

impl TitleColorMatch {
    pub fn new(fields: CardFields, logo_file: impl Into<PathBuf>) -> Self {
        Self {
            fields,
            logo_file: logo_file.into(),
        }
    }

    /// Title fill and stroke colors.
    fn title_colors(&self, runner: &mut dyn MagickRunner) -> CardResult<(String, String)> {
        let color = self.fields.font.color_or(&INFO);
        if color != AUTO_COLOR {
            return Ok((color.to_string(), "black".to_string()));
        }

        let mut cmd = MagickCommand::new();
        cmd.file(&self.logo_file).args([
            "-scale",
            "100x100!",
            "-depth",
            "8",
            "+dither",
            "-colors",
            "16",
            "-format",
            "%c",
            "histogram:info:",
        ]);
        let histogram = runner.run_get_output(&cmd)?;
        Ok(pick_logo_color(&histogram).unwrap_or_else(|| {
            tracing::warn!(logo = %self.logo_file.display(), "no usable logo color, using default");
            (INFO.title_color.to_string(), "black".to_string())
        }))
    }
}

/// Most common opaque logo color that is neither near-white nor near-black,
/// with a stroke color contrasting its luminance.
pub fn pick_logo_color(histogram: &str) -> Option<(String, String)> {
    let mut colors: Vec<(u64, [u8; 4])> = parse_histogram(histogram)
        .into_iter()
        .filter_map(|(count, hex)| Some((count, parse_rgba(&hex)?)))
        .filter(|(_, [_, _, _, alpha])| *alpha >= 75)
        .collect();
    colors.sort_by(|a, b| b.0.cmp(&a.0));

    colors.into_iter().find_map(|(_, [r, g, b, _])| {
        let (lo, hi) = (r.min(g).min(b), r.max(g).max(b));
        if lo > 240 || hi < 15 {
            return None;
        }
        let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
        let stroke = if luminance > 50.0 { "black" } else { "white" };
        Some((format!("#{r:02X}{g:02X}{b:02X}"), stroke.to_string()))
    })
}

fn parse_rgba(hex: &str) -> Option<[u8; 4]> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 8 {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?, byte(6)?])
}

impl CardType for TitleColorMatch {
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
        let logo: &Path = ctx.require_logo(Some(self.logo_file.as_path()))?;
        let (fill, stroke) = self.title_colors(ctx.runner)?;

        // index text keeps its source case on this card
        let season = escape_text(&f.season_text);
        let episode = escape_text(f.episode_text());
        let index = if f.hide_season() {
            single_index_fragments(ctx, &EPISODE_COUNT_FONT, &episode)
        } else if f.hide_episode() {
            single_index_fragments(ctx, &SEASON_COUNT_FONT, &season)
        } else {
            paired_index_fragments(ctx, &season, &episode)
        };

        let mut cmd = MagickCommand::new();
        cmd.file(&f.source_file)
            .extend(ctx.resize_and_style(f.style))
            .arg(ctx.asset(&GRADIENT))
            .arg("-composite")
            .extend(logo_fragments(logo))
            .extend(title_fragments(ctx, &INFO, f, &fill, &stroke))
            .extend(index)
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));

        ctx.run(&cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/title_color_match.rs"]
mod tests;
