//! Building blocks shared by every card type.
//!
//! A card is a serde-deserialised bag of presentation attributes plus a
//! static [`CardInfo`]. Rendering goes through a [`RenderContext`], which owns
//! the process seam and the render settings, and produces one or more
//! `convert` invocations.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use tempfile::TempDir;

use crate::{
    config::RenderSettings,
    font::{Font, FontAttr},
    foundation::{
        core::{CARD_HEIGHT, CARD_WIDTH, Dimensions},
        error::{CardError, CardResult},
    },
    magick::{
        command::{Fragments, MagickCommand, args, escape_text, path_arg},
        runner::MagickRunner,
    },
    text::{
        format::format_placeholders,
        title::{FontCase, SplitCharacteristics},
    },
};

/// Episode text format used when a card does not declare its own.
pub const STANDARD_EPISODE_TEXT_FORMAT: &str = "EPISODE {episode_number}";

/// A file shipped with the reference assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefAsset {
    /// Lives directly under the reference directory.
    Local(&'static str),
    /// Published by a card creator, stored under `<ref_dir>/<creator>/`.
    Remote {
        creator: &'static str,
        path: &'static str,
    },
}

impl RefAsset {
    pub const fn remote(creator: &'static str, path: &'static str) -> Self {
        Self::Remote { creator, path }
    }

    pub fn resolve(&self, ref_dir: &Path) -> PathBuf {
        match self {
            Self::Local(path) => ref_dir.join(path),
            Self::Remote { creator, path } => ref_dir.join(creator).join(path),
        }
    }
}

/// How a card decides whether its season titles are customised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeasonTitlePolicy {
    /// Season titles are never custom.
    Never,
    /// Custom when the episode map is customised or the format differs, ignoring case.
    FormatOrMap,
    /// Custom only when the format differs, ignoring case.
    FormatOnly,
    /// Custom when the episode map is customised or the format differs exactly.
    ExactFormatOrMap,
}

/// Static description of one card type.
#[derive(Debug)]
pub struct CardInfo {
    pub identifier: &'static str,
    pub archive_name: &'static str,
    pub title_characteristics: SplitCharacteristics,
    pub title_font: RefAsset,
    pub title_color: &'static str,
    pub default_font_case: FontCase,
    pub font_replacements: &'static [(&'static str, &'static str)],
    pub episode_text_format: &'static str,
    pub uses_season_title: bool,
    /// Font attributes that make a series font "custom" for this card.
    pub custom_font_attrs: &'static [FontAttr],
    pub season_title_policy: SeasonTitlePolicy,
}

impl CardInfo {
    pub fn replacements(&self) -> BTreeMap<String, String> {
        self.font_replacements
            .iter()
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect()
    }
}

/// Replacements for cards whose fonts lack brackets, dashes and ellipses.
pub const STANDARD_REPLACEMENTS: &[(&str, &str)] = &[
    ("[", "("),
    ("]", ")"),
    ("(", "["),
    (")", "]"),
    ("―", "-"),
    ("…", "..."),
];

/// Font attributes compared by most cards.
pub const STANDARD_FONT_ATTRS: &[FontAttr] = &[
    FontAttr::File,
    FontAttr::Size,
    FontAttr::Color,
    FontAttr::VerticalShift,
    FontAttr::InterlineSpacing,
    FontAttr::Kerning,
    FontAttr::StrokeWidth,
];

pub fn is_custom_season_titles(
    info: &CardInfo,
    custom_episode_map: bool,
    episode_text_format: &str,
) -> bool {
    let differs_ignoring_case =
        || episode_text_format.to_uppercase() != info.episode_text_format.to_uppercase();
    match info.season_title_policy {
        SeasonTitlePolicy::Never => false,
        SeasonTitlePolicy::FormatOrMap => custom_episode_map || differs_ignoring_case(),
        SeasonTitlePolicy::FormatOnly => differs_ignoring_case(),
        SeasonTitlePolicy::ExactFormatOrMap => {
            custom_episode_map || episode_text_format != info.episode_text_format
        }
    }
}

/// Source-image treatments selected per card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CardStyle {
    pub blur: bool,
    pub grayscale: bool,
}

/// Attributes every card type accepts.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardFields {
    #[serde(default)]
    pub source_file: PathBuf,
    pub card_file: PathBuf,
    pub title_text: String,
    #[serde(default)]
    pub season_text: String,
    /// Built from the card's episode text format when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_text: Option<String>,
    #[serde(default)]
    pub hide_season_text: bool,
    #[serde(default)]
    pub hide_episode_text: bool,
    #[serde(default = "default_number")]
    pub season_number: u32,
    #[serde(default = "default_number")]
    pub episode_number: u32,
    /// Absolute episode number; `{abs_number}` uses `episode_number` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abs_number: Option<u32>,
    #[serde(default)]
    pub font: Font,
    #[serde(flatten)]
    pub style: CardStyle,
}

fn default_number() -> u32 {
    1
}

impl CardFields {
    pub fn new(
        source_file: impl Into<PathBuf>,
        card_file: impl Into<PathBuf>,
        title_text: impl Into<String>,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            card_file: card_file.into(),
            title_text: title_text.into(),
            season_text: String::new(),
            episode_text: None,
            hide_season_text: false,
            hide_episode_text: false,
            season_number: 1,
            episode_number: 1,
            abs_number: None,
            font: Font::default(),
            style: CardStyle::default(),
        }
    }

    pub fn with_index(mut self, season_text: &str, episode_text: &str) -> Self {
        self.season_text = season_text.to_string();
        self.episode_text = Some(episode_text.to_string());
        self
    }

    /// Season text is hidden when asked to or when there is none.
    pub fn hide_season(&self) -> bool {
        self.hide_season_text || self.season_text.is_empty()
    }

    pub fn hide_episode(&self) -> bool {
        self.hide_episode_text || self.episode_text().is_empty()
    }

    /// Raw episode text, empty when none is set.
    pub fn episode_text(&self) -> &str {
        self.episode_text.as_deref().unwrap_or_default()
    }

    /// Fill in absent episode text from `format`.
    pub fn apply_episode_text_format(&mut self, format: &str) -> CardResult<()> {
        if self.episode_text.is_some() {
            return Ok(());
        }
        let abs_number = self.abs_number.unwrap_or(self.episode_number);
        let text = format_placeholders(
            format,
            &[
                ("season_number", self.season_number.into()),
                ("episode_number", self.episode_number.into()),
                ("abs_number", abs_number.into()),
            ],
        )?;
        self.episode_text = Some(text);
        Ok(())
    }

    pub fn title(&self) -> String {
        escape_text(&self.title_text)
    }

    /// Upper-cased and escaped season text.
    pub fn season(&self) -> String {
        escape_text(&self.season_text.to_uppercase())
    }

    /// Upper-cased and escaped episode text.
    pub fn episode(&self) -> String {
        escape_text(&self.episode_text().to_uppercase())
    }
}

/// A renderable card type.
pub trait CardType {
    fn info(&self) -> &'static CardInfo;

    fn fields(&self) -> &CardFields;

    fn fields_mut(&mut self) -> &mut CardFields;

    /// Build and run the `convert` invocations that write [`Self::output_file`].
    fn create(&self, ctx: &mut RenderContext<'_>) -> CardResult<()>;

    /// Whether the card is drawn over `source_file`; logo-only cards are not.
    fn uses_source_file(&self) -> bool {
        true
    }

    fn output_file(&self) -> &Path {
        &self.fields().card_file
    }

    fn title_text_mut(&mut self) -> &mut String {
        &mut self.fields_mut().title_text
    }
}

/// Process seam plus settings for one render.
pub struct RenderContext<'a> {
    pub runner: &'a mut dyn MagickRunner,
    pub settings: &'a RenderSettings,
}

impl<'a> RenderContext<'a> {
    pub fn new(runner: &'a mut dyn MagickRunner, settings: &'a RenderSettings) -> Self {
        Self { runner, settings }
    }

    /// Absolute path argument of a reference asset.
    pub fn asset(&self, asset: &RefAsset) -> String {
        path_arg(&asset.resolve(&self.settings.ref_dir))
    }

    /// Absolute path argument of the title font.
    pub fn title_font(&self, info: &CardInfo, font: &Font) -> String {
        path_arg(&font.file_or(info, &self.settings.ref_dir))
    }

    /// Strip profiles, fill the native card size, then apply `style`.
    pub fn resize_and_style(&self, style: CardStyle) -> Fragments {
        let size = Dimensions::card();
        let mut out = args![
            "+profile",
            "*",
            "-background",
            "black",
            "-gravity",
            "center",
            "-resize",
            format!("{size}^"),
            "-extent",
            size,
        ];
        out.extend(self.style(style));
        out
    }

    /// Blur and grayscale operators for `style`, without resizing.
    pub fn style(&self, style: CardStyle) -> Fragments {
        let mut out = Fragments::new();
        if style.blur {
            out.extend(args!["-blur", self.settings.blur_profile]);
        }
        if style.grayscale {
            out.extend(args!["-colorspace", "gray"]);
        }
        out.extend(args!["-set", "colorspace", "sRGB"]);
        out
    }

    /// Resize to the configured card size when it differs from the native one.
    pub fn resize_output(&self) -> Fragments {
        let dims = self.settings.card_dimensions;
        if dims.width == CARD_WIDTH && dims.height == CARD_HEIGHT {
            return Fragments::new();
        }
        args!["-resize", dims, "-extent", dims]
    }

    /// Directory for intermediate images, removed when dropped.
    pub fn scratch(&self) -> CardResult<TempDir> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("titlecard-");
        let dir = match &self.settings.temp_dir {
            Some(parent) => builder
                .tempdir_in(parent)
                .with_context(|| format!("create scratch dir in '{}'", parent.display()))?,
            None => builder.tempdir().context("create scratch dir")?,
        };
        Ok(dir)
    }

    /// Abort when an input file is absent.
    pub fn require_file(&self, what: &'static str, path: &Path) -> CardResult<()> {
        if path.exists() {
            return Ok(());
        }
        tracing::error!(path = %path.display(), "{what} does not exist");
        Err(CardError::missing(what, path))
    }

    /// The logo a card cannot be made without.
    pub fn require_logo<'p>(&self, logo: Option<&'p Path>) -> CardResult<&'p Path> {
        let Some(logo) = logo else {
            tracing::error!("logo file not specified");
            return Err(CardError::validation("logo file not specified"));
        };
        self.require_file("logo file", logo)?;
        Ok(logo)
    }

    pub fn run(&mut self, cmd: &MagickCommand) -> CardResult<()> {
        self.runner.run(cmd)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/base.rs"]
mod tests;
