//! Series font customisation and the test for "generic" fonts.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::{cards::base::CardInfo, text::title::FontCase};

/// Font attributes a card may compare against its defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontAttr {
    File,
    Size,
    Color,
    Replacements,
    VerticalShift,
    InterlineSpacing,
    InterwordSpacing,
    Kerning,
    StrokeWidth,
}

/// Font used for a card's title.
///
/// `file`, `color`, `replacements` and `case` fall back to the card's own
/// defaults when absent; the numeric fields are scalars or pixel offsets
/// applied on top of the card's geometry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Font {
    pub file: Option<PathBuf>,
    pub size: f64,
    pub color: Option<String>,
    pub vertical_shift: i32,
    pub interline_spacing: i32,
    pub interword_spacing: i32,
    pub kerning: f64,
    pub stroke_width: f64,
    pub replacements: Option<BTreeMap<String, String>>,
    pub case: Option<FontCase>,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            file: None,
            size: 1.0,
            color: None,
            vertical_shift: 0,
            interline_spacing: 0,
            interword_spacing: 0,
            kerning: 1.0,
            stroke_width: 1.0,
            replacements: None,
            case: None,
        }
    }
}

impl Font {
    /// The generic font of `info` with every default filled in.
    pub fn default_for(info: &CardInfo, ref_dir: &Path) -> Self {
        Self {
            file: Some(info.title_font.resolve(ref_dir)),
            color: Some(info.title_color.to_string()),
            replacements: Some(info.replacements()),
            case: Some(info.default_font_case),
            ..Self::default()
        }
    }

    pub fn file_or(&self, info: &CardInfo, ref_dir: &Path) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| info.title_font.resolve(ref_dir))
    }

    pub fn color_or<'a>(&'a self, info: &'a CardInfo) -> &'a str {
        self.color.as_deref().unwrap_or(info.title_color)
    }

    pub fn case_or(&self, info: &CardInfo) -> FontCase {
        self.case.unwrap_or(info.default_font_case)
    }

    pub fn replacements_or(&self, info: &CardInfo) -> BTreeMap<String, String> {
        self.replacements
            .clone()
            .unwrap_or_else(|| info.replacements())
    }
}

/// Whether `font` differs from the generic font of `info` in any attribute
/// the card considers.
pub fn is_custom_font(info: &CardInfo, font: &Font, ref_dir: &Path) -> bool {
    let generic = Font::default_for(info, ref_dir);
    info.custom_font_attrs.iter().any(|attr| match attr {
        FontAttr::File => font.file_or(info, ref_dir) != info.title_font.resolve(ref_dir),
        FontAttr::Size => font.size != generic.size,
        FontAttr::Color => font.color_or(info) != info.title_color,
        FontAttr::Replacements => font.replacements_or(info) != info.replacements(),
        FontAttr::VerticalShift => font.vertical_shift != generic.vertical_shift,
        FontAttr::InterlineSpacing => font.interline_spacing != generic.interline_spacing,
        FontAttr::InterwordSpacing => font.interword_spacing != generic.interword_spacing,
        FontAttr::Kerning => font.kerning != generic.kerning,
        FontAttr::StrokeWidth => font.stroke_width != generic.stroke_width,
    })
}

#[cfg(test)]
#[path = "../tests/unit/font.rs"]
mod tests;
