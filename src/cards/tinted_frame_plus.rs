//! Framed card: blurred edges outside a rectangular frame, with the frame
//! broken by index text or a logo at the top and bottom.

use std::path::PathBuf;

use crate::{
    cards::base::{
        CardFields, CardInfo, CardType, RefAsset, RenderContext, STANDARD_EPISODE_TEXT_FORMAT,
        SeasonTitlePolicy,
    },
    font::FontAttr,
    foundation::{
        core::{CARD_HEIGHT, CARD_WIDTH, Coordinate, Dimensions, Rectangle},
        error::CardResult,
    },
    magick::{
        command::{Fragments, MagickCommand, args, path_arg},
        metrics::{Reduce, text_dimensions},
    },
    text::{
        format::format_placeholders,
        title::{FontCase, SplitCharacteristics, SplitStyle},
    },
};

pub static INFO: CardInfo = CardInfo {
    identifier: "tinted-frame-plus",
    archive_name: "Tinted Frame Style",
    title_characteristics: SplitCharacteristics::new(35, 2, SplitStyle::Top),
    title_font: TEXT_FONT,
    title_color: "white",
    default_font_case: FontCase::Upper,
    font_replacements: &[],
    episode_text_format: STANDARD_EPISODE_TEXT_FORMAT,
    uses_season_title: true,
    custom_font_attrs: &[
        FontAttr::Color,
        FontAttr::File,
        FontAttr::InterlineSpacing,
        FontAttr::InterwordSpacing,
        FontAttr::Kerning,
        FontAttr::Size,
        FontAttr::VerticalShift,
    ],
    season_title_policy: SeasonTitlePolicy::FormatOrMap,
};

pub(crate) const TEXT_FONT: RefAsset = RefAsset::Local("tinted_frame/Galey Semi Bold.ttf");

/// Distance of the frame from the card edge.
const BOX_OFFSET: f64 = 185.0;
const ELEMENT_MARGIN: f64 = 25.0;
const WIDTH: f64 = CARD_WIDTH as f64;
const HEIGHT: f64 = CARD_HEIGHT as f64;

/// What breaks the top or bottom edge of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Index,
    Logo,
    Omit,
}

/// What sits in the middle of the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiddleElement {
    Logo,
    Omit,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TintedFramePlus {
    #[serde(flatten)]
    pub fields: CardFields,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default = "default_stroke_color")]
    pub stroke_color: String,
    /// Defaults to the title color.
    #[serde(default)]
    pub episode_text_color: Option<String>,
    #[serde(default)]
    pub episode_text_font: Option<PathBuf>,
    #[serde(default = "default_scale")]
    pub episode_text_font_size: f64,
    #[serde(default)]
    pub episode_text_vertical_shift: i32,
    /// Defaults to the title color.
    #[serde(default)]
    pub frame_color: Option<String>,
    #[serde(default = "default_frame_width")]
    pub frame_width: u32,
    #[serde(default = "default_top")]
    pub top_element: Element,
    #[serde(default = "default_middle")]
    pub middle_element: MiddleElement,
    #[serde(default = "default_bottom")]
    pub bottom_element: Element,
    /// Logo path, optionally templated over `season_number` and `episode_number`.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default = "default_scale")]
    pub logo_size: f64,
    #[serde(default = "default_blur_edges")]
    pub blur_edges: bool,
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_stroke_color() -> String {
    "black".to_string()
}

fn default_scale() -> f64 {
    1.0
}

fn default_frame_width() -> u32 {
    3
}

fn default_top() -> Element {
    Element::Logo
}

fn default_middle() -> MiddleElement {
    MiddleElement::Omit
}

fn default_bottom() -> Element {
    Element::Index
}

fn default_blur_edges() -> bool {
    true
}

/// Which frame edge is being drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Top,
    Bottom,
}

impl TintedFramePlus {
    pub fn new(fields: CardFields) -> Self {
        Self {
            fields,
            separator: default_separator(),
            stroke_color: default_stroke_color(),
            episode_text_color: None,
            episode_text_font: None,
            episode_text_font_size: default_scale(),
            episode_text_vertical_shift: 0,
            frame_color: None,
            frame_width: default_frame_width(),
            top_element: default_top(),
            middle_element: default_middle(),
            bottom_element: default_bottom(),
            logo: None,
            logo_size: default_scale(),
            blur_edges: default_blur_edges(),
        }
    }

    fn uses_logo(&self) -> bool {
        self.top_element == Element::Logo
            || self.middle_element == MiddleElement::Logo
            || self.bottom_element == Element::Logo
    }

    fn uses_index(&self) -> bool {
        self.top_element == Element::Index || self.bottom_element == Element::Index
    }

    fn index_hidden(&self) -> bool {
        self.fields.hide_season() && self.fields.hide_episode()
    }

    fn element(&self, edge: Edge) -> Element {
        match edge {
            Edge::Top => self.top_element,
            Edge::Bottom => self.bottom_element,
        }
    }

    /// Logo path with its template expanded.
    fn logo_path(&self) -> CardResult<Option<PathBuf>> {
        let Some(template) = &self.logo else {
            return Ok(None);
        };
        let path = format_placeholders(
            template,
            &[
                ("season_number", self.fields.season_number.into()),
                ("episode_number", self.fields.episode_number.into()),
            ],
        )?;
        Ok(Some(PathBuf::from(path)))
    }

    fn blur_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        if !self.blur_edges || self.fields.style.blur {
            return Fragments::new();
        }
        let crop_width = CARD_WIDTH - 2 * BOX_OFFSET as u32 - 6;
        let crop_height = CARD_HEIGHT - 2 * BOX_OFFSET as u32 - 4;

        let mut out = args![
            "-blur",
            "0x20",
            "-gravity",
            "center",
            "(",
            path_arg(&self.fields.source_file),
        ];
        out.extend(ctx.resize_and_style(self.fields.style));
        out.extend(args![
            "-crop",
            format!("{crop_width}x{crop_height}+0+0"),
            "+repage",
            ")",
            "-composite",
        ]);
        out
    }

    fn title_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let f = &self.fields;
        let font = &f.font;
        let shift = format!("+0+{}", 245 + font.vertical_shift);
        let title = f.title();

        let mut out = args![
            "-gravity",
            "south",
            "-font",
            ctx.title_font(&INFO, font),
            "-kerning",
            -1.25 * font.kerning,
            "-interword-spacing",
            50 + font.interword_spacing,
            "-interline-spacing",
            -22 + font.interline_spacing,
            "-pointsize",
            157.41 * font.size,
        ];
        if font.stroke_width != 0.0 {
            out.extend(args![
                "-fill",
                self.stroke_color,
                "-stroke",
                self.stroke_color,
                "-strokewidth",
                3.0 * font.stroke_width,
                "-annotate",
                shift,
                title,
            ]);
        }
        out.extend(args!["-fill", font.color_or(&INFO), "-annotate", shift, title]);
        out
    }

    fn index_text(&self) -> String {
        let f = &self.fields;
        if f.hide_season() {
            f.episode()
        } else if f.hide_episode() {
            f.season()
        } else {
            format!("{} {} {}", f.season(), self.separator, f.episode())
        }
    }

    fn index_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        if !self.uses_index() || self.index_hidden() {
            return Fragments::new();
        }
        let base = if self.top_element == Element::Index { -708 } else { 722 };
        let shift = base + self.episode_text_vertical_shift;
        let font = match &self.episode_text_font {
            Some(path) => path_arg(path),
            None => ctx.asset(&TEXT_FONT),
        };
        let color = self
            .episode_text_color
            .as_deref()
            .unwrap_or_else(|| self.fields.font.color_or(&INFO));

        args![
            "-background",
            "transparent",
            "(",
            "-font",
            font,
            "+kerning",
            "+interline-spacing",
            "+interword-spacing",
            "-pointsize",
            60.0 * self.episode_text_font_size,
            "-fill",
            color,
            format!("label:{}", self.index_text()),
            "(",
            "+clone",
            "-shadow",
            "80x3+6+6",
            ")",
            "+swap",
            "-layers",
            "merge",
            "+repage",
            ")",
            "-gravity",
            "center",
            "-geometry",
            format!("+0{shift:+}"),
            "-composite",
        ]
    }

    fn logo_fragments(&self, logo: Option<&PathBuf>) -> Fragments {
        let Some(logo) = logo.filter(|_| self.uses_logo()) else {
            return Fragments::new();
        };
        let shift: i32 = if self.top_element == Element::Logo {
            -720
        } else if self.middle_element == MiddleElement::Logo {
            0
        } else {
            700
        };

        let mut out = args!["(", path_arg(logo)];
        if self.middle_element == MiddleElement::Logo {
            let height = 350.0 * self.logo_size;
            out.extend(args![
                "-resize",
                format!("x{height}"),
                "-resize",
                format!("{}x{height}>", 2500.0 * self.logo_size),
            ]);
        } else {
            out.extend(args!["-resize", format!("x{}", 150.0 * self.logo_size)]);
        }
        out.extend(args![
            ")",
            "-gravity",
            "center",
            "-geometry",
            format!("+0{shift:+}"),
            "-composite",
        ]);
        out
    }

    /// Rectangles of one horizontal frame edge, split around its element.
    fn edge_fragments(
        &self,
        ctx: &mut RenderContext<'_>,
        edge: Edge,
        logo: Option<&PathBuf>,
        index: &Fragments,
    ) -> CardResult<Fragments> {
        let width = f64::from(self.frame_width);
        let (y0, y1) = match edge {
            Edge::Top => (BOX_OFFSET, BOX_OFFSET + width),
            Edge::Bottom => (HEIGHT - BOX_OFFSET - width, HEIGHT - BOX_OFFSET),
        };

        let element_width = match (self.element(edge), logo) {
            (Element::Index, _) if !self.index_hidden() => {
                let (w, _) = text_dimensions(ctx.runner, index, Reduce::Max, Reduce::Max)?;
                Some(w)
            }
            (Element::Logo, Some(logo)) => {
                let Dimensions { width, height } = ctx.runner.image_dimensions(logo)?;
                Some(f64::from(width) / (f64::from(height) / 150.0) * self.logo_size)
            }
            _ => None,
        };

        let Some(element_width) = element_width else {
            let whole = Rectangle::new(
                Coordinate::new(BOX_OFFSET, y0),
                Coordinate::new(WIDTH - BOX_OFFSET, y1),
            );
            return Ok(whole.draw().to_vec());
        };

        let left_x = WIDTH / 2.0 - element_width / 2.0 - ELEMENT_MARGIN;
        let right_x = WIDTH / 2.0 + element_width / 2.0 + ELEMENT_MARGIN;
        if left_x < BOX_OFFSET || right_x > WIDTH - BOX_OFFSET {
            return Ok(Fragments::new());
        }

        let mut out = Rectangle::new(Coordinate::new(BOX_OFFSET, y0), Coordinate::new(left_x, y1))
            .draw()
            .to_vec();
        out.extend(
            Rectangle::new(
                Coordinate::new(right_x, y0),
                Coordinate::new(WIDTH - BOX_OFFSET, y1),
            )
            .draw(),
        );
        Ok(out)
    }

    fn frame_fragments(
        &self,
        ctx: &mut RenderContext<'_>,
        logo: Option<&PathBuf>,
        index: &Fragments,
    ) -> CardResult<Fragments> {
        let width = f64::from(self.frame_width);
        let color = self
            .frame_color
            .as_deref()
            .unwrap_or_else(|| self.fields.font.color_or(&INFO));
        let left = Rectangle::new(
            Coordinate::new(BOX_OFFSET, BOX_OFFSET),
            Coordinate::new(BOX_OFFSET + width, HEIGHT - BOX_OFFSET),
        );
        let right = Rectangle::new(
            Coordinate::new(WIDTH - BOX_OFFSET - width, BOX_OFFSET),
            Coordinate::new(WIDTH - BOX_OFFSET, HEIGHT - BOX_OFFSET),
        );

        let mut out = args![
            "(",
            "-size",
            Dimensions::card(),
            "xc:transparent",
            "+stroke",
            "-fill",
            color,
        ];
        out.extend(self.edge_fragments(ctx, Edge::Top, logo, index)?);
        out.extend(left.draw());
        out.extend(right.draw());
        out.extend(self.edge_fragments(ctx, Edge::Bottom, logo, index)?);
        out.extend(args![
            "(",
            "+clone",
            "-shadow",
            "80x3+4+4",
            ")",
            "+swap",
            "-layers",
            "merge",
            "+repage",
            ")",
            "-geometry",
            "+0+0",
            "-composite",
        ]);
        Ok(out)
    }

    /// `<stem>-mask.png` next to the source, drawn above everything else.
    fn mask_fragments(&self, ctx: &RenderContext<'_>) -> Fragments {
        let f = &self.fields;
        if f.style.blur || f.style.grayscale {
            return Fragments::new();
        }
        let stem = f
            .source_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mask = f
            .source_file
            .parent()
            .map(|dir| dir.join(format!("{stem}-mask.png")))
            .unwrap_or_else(|| PathBuf::from(format!("{stem}-mask.png")));
        if !mask.exists() {
            return Fragments::new();
        }

        let mut out = args!["(", path_arg(&mask)];
        out.extend(ctx.resize_and_style(f.style));
        out.extend(args![")", "-composite"]);
        out
    }
}

impl CardType for TintedFramePlus {
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
        let logo = self.logo_path()?;
        if self.uses_logo() {
            ctx.require_logo(logo.as_deref())?;
        }

        let index = self.index_fragments(ctx);
        let frame = self.frame_fragments(ctx, logo.as_ref(), &index)?;

        let mut cmd = MagickCommand::new();
        cmd.file(&f.source_file)
            .extend(ctx.resize_and_style(f.style))
            .extend(self.blur_fragments(ctx))
            .extend(self.title_fragments(ctx))
            .extend(index)
            .extend(self.logo_fragments(logo.as_ref()))
            .extend(frame)
            .extend(self.mask_fragments(ctx))
            .extend(ctx.resize_output())
            .arg(path_arg(&f.card_file));

        ctx.run(&cmd)
    }
}

/// Reset episode text and frame styling that only suits a custom font.
///
/// Only keys already present in `extras` are touched.
pub fn modify_extras(extras: &mut serde_json::Map<String, serde_json::Value>, custom_font: bool) {
    if custom_font {
        return;
    }
    let resets = [
        ("episode_text_color", serde_json::json!(INFO.title_color)),
        ("episode_text_font", serde_json::Value::Null),
        ("episode_text_font_size", serde_json::json!(1.0)),
        ("episode_text_vertical_shift", serde_json::json!(0)),
        ("frame_color", serde_json::json!(INFO.title_color)),
    ];
    for (key, value) in resets {
        if let Some(slot) = extras.get_mut(key) {
            *slot = value;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cards/tinted_frame_plus.rs"]
mod tests;
