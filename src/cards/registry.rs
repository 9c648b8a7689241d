//! Every card type behind one serde-tagged enum.
//!
//! A card file is a JSON object whose `card_type` names the card and whose
//! remaining keys are that card's attributes:
//!
//! ```json
//! { "card_type": "slim", "source_file": "s01e01.jpg",
//!   "card_file": "out/s01e01.jpg", "title_text": "Pilot" }
//! ```

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    cards::{
        barebones::{self, Barebones},
        base::{CardInfo, CardType, RenderContext},
        blacklist::{self, Blacklist},
        gradient_logo::{self, GradientLogo},
        retro::{self, Retro},
        sci_fi::{self, SciFi},
        slim::{self, Slim},
        standard_all_bold::{self, StandardAllBold},
        star_wars_title_only::{self, StarWarsTitleOnly},
        tinted_frame_plus::{self, TintedFramePlus},
        title_color_match::{self, TitleColorMatch},
        white_text::{self, WhiteTextAbsolute, WhiteTextStandard, WhiteTextTitleOnly},
        white_text_broadcast::{self, WhiteTextBroadcast},
        white_text_logo::{self, WhiteTextStandardLogo, WhiteTextTitleOnlyLogo},
    },
    foundation::error::CardResult,
    text::title::{apply_font_case, apply_replacements, split_title},
};

macro_rules! card_specs {
    ($($variant:ident($card:ty) => $info:expr),+ $(,)?) => {
        /// A fully described card of any type.
        #[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(tag = "card_type", rename_all = "kebab-case")]
        pub enum CardSpec {
            $($variant($card)),+
        }

        impl CardSpec {
            pub fn as_card(&self) -> &dyn CardType {
                match self {
                    $(Self::$variant(card) => card as &dyn CardType),+
                }
            }

            pub fn as_card_mut(&mut self) -> &mut dyn CardType {
                match self {
                    $(Self::$variant(card) => card as &mut dyn CardType),+
                }
            }
        }

        /// Metadata of every card type, in declaration order.
        pub fn all_infos() -> Vec<&'static CardInfo> {
            vec![$(&$info),+]
        }
    };
}

card_specs! {
    StandardAllBold(StandardAllBold) => standard_all_bold::INFO,
    Blacklist(Blacklist) => blacklist::INFO,
    GradientLogo(GradientLogo) => gradient_logo::INFO,
    TitleColorMatch(TitleColorMatch) => title_color_match::INFO,
    SciFi(SciFi) => sci_fi::INFO,
    TintedFramePlus(TintedFramePlus) => tinted_frame_plus::INFO,
    WhiteTextStandard(WhiteTextStandard) => white_text::STANDARD_INFO,
    WhiteTextAbsolute(WhiteTextAbsolute) => white_text::ABSOLUTE_INFO,
    WhiteTextTitleOnly(WhiteTextTitleOnly) => white_text::TITLE_ONLY_INFO,
    WhiteTextStandardLogo(WhiteTextStandardLogo) => white_text_logo::STANDARD_LOGO_INFO,
    WhiteTextTitleOnlyLogo(WhiteTextTitleOnlyLogo) => white_text_logo::TITLE_ONLY_LOGO_INFO,
    WhiteTextBroadcast(WhiteTextBroadcast) => white_text_broadcast::INFO,
    StarWarsTitleOnly(StarWarsTitleOnly) => star_wars_title_only::INFO,
    Barebones(Barebones) => barebones::INFO,
    Retro(Retro) => retro::INFO,
    Slim(Slim) => slim::INFO,
}

impl CardSpec {
    pub fn info(&self) -> &'static CardInfo {
        self.as_card().info()
    }

    /// Load a card from a JSON file.
    pub fn from_json_file(path: &Path) -> CardResult<Self> {
        let f = File::open(path).with_context(|| format!("open card '{}'", path.display()))?;
        let spec: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse card '{}'", path.display()))?;
        Ok(spec)
    }
}

pub fn info_for(identifier: &str) -> Option<&'static CardInfo> {
    all_infos()
        .into_iter()
        .find(|info| info.identifier == identifier)
}

/// Adjust card-specific extras once the caller knows whether the series font
/// and season titles are customised.
///
/// Cards without such rules leave `extras` untouched; none currently react to
/// custom season titles.
pub fn modify_extras(
    identifier: &str,
    extras: &mut serde_json::Map<String, serde_json::Value>,
    custom_font: bool,
    _custom_season_titles: bool,
) {
    if identifier == tinted_frame_plus::INFO.identifier {
        tinted_frame_plus::modify_extras(extras, custom_font);
    }
}

/// Title after font replacements, font case and line splitting.
pub fn format_title(card: &dyn CardType) -> String {
    let info = card.info();
    let font = &card.fields().font;
    let text = apply_replacements(&card.fields().title_text, &font.replacements_or(info));
    let text = apply_font_case(&text, font.case_or(info));
    split_title(&text, info.title_characteristics)
}

/// Check the inputs of `spec`, format its title and episode text, then
/// create the card.
#[tracing::instrument(skip_all, fields(card_type = spec.info().identifier))]
pub fn render_card(mut spec: CardSpec, ctx: &mut RenderContext<'_>) -> CardResult<()> {
    let card = spec.as_card_mut();
    if card.uses_source_file() {
        ctx.require_file("source image", &card.fields().source_file)?;
    }

    let title = format_title(card);
    *card.title_text_mut() = title;
    let format = card.info().episode_text_format;
    card.fields_mut().apply_episode_text_format(format)?;

    card.create(ctx)?;
    tracing::debug!(output = %card.output_file().display(), "card created");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/cards/registry.rs"]
mod tests;
