//! Card types. Each module holds one visual style (or a small family of
//! closely related styles) and its static [`base::CardInfo`].

pub mod barebones;
pub mod base;
pub mod blacklist;
pub mod gradient_logo;
pub mod registry;
pub mod retro;
pub mod sci_fi;
pub mod slim;
pub mod standard_all_bold;
pub mod star_wars_title_only;
pub mod tinted_frame_plus;
pub mod title_color_match;
pub mod white_text;
pub mod white_text_broadcast;
pub mod white_text_logo;

#[cfg(test)]
#[path = "../../tests/unit/cards/support.rs"]
pub(crate) mod support;
