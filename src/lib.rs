//! Title card generation by driving ImageMagick's `convert`.
//!
//! Every card type turns a bag of presentation attributes into one or more
//! `convert` argument vectors and hands them to a [`MagickRunner`]. Rendering
//! itself (fonts, compositing, gradients) is left to ImageMagick.
//!
//! - Describe a card as a [`CardSpec`] (usually deserialised from JSON)
//! - Pick a runner: [`ProcessRunner`] for real output, [`RecordingRunner`] for dry runs
//! - Call [`render_card`] with a [`RenderContext`]
#![forbid(unsafe_code)]

pub mod cards;
pub mod config;
pub mod font;
pub mod foundation;
pub mod magick;
pub mod text;

pub use crate::cards::base::{CardFields, CardInfo, CardStyle, CardType, RenderContext};
pub use crate::cards::registry::{CardSpec, all_infos, info_for, modify_extras, render_card};
pub use crate::config::RenderSettings;
pub use crate::font::{Font, is_custom_font};
pub use crate::foundation::core::Dimensions;
pub use crate::foundation::error::{CardError, CardResult};
pub use crate::magick::command::MagickCommand;
pub use crate::magick::runner::{MagickRunner, ProcessRunner, RecordingRunner};
