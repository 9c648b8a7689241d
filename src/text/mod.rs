pub mod format;
pub mod numbers;
pub mod title;

pub use crate::magick::command::escape_text;
