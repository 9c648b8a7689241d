use std::{fmt, str::FromStr};

use crate::foundation::error::{CardError, CardResult};

/// Size every card is laid out at before the optional output resize.
pub const CARD_WIDTH: u32 = 3200;
/// See [`CARD_WIDTH`].
pub const CARD_HEIGHT: u32 = 1800;

/// Pixel dimensions, written `WxH` on the ImageMagick command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Native layout size of all cards.
    pub const fn card() -> Self {
        Self::new(CARD_WIDTH, CARD_HEIGHT)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::card()
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Dimensions {
    type Err = CardError;

    fn from_str(s: &str) -> CardResult<Self> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| CardError::config(format!("dimensions '{s}' are not WIDTHxHEIGHT")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|e| CardError::config(format!("dimensions '{s}': {e}")))
        };
        let dims = Self::new(parse(w)?, parse(h)?);
        if dims.width == 0 || dims.height == 0 {
            return Err(CardError::config("dimensions must be non-zero"));
        }
        Ok(dims)
    }
}

impl TryFrom<String> for Dimensions {
    type Error = CardError;

    fn try_from(value: String) -> CardResult<Self> {
        value.parse()
    }
}

impl From<Dimensions> for String {
    fn from(value: Dimensions) -> Self {
        value.to_string()
    }
}

/// A point on the card canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Axis aligned rectangle between two corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Rectangle {
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// `-draw` operator filling this rectangle with the current fill color.
    pub fn draw(&self) -> [String; 2] {
        [
            "-draw".to_string(),
            format!("rectangle {},{}", self.start, self.end),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
