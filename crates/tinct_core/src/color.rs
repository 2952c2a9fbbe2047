//! Color values
//!
//! [`Color`] is the numeric RGBA form renderers consume. [`HexColor`] is the
//! literal form stored in a theme's color map: it keeps the exact text it was
//! declared with (`"#fff"` stays `"#fff"`) and converts to [`Color`] on demand.

use crate::error::{ColorError, Result};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::fmt;

/// RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build from a packed `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
            0xFF,
        )
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A color literal in CSS hex notation (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`)
///
/// The literal is not validated on construction; [`HexColor::to_color`]
/// reports malformed input.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HexColor(Cow<'static, str>);

impl HexColor {
    /// Wrap a literal known at compile time without allocating
    pub const fn from_static(literal: &'static str) -> Self {
        Self(Cow::Borrowed(literal))
    }

    pub fn new(literal: impl Into<Cow<'static, str>>) -> Self {
        Self(literal.into())
    }

    /// The literal exactly as declared
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the literal into numeric RGBA
    pub fn to_color(&self) -> Result<Color> {
        parse_hex_literal(&self.0)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for HexColor {
    fn from(literal: &'static str) -> Self {
        Self::from_static(literal)
    }
}

impl From<String> for HexColor {
    fn from(literal: String) -> Self {
        Self(Cow::Owned(literal))
    }
}

impl TryFrom<&HexColor> for Color {
    type Error = ColorError;

    fn try_from(hex: &HexColor) -> Result<Self> {
        hex.to_color()
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

fn parse_hex_literal(literal: &str) -> Result<Color> {
    let digits = literal
        .strip_prefix('#')
        .ok_or_else(|| ColorError::MissingHash(literal.to_string()))?;

    let nibbles = digits
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| ColorError::InvalidDigit(literal.to_string()))?;

    // Short forms repeat each digit: 0xF -> 0xFF
    let short = |n: u8| n * 17;
    let long = |hi: u8, lo: u8| (hi << 4) | lo;

    let [r, g, b, a] = match nibbles.as_slice() {
        [r, g, b] => [short(*r), short(*g), short(*b), 0xFF],
        [r, g, b, a] => [short(*r), short(*g), short(*b), short(*a)],
        [r1, r2, g1, g2, b1, b2] => [long(*r1, *r2), long(*g1, *g2), long(*b1, *b2), 0xFF],
        [r1, r2, g1, g2, b1, b2, a1, a2] => [
            long(*r1, *r2),
            long(*g1, *g2),
            long(*b1, *b2),
            long(*a1, *a2),
        ],
        other => {
            return Err(ColorError::InvalidLength {
                literal: literal.to_string(),
                len: other.len(),
            })
        }
    };

    Ok(Color::from_rgba8(r, g, b, a))
}
