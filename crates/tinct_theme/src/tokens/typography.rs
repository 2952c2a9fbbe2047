//! Typography tokens
//!
//! Font sizes and letter spacing scale with the base font size. Font weights
//! and line height multipliers are fixed.

use super::scaled;
use crate::scale::{define_tokens, Scale};
use serde::{Serialize, Serializer};

define_tokens! {
    /// Font size token keys
    pub enum FontSizeToken {
        Xs => "xs",
        Sm => "sm",
        Base => "base",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Xl4 => "4xl",
        Xl5 => "5xl",
        Xl6 => "6xl",
        Xl7 => "7xl",
        Xl8 => "8xl",
        Xl9 => "9xl",
    }
}

/// A font size paired with the line height it is set on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSize {
    pub size: f64,
    pub line_height: f64,
}

impl FontSize {
    pub const fn new(size: f64, line_height: f64) -> Self {
        Self { size, line_height }
    }
}

/// Serialized as `[size, line_height]`
impl Serialize for FontSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.size, self.line_height].serialize(serializer)
    }
}

/// Font size scale
pub type FontSizeTokens = Scale<FontSizeToken, FontSize>;

impl FontSizeToken {
    /// `(size, line height)` multipliers of the base font size
    pub fn ratios(self) -> (f64, f64) {
        match self {
            Self::Xs => (0.75, 1.0),
            Self::Sm => (0.875, 1.25),
            Self::Base => (1.0, 1.5),
            Self::Lg => (1.125, 1.75),
            Self::Xl => (1.25, 1.75),
            Self::Xl2 => (1.5, 2.0),
            Self::Xl3 => (1.875, 2.25),
            Self::Xl4 => (2.25, 2.5),
            Self::Xl5 => (3.0, 3.0),
            Self::Xl6 => (3.75, 3.75),
            Self::Xl7 => (4.5, 4.5),
            Self::Xl8 => (6.0, 6.0),
            Self::Xl9 => (8.0, 8.0),
        }
    }

    pub fn value(self, base_font_size: f64) -> FontSize {
        let (size, line_height) = self.ratios();
        FontSize::new(
            scaled(size, base_font_size),
            scaled(line_height, base_font_size),
        )
    }
}

pub(crate) fn font_sizes(base_font_size: f64) -> FontSizeTokens {
    Scale::from_fn(|token: FontSizeToken| token.value(base_font_size))
}

define_tokens! {
    /// Font weight token keys
    pub enum FontWeightToken {
        Thin => "thin",
        ExtraLight => "extralight",
        Light => "light",
        Normal => "normal",
        Medium => "medium",
        SemiBold => "semibold",
        Bold => "bold",
        ExtraBold => "extrabold",
        Black => "black",
    }
}

/// A font weight, kept as the weight name string renderers expect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontWeight(&'static str);

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// Numeric weight (100 to 900)
    pub fn numeric(self) -> u16 {
        self.0.parse().unwrap_or(400)
    }
}

impl Serialize for FontWeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// Font weight scale
pub type FontWeightTokens = Scale<FontWeightToken, FontWeight>;

impl FontWeightToken {
    pub fn value(self) -> FontWeight {
        FontWeight(match self {
            Self::Thin => "100",
            Self::ExtraLight => "200",
            Self::Light => "300",
            Self::Normal => "400",
            Self::Medium => "500",
            Self::SemiBold => "600",
            Self::Bold => "700",
            Self::ExtraBold => "800",
            Self::Black => "900",
        })
    }
}

pub(crate) fn font_weights() -> FontWeightTokens {
    Scale::from_fn(FontWeightToken::value)
}

define_tokens! {
    /// Letter spacing token keys
    pub enum LetterSpacingToken {
        Tighter => "tighter",
        Tight => "tight",
        Normal => "normal",
        Wide => "wide",
        Wider => "wider",
        Widest => "widest",
    }
}

/// Letter spacing scale, in points
pub type LetterSpacingTokens = Scale<LetterSpacingToken, f64>;

impl LetterSpacingToken {
    pub fn ratio(self) -> f64 {
        match self {
            Self::Tighter => -0.05,
            Self::Tight => -0.025,
            Self::Normal => 0.0,
            Self::Wide => 0.025,
            Self::Wider => 0.05,
            Self::Widest => 0.1,
        }
    }

    pub fn value(self, base_font_size: f64) -> f64 {
        scaled(self.ratio(), base_font_size)
    }
}

pub(crate) fn letter_spacing(base_font_size: f64) -> LetterSpacingTokens {
    Scale::from_fn(|token: LetterSpacingToken| token.value(base_font_size))
}

define_tokens! {
    /// Line height token keys
    pub enum LineHeightToken {
        None => "none",
        Tight => "tight",
        Snug => "snug",
        Normal => "normal",
        Relaxed => "relaxed",
        Loose => "loose",
    }
}

/// A unitless line height multiplier, labelled `x<factor>`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineHeight {
    label: &'static str,
    factor: f64,
}

impl LineHeight {
    const fn new(label: &'static str, factor: f64) -> Self {
        Self { label, factor }
    }

    /// Label such as `"x1.5"`
    pub fn label(self) -> &'static str {
        self.label
    }

    /// Multiplier of the font size
    pub fn factor(self) -> f64 {
        self.factor
    }

    /// Resolve against a concrete font size
    pub fn resolve(self, font_size: f64) -> f64 {
        self.factor * font_size
    }
}

impl Serialize for LineHeight {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label)
    }
}

/// Line height scale
pub type LineHeightTokens = Scale<LineHeightToken, LineHeight>;

impl LineHeightToken {
    pub fn value(self) -> LineHeight {
        match self {
            Self::None => LineHeight::new("x1", 1.0),
            Self::Tight => LineHeight::new("x1.25", 1.25),
            Self::Snug => LineHeight::new("x1.375", 1.375),
            Self::Normal => LineHeight::new("x1.5", 1.5),
            Self::Relaxed => LineHeight::new("x1.625", 1.625),
            Self::Loose => LineHeight::new("x2", 2.0),
        }
    }
}

pub(crate) fn line_heights() -> LineHeightTokens {
    Scale::from_fn(LineHeightToken::value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Token;

    #[test]
    fn font_sizes_scale_with_base() {
        let sizes = font_sizes(16.0);
        assert_eq!(*sizes.token(FontSizeToken::Lg), FontSize::new(18.0, 28.0));
        assert_eq!(*sizes.token(FontSizeToken::Base), FontSize::new(16.0, 24.0));
        assert_eq!(sizes.get("9xl"), Some(&FontSize::new(128.0, 128.0)));
    }

    #[test]
    fn font_size_table_at_base_sixteen() {
        let expected = [
            ("xs", 12.0, 16.0),
            ("sm", 14.0, 20.0),
            ("base", 16.0, 24.0),
            ("lg", 18.0, 28.0),
            ("xl", 20.0, 28.0),
            ("2xl", 24.0, 32.0),
            ("3xl", 30.0, 36.0),
            ("4xl", 36.0, 40.0),
            ("5xl", 48.0, 48.0),
            ("6xl", 60.0, 60.0),
            ("7xl", 72.0, 72.0),
            ("8xl", 96.0, 96.0),
            ("9xl", 128.0, 128.0),
        ];
        let sizes = font_sizes(16.0);
        assert_eq!(sizes.len(), expected.len());
        for ((key, value), (expected_key, size, line_height)) in sizes.iter().zip(expected) {
            assert_eq!(key, expected_key);
            assert_eq!(*value, FontSize::new(size, line_height), "key {key}");
        }
    }

    #[test]
    fn weights_are_hundreds() {
        for (index, &token) in FontWeightToken::ALL.iter().enumerate() {
            assert_eq!(token.value().numeric() as usize, (index + 1) * 100);
        }
        assert_eq!(FontWeightToken::Bold.value().as_str(), "700");
    }

    #[test]
    fn line_height_labels_match_factors() {
        for &token in LineHeightToken::ALL {
            let height = token.value();
            let parsed: f64 = height.label().trim_start_matches('x').parse().unwrap();
            assert_eq!(parsed, height.factor());
        }
        assert_eq!(LineHeightToken::Normal.value().resolve(14.0), 21.0);
    }

    #[test]
    fn letter_spacing_is_symmetric_around_normal() {
        let spacing = letter_spacing(10.0);
        assert_eq!(spacing.get("tighter"), Some(&-0.5));
        assert_eq!(spacing.get("normal"), Some(&0.0));
        assert_eq!(spacing.get("wider"), Some(&0.5));
        assert_eq!(spacing.get("widest"), Some(&1.0));
    }
}
