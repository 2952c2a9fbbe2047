//! Theme construction
//!
//! [`ThemeBuilder`] turns a [`ThemeConfig`] into a [`Theme`]. Every scale is
//! evaluated independently from the same base font size; the color map is the
//! union of the base colors and one extraction per [`ColorFamily`].

use crate::config::ThemeConfig;
use crate::palette::{ColorExtractor, ColorFamily, TailwindPalette};
use crate::scale::{define_tokens, Token};
use crate::tokens::*;
use serde::Serialize;
use std::sync::OnceLock;
use tinct_core::{DisplayMetrics, HexColor};

/// Default theme, built on first access
static DEFAULT_THEME: OnceLock<Theme> = OnceLock::new();

/// The theme built from [`ThemeConfig::default`], shared read-only
pub fn default_theme() -> &'static Theme {
    DEFAULT_THEME.get_or_init(|| build(&ThemeConfig::default()))
}

/// Build a theme with the default display metrics and built-in palette
pub fn build(config: &ThemeConfig) -> Theme {
    ThemeBuilder::new().build(config)
}

/// Immutable set of design tokens derived from one base font size
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    base_font_size: f64,
    spacing: SpacingTokens,
    colors: ColorMap,
    opacities: OpacityTokens,
    aspect_ratios: AspectRatioTokens,
    border_sizes: BorderSizeTokens,
    border_radii: RadiusTokens,
    shadows: ShadowTokens,
    font_sizes: FontSizeTokens,
    font_weights: FontWeightTokens,
    letter_spacing: LetterSpacingTokens,
    line_heights: LineHeightTokens,
}

impl Theme {
    /// Base font size the theme was derived from
    pub fn base_font_size(&self) -> f64 {
        self.base_font_size
    }

    pub fn spacing(&self) -> &SpacingTokens {
        &self.spacing
    }

    pub fn colors(&self) -> &ColorMap {
        &self.colors
    }

    pub fn opacities(&self) -> &OpacityTokens {
        &self.opacities
    }

    pub fn aspect_ratios(&self) -> &AspectRatioTokens {
        &self.aspect_ratios
    }

    pub fn border_sizes(&self) -> &BorderSizeTokens {
        &self.border_sizes
    }

    pub fn border_radii(&self) -> &RadiusTokens {
        &self.border_radii
    }

    pub fn shadows(&self) -> &ShadowTokens {
        &self.shadows
    }

    pub fn font_sizes(&self) -> &FontSizeTokens {
        &self.font_sizes
    }

    pub fn font_weights(&self) -> &FontWeightTokens {
        &self.font_weights
    }

    pub fn letter_spacing(&self) -> &LetterSpacingTokens {
        &self.letter_spacing
    }

    pub fn line_heights(&self) -> &LineHeightTokens {
        &self.line_heights
    }

    /// Look up a token by scale name and key, e.g. `("fontSizes", "lg")`
    pub fn lookup(&self, scale: &str, key: &str) -> Option<TokenValue<'_>> {
        self.lookup_in(ScaleKind::from_key(scale)?, key)
    }

    /// Look up a token in a known scale
    pub fn lookup_in(&self, scale: ScaleKind, key: &str) -> Option<TokenValue<'_>> {
        let value = match scale {
            ScaleKind::Spacing => TokenValue::Spacing(*self.spacing.get(key)?),
            ScaleKind::Colors => TokenValue::Color(self.colors.get(key)?),
            ScaleKind::Opacities => TokenValue::Number(*self.opacities.get(key)?),
            ScaleKind::AspectRatios => TokenValue::AspectRatio(*self.aspect_ratios.get(key)?),
            ScaleKind::BorderSizes => TokenValue::Number(*self.border_sizes.get(key)?),
            ScaleKind::BorderRadii => TokenValue::Number(*self.border_radii.get(key)?),
            ScaleKind::Shadows => TokenValue::Shadow(*self.shadows.get(key)?),
            ScaleKind::FontSizes => TokenValue::FontSize(*self.font_sizes.get(key)?),
            ScaleKind::FontWeights => TokenValue::FontWeight(*self.font_weights.get(key)?),
            ScaleKind::LetterSpacing => TokenValue::Number(*self.letter_spacing.get(key)?),
            ScaleKind::LineHeights => TokenValue::LineHeight(*self.line_heights.get(key)?),
        };
        Some(value)
    }

    /// Keys of one scale, in declaration order
    pub fn keys(&self, scale: ScaleKind) -> Vec<&str> {
        match scale {
            ScaleKind::Spacing => self.spacing.keys().collect(),
            ScaleKind::Colors => self.colors.keys().collect(),
            ScaleKind::Opacities => self.opacities.keys().collect(),
            ScaleKind::AspectRatios => self.aspect_ratios.keys().collect(),
            ScaleKind::BorderSizes => self.border_sizes.keys().collect(),
            ScaleKind::BorderRadii => self.border_radii.keys().collect(),
            ScaleKind::Shadows => self.shadows.keys().collect(),
            ScaleKind::FontSizes => self.font_sizes.keys().collect(),
            ScaleKind::FontWeights => self.font_weights.keys().collect(),
            ScaleKind::LetterSpacing => self.letter_spacing.keys().collect(),
            ScaleKind::LineHeights => self.line_heights.keys().collect(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        build(&ThemeConfig::default())
    }
}

define_tokens! {
    /// Scale names as exposed to string-addressed consumers
    pub enum ScaleKind {
        Spacing => "spacing",
        Colors => "colors",
        Opacities => "opacities",
        AspectRatios => "aspectRatios",
        BorderSizes => "borderSizes",
        BorderRadii => "borderRadii",
        Shadows => "shadows",
        FontSizes => "fontSizes",
        FontWeights => "fontWeights",
        LetterSpacing => "letterSpacing",
        LineHeights => "lineHeights",
    }
}

/// A single token value returned by [`Theme::lookup`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue<'a> {
    Number(f64),
    Spacing(SpacingValue),
    Color(&'a HexColor),
    AspectRatio(AspectRatio),
    Shadow(Shadow),
    FontSize(FontSize),
    FontWeight(FontWeight),
    LineHeight(LineHeight),
}

/// Builds themes against a host's display metrics and a color extractor
#[derive(Clone, Debug)]
pub struct ThemeBuilder<E = TailwindPalette> {
    metrics: DisplayMetrics,
    extractor: E,
}

impl ThemeBuilder {
    pub fn new() -> Self {
        Self {
            metrics: DisplayMetrics::default(),
            extractor: TailwindPalette,
        }
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: ColorExtractor> ThemeBuilder<E> {
    /// Display the theme's hairline width is derived for
    pub fn with_metrics(mut self, metrics: DisplayMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Replace the color extractor
    pub fn with_extractor<F: ColorExtractor>(self, extractor: F) -> ThemeBuilder<F> {
        ThemeBuilder {
            metrics: self.metrics,
            extractor,
        }
    }

    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    /// Derive a theme from `config`
    pub fn build(&self, config: &ThemeConfig) -> Theme {
        let base = config.base_font_size;
        tracing::trace!(
            base_font_size = base,
            scale_factor = self.metrics.scale_factor,
            "building theme"
        );

        Theme {
            base_font_size: base,
            spacing: spacing(),
            colors: self.colors(),
            opacities: opacities(),
            aspect_ratios: aspect_ratios(),
            border_sizes: border_sizes(&self.metrics),
            border_radii: border_radii(base),
            shadows: shadows(),
            font_sizes: font_sizes(base),
            font_weights: font_weights(),
            letter_spacing: letter_spacing(base),
            line_heights: line_heights(),
        }
    }

    fn colors(&self) -> ColorMap {
        let mut colors = ColorMap::base();
        for &family in ColorFamily::ALL {
            let fragment = self.extractor.extract(family.palette(), family.prefix());
            let overwritten = colors.merge(fragment);
            if !overwritten.is_empty() {
                tracing::debug!(?family, ?overwritten, "color family overwrote existing keys");
            }
        }
        colors
    }
}
