//! Border size and radius tokens

use super::scaled;
use crate::scale::{define_tokens, Scale};
use tinct_core::DisplayMetrics;

define_tokens! {
    /// Border width token keys
    pub enum BorderSizeToken {
        Border0 => "0",
        /// Thinnest line the host display can draw
        Hairline => "hairline",
        Border1 => "1",
        Border2 => "2",
        Border4 => "4",
        Border8 => "8",
    }
}

/// Border width scale, in points
pub type BorderSizeTokens = Scale<BorderSizeToken, f64>;

impl BorderSizeToken {
    pub fn value(self, metrics: &DisplayMetrics) -> f64 {
        match self {
            Self::Border0 => 0.0,
            Self::Hairline => metrics.hairline_width(),
            Self::Border1 => 1.0,
            Self::Border2 => 2.0,
            Self::Border4 => 4.0,
            Self::Border8 => 8.0,
        }
    }
}

pub(crate) fn border_sizes(metrics: &DisplayMetrics) -> BorderSizeTokens {
    Scale::from_fn(|token: BorderSizeToken| token.value(metrics))
}

define_tokens! {
    /// Border radius token keys
    pub enum RadiusToken {
        None => "none",
        Sm => "sm",
        Base => "base",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Full => "full",
    }
}

/// Radius large enough to fully round any practical element
pub const RADIUS_FULL: f64 = 999.0;

/// Border radius scale, in points
pub type RadiusTokens = Scale<RadiusToken, f64>;

impl RadiusToken {
    /// Multiplier applied to the base font size, `None` for fixed radii
    pub fn ratio(self) -> Option<f64> {
        match self {
            Self::None | Self::Full => None,
            Self::Sm => Some(0.125),
            Self::Base => Some(0.25),
            Self::Md => Some(0.375),
            Self::Lg => Some(0.5),
            Self::Xl => Some(0.75),
            Self::Xl2 => Some(1.0),
            Self::Xl3 => Some(1.5),
        }
    }

    pub fn value(self, base_font_size: f64) -> f64 {
        match (self, self.ratio()) {
            (_, Some(ratio)) => scaled(ratio, base_font_size),
            (Self::Full, None) => RADIUS_FULL,
            (_, None) => 0.0,
        }
    }
}

pub(crate) fn border_radii(base_font_size: f64) -> RadiusTokens {
    Scale::from_fn(|token: RadiusToken| token.value(base_font_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_radii_ignore_base() {
        for base in [0.0, 8.0, 14.0, 1000.0] {
            let radii = border_radii(base);
            assert_eq!(*radii.token(RadiusToken::None), 0.0);
            assert_eq!(*radii.token(RadiusToken::Full), RADIUS_FULL);
        }
    }

    #[test]
    fn scaled_radii_follow_base() {
        let radii = border_radii(16.0);
        assert_eq!(radii.get("sm"), Some(&2.0));
        assert_eq!(radii.get("md"), Some(&6.0));
        assert_eq!(radii.get("2xl"), Some(&16.0));
        assert_eq!(radii.get("3xl"), Some(&24.0));
    }

    #[test]
    fn hairline_comes_from_metrics() {
        let sizes = border_sizes(&DisplayMetrics::new(2.0));
        assert_eq!(sizes.get("hairline"), Some(&0.5));
        assert_eq!(sizes.get("8"), Some(&8.0));
        assert_eq!(sizes.keys().collect::<Vec<_>>(), ["0", "hairline", "1", "2", "4", "8"]);
    }
}
