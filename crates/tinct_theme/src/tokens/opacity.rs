//! Opacity tokens

use crate::scale::{define_tokens, Scale};

define_tokens! {
    /// Opacity token keys, named after their percentage
    pub enum OpacityToken {
        Opacity0 => "0",
        Opacity5 => "5",
        Opacity10 => "10",
        Opacity20 => "20",
        Opacity25 => "25",
        Opacity30 => "30",
        Opacity40 => "40",
        Opacity50 => "50",
        Opacity60 => "60",
        Opacity70 => "70",
        Opacity75 => "75",
        Opacity80 => "80",
        Opacity90 => "90",
        Opacity95 => "95",
    }
}

/// Opacity scale, values in `0.0..=1.0`
pub type OpacityTokens = Scale<OpacityToken, f64>;

impl OpacityToken {
    pub fn value(self) -> f64 {
        match self {
            Self::Opacity0 => 0.0,
            Self::Opacity5 => 0.05,
            Self::Opacity10 => 0.1,
            Self::Opacity20 => 0.2,
            Self::Opacity25 => 0.25,
            Self::Opacity30 => 0.3,
            Self::Opacity40 => 0.4,
            Self::Opacity50 => 0.5,
            Self::Opacity60 => 0.6,
            Self::Opacity70 => 0.7,
            Self::Opacity75 => 0.75,
            Self::Opacity80 => 0.8,
            Self::Opacity90 => 0.9,
            Self::Opacity95 => 0.95,
        }
    }
}

pub(crate) fn opacities() -> OpacityTokens {
    Scale::from_fn(OpacityToken::value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Token;

    #[test]
    fn values_are_key_percentages() {
        for &token in OpacityToken::ALL {
            let percent: f64 = token.key().parse().unwrap();
            let value = token.value();
            assert_eq!(value, percent / 100.0, "key {}", token.key());
            assert!((0.0..=1.0).contains(&value));
        }
        assert_eq!(opacities().len(), 14);
    }
}
