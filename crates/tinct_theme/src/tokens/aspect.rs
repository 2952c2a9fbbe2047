//! Aspect ratio tokens

use crate::scale::{define_tokens, Scale};
use serde::{Serialize, Serializer};

define_tokens! {
    /// Aspect ratio token keys, `width-height`
    pub enum AspectRatioToken {
        Square => "1",
        Landscape16x9 => "16-9",
        Portrait9x16 => "9-16",
        Portrait3x4 => "3-4",
        Landscape4x3 => "4-3",
        Portrait1x2 => "1-2",
        Landscape2x1 => "2-1",
        Portrait2x3 => "2-3",
        Landscape3x2 => "3-2",
    }
}

/// Width to height proportion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

impl Serialize for AspectRatio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.width, self.height].serialize(serializer)
    }
}

/// Aspect ratio scale
pub type AspectRatioTokens = Scale<AspectRatioToken, AspectRatio>;

impl AspectRatioToken {
    pub fn value(self) -> AspectRatio {
        match self {
            Self::Square => AspectRatio::new(1, 1),
            Self::Landscape16x9 => AspectRatio::new(16, 9),
            Self::Portrait9x16 => AspectRatio::new(9, 16),
            Self::Portrait3x4 => AspectRatio::new(3, 4),
            Self::Landscape4x3 => AspectRatio::new(4, 3),
            Self::Portrait1x2 => AspectRatio::new(1, 2),
            Self::Landscape2x1 => AspectRatio::new(2, 1),
            Self::Portrait2x3 => AspectRatio::new(2, 3),
            Self::Landscape3x2 => AspectRatio::new(3, 2),
        }
    }
}

pub(crate) fn aspect_ratios() -> AspectRatioTokens {
    Scale::from_fn(AspectRatioToken::value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::Token;

    #[test]
    fn keys_spell_out_the_ratio() {
        for &token in AspectRatioToken::ALL {
            let AspectRatio { width, height } = token.value();
            let expected = if width == height {
                width.to_string()
            } else {
                format!("{width}-{height}")
            };
            assert_eq!(token.key(), expected);
        }
    }
}
