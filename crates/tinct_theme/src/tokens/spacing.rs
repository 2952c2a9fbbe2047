//! Spacing tokens
//!
//! Spacing does not follow the base font size: numeric keys map to a fixed
//! 4pt grid and fractional keys to percentages of the parent.

use crate::scale::{define_tokens, Scale};
use serde::Serialize;

define_tokens! {
    /// Spacing token keys
    pub enum SpacingToken {
        Space0 => "0",
        /// A single point
        Pt => "pt",
        Space0_5 => "0.5",
        Space1 => "1",
        Space1_5 => "1.5",
        Space2 => "2",
        Space2_5 => "2.5",
        Space3 => "3",
        Space3_5 => "3.5",
        Space4 => "4",
        Space5 => "5",
        Space6 => "6",
        Space7 => "7",
        Space8 => "8",
        Space9 => "9",
        Space10 => "10",
        Space11 => "11",
        Space12 => "12",
        Space14 => "14",
        Space16 => "16",
        Space20 => "20",
        Space24 => "24",
        Space28 => "28",
        Space32 => "32",
        Space36 => "36",
        Space40 => "40",
        Space48 => "48",
        Space56 => "56",
        Space64 => "64",
        Space72 => "72",
        Space80 => "80",
        Space96 => "96",
        Quarter => "1/4",
        Half => "1/2",
        ThreeQuarters => "3/4",
        Third => "1/3",
        TwoThirds => "2/3",
        Fifth => "1/5",
        TwoFifths => "2/5",
        ThreeFifths => "3/5",
        FourFifths => "4/5",
        Full => "full",
    }
}

/// A spacing value: absolute points or a percentage of the parent
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SpacingValue {
    Points(f64),
    /// Percentage literal such as `"50%"`
    Percent(&'static str),
}

impl SpacingValue {
    pub fn as_points(self) -> Option<f64> {
        match self {
            Self::Points(points) => Some(points),
            Self::Percent(_) => None,
        }
    }

    pub fn as_percent(self) -> Option<&'static str> {
        match self {
            Self::Points(_) => None,
            Self::Percent(percent) => Some(percent),
        }
    }
}

/// Spacing scale
pub type SpacingTokens = Scale<SpacingToken, SpacingValue>;

impl SpacingToken {
    pub fn value(self) -> SpacingValue {
        use SpacingValue::{Percent, Points};

        match self {
            Self::Space0 => Points(0.0),
            Self::Pt => Points(1.0),
            Self::Space0_5 => Points(2.0),
            Self::Space1 => Points(4.0),
            Self::Space1_5 => Points(6.0),
            Self::Space2 => Points(8.0),
            Self::Space2_5 => Points(10.0),
            Self::Space3 => Points(12.0),
            Self::Space3_5 => Points(14.0),
            Self::Space4 => Points(16.0),
            Self::Space5 => Points(20.0),
            Self::Space6 => Points(24.0),
            Self::Space7 => Points(28.0),
            Self::Space8 => Points(32.0),
            Self::Space9 => Points(36.0),
            Self::Space10 => Points(40.0),
            Self::Space11 => Points(44.0),
            Self::Space12 => Points(48.0),
            Self::Space14 => Points(56.0),
            Self::Space16 => Points(64.0),
            Self::Space20 => Points(80.0),
            Self::Space24 => Points(96.0),
            Self::Space28 => Points(112.0),
            Self::Space32 => Points(128.0),
            Self::Space36 => Points(144.0),
            Self::Space40 => Points(160.0),
            Self::Space48 => Points(192.0),
            Self::Space56 => Points(224.0),
            Self::Space64 => Points(256.0),
            Self::Space72 => Points(288.0),
            Self::Space80 => Points(320.0),
            Self::Space96 => Points(384.0),
            Self::Quarter => Percent("25%"),
            Self::Half => Percent("50%"),
            Self::ThreeQuarters => Percent("75%"),
            Self::Third => Percent("33.3333333%"),
            Self::TwoThirds => Percent("66.666666%"),
            Self::Fifth => Percent("20%"),
            Self::TwoFifths => Percent("40%"),
            Self::ThreeFifths => Percent("60%"),
            Self::FourFifths => Percent("80%"),
            Self::Full => Percent("100%"),
        }
    }
}

pub(crate) fn spacing() -> SpacingTokens {
    Scale::from_fn(SpacingToken::value)
}
