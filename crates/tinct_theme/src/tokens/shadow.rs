//! Shadow tokens
//!
//! Each shadow is described twice: as a single elevation level for backends
//! that derive shadows from depth, and as explicit geometry for backends that
//! take offset, blur and opacity. Neither depends on the base font size.

use crate::scale::{define_tokens, Scale};
use serde::{Serialize, Serializer};

define_tokens! {
    /// Shadow token keys
    pub enum ShadowToken {
        Sm => "sm",
        Base => "base",
        Md => "md",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
    }
}

/// Explicit shadow geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowGeometry {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur_radius: f64,
    pub opacity: f64,
}

impl ShadowGeometry {
    pub const fn new(offset_x: f64, offset_y: f64, blur_radius: f64, opacity: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            blur_radius,
            opacity,
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.offset_x, self.offset_y, self.blur_radius, self.opacity]
    }
}

/// Serialized as `[offset_x, offset_y, blur_radius, opacity]`
impl Serialize for ShadowGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_array().serialize(serializer)
    }
}

/// A shadow definition
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Shadow {
    /// Elevation level for depth-based backends
    #[serde(rename = "android")]
    pub elevation: f64,
    /// Geometry for offset/blur backends
    #[serde(rename = "ios")]
    pub geometry: ShadowGeometry,
}

impl Shadow {
    pub const fn new(elevation: f64, geometry: ShadowGeometry) -> Self {
        Self {
            elevation,
            geometry,
        }
    }
}

/// Shadow scale
pub type ShadowTokens = Scale<ShadowToken, Shadow>;

impl ShadowToken {
    pub fn value(self) -> Shadow {
        match self {
            Self::Sm => Shadow::new(1.0, ShadowGeometry::new(0.0, 1.0, 1.0, 0.18)),
            Self::Base => Shadow::new(2.0, ShadowGeometry::new(0.0, 1.0, 1.41, 0.2)),
            Self::Md => Shadow::new(5.0, ShadowGeometry::new(0.0, 2.0, 3.84, 0.25)),
            Self::Lg => Shadow::new(8.0, ShadowGeometry::new(0.0, 4.0, 4.65, 0.3)),
            Self::Xl => Shadow::new(12.0, ShadowGeometry::new(0.0, 6.0, 7.49, 0.37)),
            Self::Xl2 => Shadow::new(16.0, ShadowGeometry::new(0.0, 8.0, 10.32, 0.44)),
        }
    }
}

pub(crate) fn shadows() -> ShadowTokens {
    Scale::from_fn(ShadowToken::value)
}
