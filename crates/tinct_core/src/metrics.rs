//! Host display metrics
//!
//! Some tokens depend on the display they are rendered on rather than on the
//! theme configuration. The host reports its pixel density through
//! [`DisplayMetrics`]; tokens read derived values from it.

/// Thickness a hairline aims for before snapping to physical pixels
const HAIRLINE_TARGET: f64 = 0.4;

/// Pixel density of the display a theme is built for
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Physical pixels per logical point
    pub scale_factor: f64,
}

impl DisplayMetrics {
    pub const fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    /// Whether the scale factor is a positive finite number
    pub fn is_valid(&self) -> bool {
        self.scale_factor.is_finite() && self.scale_factor > 0.0
    }

    /// Round a logical size to the nearest whole physical pixel
    pub fn round_to_nearest_pixel(&self, size: f64) -> f64 {
        (size * self.scale_factor).round() / self.scale_factor
    }

    /// Thinnest line the display can draw, in logical points
    ///
    /// Snaps a 0.4pt line to the pixel grid. On low density displays that
    /// rounds to nothing, so one physical pixel is used instead. A scale
    /// factor that is not a positive finite number yields one point.
    pub fn hairline_width(&self) -> f64 {
        if !self.is_valid() {
            return 1.0;
        }
        let width = self.round_to_nearest_pixel(HAIRLINE_TARGET);
        if width == 0.0 {
            1.0 / self.scale_factor
        } else {
            width
        }
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::new(1.0)
    }
}
