//! Design tokens
//!
//! Each module declares one closed key set and the value every key maps to:
//! - Spacing (fixed points and percentages)
//! - Opacity
//! - Aspect ratios
//! - Border sizes and radii
//! - Shadows
//! - Typography (font sizes, weights, letter spacing, line heights)
//! - Colors (the merged palette)
//!
//! Scales marked as font-derived are `ratio × base font size`; the rest are
//! fixed tables.

mod aspect;
mod border;
mod color;
mod opacity;
mod shadow;
mod spacing;
mod typography;

pub use aspect::*;
pub use border::*;
pub use color::*;
pub use opacity::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;

/// `ratio × base`, with a negative zero folded to `0.0`
///
/// Negative ratios applied to a zero base would otherwise yield `-0.0`.
pub(crate) fn scaled(ratio: f64, base: f64) -> f64 {
    ratio * base + 0.0
}

#[cfg(test)]
mod tests {
    use super::scaled;

    #[test]
    fn scaled_never_yields_negative_zero() {
        assert!(scaled(-0.05, 0.0).is_sign_positive());
        assert_eq!(scaled(-0.05, 10.0), -0.5);
        assert_eq!(scaled(1.125, 16.0), 18.0);
    }
}
