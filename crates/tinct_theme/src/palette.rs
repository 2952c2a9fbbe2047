//! Color families and palette extraction
//!
//! A theme's color map is assembled from one extraction per [`ColorFamily`].
//! The extraction itself is behind [`ColorExtractor`]; [`TailwindPalette`]
//! provides the built-in shades.

use crate::scale::{define_tokens, Token};
use indexmap::IndexMap;
use tinct_core::HexColor;

define_tokens! {
    /// Color families included in every theme, keyed by their key prefix
    pub enum ColorFamily {
        Gray => "gray",
        Red => "red",
        Green => "green",
        Blue => "blue",
        Indigo => "indigo",
        Purple => "purple",
        Pink => "pink",
    }
}

impl ColorFamily {
    /// Name of the source palette the family is extracted from
    pub fn palette(self) -> &'static str {
        match self {
            Self::Gray => "coolGray",
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Indigo => "indigo",
            Self::Purple => "purple",
            Self::Pink => "pink",
        }
    }

    /// Prefix every key produced for this family starts with
    pub fn prefix(self) -> &'static str {
        self.key()
    }
}

/// Maps a palette name to shade-qualified color entries
///
/// Implementations must namespace their keys with `prefix` so that different
/// families never collide with each other or with `white`/`black`. Theme
/// building trusts this and merges fragments without checking.
pub trait ColorExtractor {
    fn extract(&self, palette: &str, prefix: &str) -> IndexMap<String, HexColor>;
}

impl<F> ColorExtractor for F
where
    F: Fn(&str, &str) -> IndexMap<String, HexColor>,
{
    fn extract(&self, palette: &str, prefix: &str) -> IndexMap<String, HexColor> {
        self(palette, prefix)
    }
}

/// Shade steps every Tailwind family defines
pub const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Built-in palette based on the Tailwind v2 color set
///
/// Emits `"{prefix}-{shade}"` keys, e.g. `gray-500`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TailwindPalette;

impl TailwindPalette {
    /// Shade literals for a palette name, lightest first
    pub fn shades(palette: &str) -> Option<&'static [&'static str; 10]> {
        let shades = match palette {
            "coolGray" => &COOL_GRAY,
            "red" => &RED,
            "green" => &GREEN,
            "blue" => &BLUE,
            "indigo" => &INDIGO,
            "purple" => &PURPLE,
            "pink" => &PINK,
            _ => return None,
        };
        Some(shades)
    }
}

impl ColorExtractor for TailwindPalette {
    fn extract(&self, palette: &str, prefix: &str) -> IndexMap<String, HexColor> {
        let Some(shades) = Self::shades(palette) else {
            tracing::warn!(palette, "unknown palette, no colors extracted");
            return IndexMap::new();
        };

        SHADES
            .iter()
            .zip(shades.iter())
            .map(|(shade, &literal)| (format!("{prefix}-{shade}"), HexColor::from_static(literal)))
            .collect()
    }
}

const COOL_GRAY: [&str; 10] = [
    "#f9fafb", "#f3f4f6", "#e5e7eb", "#d1d5db", "#9ca3af", "#6b7280", "#4b5563", "#374151",
    "#1f2937", "#111827",
];

const RED: [&str; 10] = [
    "#fef2f2", "#fee2e2", "#fecaca", "#fca5a5", "#f87171", "#ef4444", "#dc2626", "#b91c1c",
    "#991b1b", "#7f1d1d",
];

const GREEN: [&str; 10] = [
    "#ecfdf5", "#d1fae5", "#a7f3d0", "#6ee7b7", "#34d399", "#10b981", "#059669", "#047857",
    "#065f46", "#064e3b",
];

const BLUE: [&str; 10] = [
    "#eff6ff", "#dbeafe", "#bfdbfe", "#93c5fd", "#60a5fa", "#3b82f6", "#2563eb", "#1d4ed8",
    "#1e40af", "#1e3a8a",
];

const INDIGO: [&str; 10] = [
    "#eef2ff", "#e0e7ff", "#c7d2fe", "#a5b4fc", "#818cf8", "#6366f1", "#4f46e5", "#4338ca",
    "#3730a3", "#312e81",
];

const PURPLE: [&str; 10] = [
    "#f5f3ff", "#ede9fe", "#ddd6fe", "#c4b5fd", "#a78bfa", "#8b5cf6", "#7c3aed", "#6d28d9",
    "#5b21b6", "#4c1d95",
];

const PINK: [&str; 10] = [
    "#fdf2f8", "#fce7f3", "#fbcfe8", "#f9a8d4", "#f472b6", "#ec4899", "#db2777", "#be185d",
    "#9d174d", "#831843",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_family_has_a_built_in_palette() {
        for &family in ColorFamily::ALL {
            let colors = TailwindPalette.extract(family.palette(), family.prefix());
            assert_eq!(colors.len(), SHADES.len(), "family {family:?}");
            assert!(colors.keys().all(|k| k.starts_with(&format!("{}-", family.prefix()))));
            assert!(colors.values().all(|c| c.to_color().is_ok()));
        }
    }

    #[test]
    fn gray_is_extracted_from_cool_gray() {
        let colors = TailwindPalette.extract("coolGray", "gray");
        assert_eq!(colors.get("gray-500").map(HexColor::as_str), Some("#6b7280"));
        assert_eq!(colors.keys().next().map(String::as_str), Some("gray-50"));
    }

    #[test]
    fn unknown_palette_yields_nothing() {
        assert!(TailwindPalette.extract("amber", "amber").is_empty());
    }
}
