//! Color tokens
//!
//! Colors form one flat namespace of shade-qualified names (`white`,
//! `gray-500`, ...). Fragments are merged with a plain union: a key seen again
//! replaces the earlier value.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use tinct_core::HexColor;

/// Keys always present ahead of any palette family
pub const WHITE: &str = "white";
pub const BLACK: &str = "black";

/// Flat mapping from color names to color literals
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorMap {
    entries: IndexMap<String, HexColor>,
}

impl ColorMap {
    /// Map holding only `white` and `black`
    pub fn base() -> Self {
        let mut map = Self::default();
        map.entries
            .insert(WHITE.to_string(), HexColor::from_static("#fff"));
        map.entries
            .insert(BLACK.to_string(), HexColor::from_static("#000"));
        map
    }

    /// Union `fragment` into the map, returning the keys it overwrote
    pub(crate) fn merge(
        &mut self,
        fragment: impl IntoIterator<Item = (String, HexColor)>,
    ) -> Vec<String> {
        let mut overwritten = Vec::new();
        for (key, color) in fragment {
            if self.entries.contains_key(&key) {
                overwritten.push(key.clone());
            }
            self.entries.insert(key, color);
        }
        overwritten
    }

    pub fn get(&self, key: &str) -> Option<&HexColor> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HexColor)> + '_ {
        self.entries.iter().map(|(key, color)| (key.as_str(), color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ColorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_map_has_white_then_black() {
        let map = ColorMap::base();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["white", "black"]);
        assert_eq!(map.get("white").map(HexColor::as_str), Some("#fff"));
        assert_eq!(map.get("black").map(HexColor::as_str), Some("#000"));
    }

    #[test]
    fn merge_overwrites_and_reports_collisions() {
        let mut map = ColorMap::base();
        let overwritten = map.merge([
            ("white".to_string(), HexColor::from_static("#fefefe")),
            ("teal-500".to_string(), HexColor::from_static("#14b8a6")),
        ]);
        assert_eq!(overwritten, vec!["white".to_string()]);
        assert_eq!(map.len(), 3);
        assert_eq!(map.get("white").map(HexColor::as_str), Some("#fefefe"));
        // Overwriting keeps the original position
        assert_eq!(map.keys().next(), Some("white"));
    }
}
