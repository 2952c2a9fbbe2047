//! Theme configuration
//!
//! A theme is configured by a single value, the base font size. Documents are
//! read permissively: unknown fields are ignored and a `baseFontSize` of the
//! wrong type falls back to the default instead of failing.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Base font size used when none is configured
pub const DEFAULT_BASE_FONT_SIZE: f64 = 14.0;

/// Field names accepted for the base font size, in priority order
const BASE_FONT_SIZE_KEYS: [&str; 2] = ["baseFontSize", "base_font_size"];

/// Errors raised while reading a configuration document
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid TOML
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// Document is not valid JSON
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Theme builder input
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeConfig {
    /// Reference font size every font-derived scale is a multiple of.
    /// Not validated: zero or negative sizes give degenerate scales.
    pub base_font_size: f64,
}

impl ThemeConfig {
    pub const fn new(base_font_size: f64) -> Self {
        Self { base_font_size }
    }

    pub fn with_base_font_size(mut self, base_font_size: f64) -> Self {
        self.base_font_size = base_font_size;
        self
    }

    /// Parse a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(source)?;
        let value = BASE_FONT_SIZE_KEYS
            .iter()
            .find_map(|key| table.get(*key).map(|value| (*key, value)));

        Ok(Self::from_field(value.map(|(key, value)| {
            let number = match value {
                toml::Value::Float(float) => Some(*float),
                toml::Value::Integer(int) => Some(*int as f64),
                _ => None,
            };
            (key, number)
        })))
    }

    /// Parse a JSON document
    pub fn from_json_str(source: &str) -> Result<Self> {
        let document: serde_json::Value = serde_json::from_str(source)?;
        let value = BASE_FONT_SIZE_KEYS
            .iter()
            .find_map(|key| document.get(*key).map(|value| (*key, value.as_f64())));

        Ok(Self::from_field(value))
    }

    /// Load a config file, as JSON when the extension is `.json`, TOML otherwise
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json_str(&source)?
        } else {
            Self::from_toml_str(&source)?
        };
        tracing::debug!(path = %path.display(), ?config, "loaded theme config");
        Ok(config)
    }

    fn from_field(field: Option<(&str, Option<f64>)>) -> Self {
        match field {
            Some((_, Some(base_font_size))) => Self::new(base_font_size),
            Some((key, None)) => {
                tracing::debug!(key, "ignoring non-numeric base font size, using default");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_FONT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_accepts_both_spellings_and_integers() {
        assert_eq!(
            ThemeConfig::from_toml_str("baseFontSize = 16.5").unwrap(),
            ThemeConfig::new(16.5)
        );
        assert_eq!(
            ThemeConfig::from_toml_str("base_font_size = 12").unwrap(),
            ThemeConfig::new(12.0)
        );
    }

    #[test]
    fn missing_or_malformed_fields_fall_back() {
        assert_eq!(ThemeConfig::from_toml_str("").unwrap(), ThemeConfig::default());
        assert_eq!(
            ThemeConfig::from_toml_str("baseFontSize = \"large\"").unwrap(),
            ThemeConfig::default()
        );
        assert_eq!(
            ThemeConfig::from_json_str(r#"{"baseFontSize": null}"#).unwrap(),
            ThemeConfig::default()
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config =
            ThemeConfig::from_json_str(r#"{"baseFontSize": 10, "darkMode": true}"#).unwrap();
        assert_eq!(config, ThemeConfig::new(10.0));

        let config = ThemeConfig::from_toml_str("accent = \"teal\"\n[extra]\nx = 1").unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn non_object_json_uses_default() {
        assert_eq!(ThemeConfig::from_json_str("[1, 2]").unwrap(), ThemeConfig::default());
    }

    #[test]
    fn syntax_errors_are_reported() {
        assert!(matches!(
            ThemeConfig::from_toml_str("baseFontSize = "),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            ThemeConfig::from_json_str("{"),
            Err(ConfigError::Json(_))
        ));
    }
}
