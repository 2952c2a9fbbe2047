//! Command implementations
//!
//! Each command returns the text to print so it can be tested without a
//! process boundary.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use std::path::PathBuf;
use tinct_core::DisplayMetrics;
use tinct_theme::{
    ColorExtractor, ColorFamily, ScaleKind, TailwindPalette, Theme, ThemeBuilder, ThemeConfig,
    Token,
};

/// Serialization format for `build`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Toml,
}

/// Where a theme's configuration comes from
#[derive(Debug, Default)]
pub struct ThemeOptions {
    pub config: Option<PathBuf>,
    pub base_font_size: Option<f64>,
    pub scale_factor: f64,
}

impl ThemeOptions {
    /// Resolve the config file and flag overrides into a config
    pub fn config(&self) -> Result<ThemeConfig> {
        let mut config = match &self.config {
            Some(path) => ThemeConfig::load(path)
                .with_context(|| format!("Failed to load theme config {}", path.display()))?,
            None => ThemeConfig::default(),
        };
        if let Some(base_font_size) = self.base_font_size {
            config = config.with_base_font_size(base_font_size);
        }
        Ok(config)
    }

    pub fn build_theme(&self) -> Result<Theme> {
        let config = self.config()?;
        tracing::info!(base_font_size = config.base_font_size, "building theme");
        if !config.base_font_size.is_finite() {
            tracing::warn!(
                base_font_size = config.base_font_size,
                "base font size is not finite, font-derived tokens will serialize as null"
            );
        }

        Ok(ThemeBuilder::new()
            .with_metrics(DisplayMetrics::new(self.scale_factor))
            .build(&config))
    }
}

/// Parse `--scale-factor`, which must be a positive finite number
pub fn parse_scale_factor(value: &str) -> std::result::Result<f64, String> {
    let scale_factor: f64 = value
        .parse()
        .map_err(|err| format!("invalid scale factor '{value}': {err}"))?;
    if DisplayMetrics::new(scale_factor).is_valid() {
        Ok(scale_factor)
    } else {
        Err(format!("scale factor must be a positive finite number, got '{value}'"))
    }
}

/// Print the full theme
pub fn build(options: &ThemeOptions, format: OutputFormat) -> Result<String> {
    let theme = options.build_theme()?;
    let output = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&theme).context("Failed to serialize theme as JSON")?
        }
        OutputFormat::Toml => {
            toml::to_string_pretty(&theme).context("Failed to serialize theme as TOML")?
        }
    };
    Ok(output)
}

/// Print one token as JSON
pub fn get(options: &ThemeOptions, scale: &str, key: &str) -> Result<String> {
    let theme = options.build_theme()?;
    let Some(kind) = ScaleKind::from_key(scale) else {
        let known: Vec<&str> = ScaleKind::ALL.iter().map(|s| s.key()).collect();
        bail!("Unknown scale '{scale}', expected one of: {}", known.join(", "));
    };
    let Some(value) = theme.lookup_in(kind, key) else {
        bail!(
            "Unknown key '{key}' in {scale}, expected one of: {}",
            theme.keys(kind).join(", ")
        );
    };
    serde_json::to_string(&value).context("Failed to serialize token")
}

/// List color families with their palette and key prefix
pub fn families() -> String {
    ColorFamily::ALL
        .iter()
        .map(|family| {
            let shades = TailwindPalette
                .extract(family.palette(), family.prefix())
                .len();
            format!(
                "{:<8} palette={:<10} shades={shades}",
                family.prefix(),
                family.palette()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn options() -> ThemeOptions {
        ThemeOptions {
            scale_factor: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn get_prints_token_json() {
        let options = ThemeOptions {
            base_font_size: Some(16.0),
            ..options()
        };
        assert_eq!(get(&options, "fontSizes", "lg").unwrap(), "[18.0,28.0]");
        assert_eq!(get(&options, "colors", "white").unwrap(), "\"#fff\"");
        assert_eq!(get(&options, "spacing", "1/2").unwrap(), "\"50%\"");
    }

    #[test]
    fn get_rejects_unknown_scale_and_key() {
        let err = get(&options(), "gradients", "sm").unwrap_err();
        assert!(err.to_string().contains("Unknown scale 'gradients'"));

        let err = get(&options(), "borderRadii", "huge").unwrap_err();
        assert!(err.to_string().contains("none, sm, base"));
    }

    #[test]
    fn build_emits_json_and_toml() {
        let json = build(&options(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["baseFontSize"], 14.0);
        assert_eq!(parsed["letterSpacing"]["normal"], 0.0);

        let toml_output = build(&options(), OutputFormat::Toml).unwrap();
        let table: toml::Table = toml::from_str(&toml_output).unwrap();
        assert_eq!(table["baseFontSize"].as_float(), Some(14.0));
        assert_eq!(table["colors"]["gray-900"].as_str(), Some("#111827"));
    }

    #[test]
    fn flags_override_config_file() {
        let path = std::env::temp_dir().join(format!("tinct-cli-{}.toml", std::process::id()));
        fs::write(&path, "baseFontSize = 12\n").unwrap();

        let from_file = ThemeOptions {
            config: Some(path.clone()),
            ..options()
        };
        assert_eq!(from_file.config().unwrap(), ThemeConfig::new(12.0));

        let overridden = ThemeOptions {
            base_font_size: Some(20.0),
            ..from_file
        };
        assert_eq!(overridden.config().unwrap(), ThemeConfig::new(20.0));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let options = ThemeOptions {
            config: Some(PathBuf::from("/nonexistent/tinct.toml")),
            ..options()
        };
        let err = options.config().unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }

    #[test]
    fn scale_factor_must_be_positive_and_finite() {
        assert_eq!(parse_scale_factor("2"), Ok(2.0));
        assert_eq!(parse_scale_factor("1.5"), Ok(1.5));
        for bad in ["0", "-1", "nan", "inf", "dense"] {
            assert!(parse_scale_factor(bad).is_err(), "{bad} accepted");
        }
    }

    #[test]
    fn degenerate_scale_factor_still_gives_numeric_hairline() {
        let options = ThemeOptions {
            scale_factor: 0.0,
            ..options()
        };
        let json = build(&options, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["borderSizes"]["hairline"], 1.0);
    }

    #[test]
    fn non_finite_base_builds_with_null_font_tokens() {
        let options = ThemeOptions {
            base_font_size: Some(f64::INFINITY),
            ..options()
        };
        let json = build(&options, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["fontSizes"]["base"][0].is_null());
        assert_eq!(parsed["borderRadii"]["full"], 999.0);
    }

    #[test]
    fn families_lists_every_family() {
        let listing = families();
        assert_eq!(listing.lines().count(), ColorFamily::ALL.len());
        assert!(listing.starts_with("gray"));
        assert!(listing.contains("palette=coolGray"));
        assert!(listing.lines().all(|line| line.ends_with("shades=10")));
    }
}
