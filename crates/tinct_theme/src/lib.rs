//! Tinct Theme
//!
//! Derives a complete set of design tokens from a single base font size.
//!
//! # Overview
//!
//! A [`Theme`] holds ten token scales and one color map:
//!
//! - **Font-derived**: border radii, font sizes (with paired line heights) and
//!   letter spacing are fixed ratios of the base font size
//! - **Fixed**: spacing, opacities, aspect ratios, shadows, font weights and
//!   line height multipliers
//! - **Host-derived**: the `hairline` border width comes from [`DisplayMetrics`]
//! - **Colors**: `white`, `black` and one shade set per [`ColorFamily`]
//!
//! Themes are plain immutable values. Building twice from the same
//! configuration gives equal themes.
//!
//! # Quick Start
//!
//! ```rust
//! use tinct_theme::{build, default_theme, FontSize, FontSizeToken, ThemeConfig};
//!
//! let theme = build(&ThemeConfig::new(16.0));
//! assert_eq!(*theme.font_sizes().token(FontSizeToken::Lg), FontSize::new(18.0, 28.0));
//!
//! // Shared default (base font size 14)
//! assert_eq!(default_theme().font_sizes().get("base").map(|f| f.size), Some(14.0));
//! ```
//!
//! # Custom hosts and palettes
//!
//! ```rust
//! use tinct_theme::{ThemeBuilder, ThemeConfig};
//! use tinct_core::DisplayMetrics;
//!
//! let theme = ThemeBuilder::new()
//!     .with_metrics(DisplayMetrics::new(2.0))
//!     .build(&ThemeConfig::default());
//! assert_eq!(theme.border_sizes().get("hairline"), Some(&0.5));
//! ```

pub mod config;
pub mod palette;
pub mod scale;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use config::{ConfigError, ThemeConfig, DEFAULT_BASE_FONT_SIZE};
pub use palette::{ColorExtractor, ColorFamily, TailwindPalette};
pub use scale::{Scale, Token};
pub use theme::{build, default_theme, ScaleKind, Theme, ThemeBuilder, TokenValue};
pub use tinct_core::{Color, DisplayMetrics, HexColor};
pub use tokens::*;
