//! Tinct Core
//!
//! Value primitives shared by the Tinct crates:
//!
//! - **Colors**: numeric RGBA [`Color`] and the literal [`HexColor`] form kept in theme palettes
//! - **Display metrics**: host pixel density and the hairline width derived from it
//!
//! # Example
//!
//! ```rust
//! use tinct_core::{Color, DisplayMetrics, HexColor};
//!
//! let white = HexColor::from_static("#fff");
//! assert_eq!(white.to_color(), Ok(Color::WHITE));
//!
//! let retina = DisplayMetrics::new(2.0);
//! assert_eq!(retina.hairline_width(), 0.5);
//! ```

pub mod color;
pub mod error;
pub mod metrics;

pub use color::{Color, HexColor};
pub use error::ColorError;
pub use metrics::DisplayMetrics;
