//! Core error types

use thiserror::Error;

/// Errors raised when turning a color literal into a [`Color`](crate::Color)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Literal does not start with `#`
    #[error("Color literal must start with '#': {0:?}")]
    MissingHash(String),

    /// Literal has a digit count other than 3, 4, 6 or 8
    #[error("Color literal has invalid length {len}: {literal:?}")]
    InvalidLength { literal: String, len: usize },

    /// Literal contains a non-hexadecimal digit
    #[error("Color literal contains non-hex digit: {0:?}")]
    InvalidDigit(String),
}

/// Result type for color operations
pub type Result<T> = std::result::Result<T, ColorError>;
