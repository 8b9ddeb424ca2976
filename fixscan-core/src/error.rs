/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types for FixScan.
//!
//! Parsing itself never fails: malformed fields are dropped and missing
//! required tags only clear the `valid` flag. The errors below exist for the
//! opt-in strict accessors on [`FixMessage`](crate::FixMessage) and for
//! parser configuration.

use thiserror::Error;

/// Result type alias using [`FixScanError`] as the error type.
pub type Result<T> = std::result::Result<T, FixScanError>;

/// Top-level error type for all FixScan operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FixScanError {
    /// Error while reading fields of a parsed message.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Invalid parser configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by the strict accessors of a parsed message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A required field was absent or empty.
    #[error("missing required field: tag {tag}")]
    MissingRequiredField {
        /// The tag number of the missing field.
        tag: u32,
    },

    /// Invalid UTF-8 in a text field.
    #[error("invalid utf-8 in field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// Errors in parser configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The delimiter collides with the tag=value syntax.
    #[error("invalid delimiter 0x{delimiter:02x}: must not be '=' or an ascii digit")]
    InvalidDelimiter {
        /// The rejected delimiter byte.
        delimiter: u8,
    },
}
