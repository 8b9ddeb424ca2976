/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Parser configuration.
//!
//! This module provides the delimiter and scan strategy options used by
//! [`Parser`](crate::Parser).

use crate::cpu::avx512_enabled;
use fixscan_core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Field delimiter used by the example wire format.
pub const PIPE: u8 = b'|';

/// SOH (Start of Header) delimiter used by real FIX sessions.
pub const SOH: u8 = 0x01;

/// Separator between tag and value inside a field.
pub const EQUALS: u8 = b'=';

static AUTO_STRATEGY: OnceLock<ScanStrategy> = OnceLock::new();

/// Which delimiter scanner drives the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanStrategy {
    /// Byte-by-byte scan.
    Scalar,
    /// 64-byte lane scan.
    Simd,
    /// Pick `Simd` when the CPU supports AVX-512, else `Scalar`.
    #[default]
    Auto,
}

impl ScanStrategy {
    /// Resolves `Auto` to a concrete strategy.
    ///
    /// The `Auto` decision is made once per process and reused.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            Self::Auto => *AUTO_STRATEGY.get_or_init(|| {
                if avx512_enabled() {
                    Self::Simd
                } else {
                    Self::Scalar
                }
            }),
            concrete => concrete,
        }
    }
}

impl fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Simd => write!(f, "simd"),
            Self::Auto => write!(f, "auto"),
        }
    }
}

/// Configuration for a [`Parser`](crate::Parser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Byte separating consecutive fields.
    pub delimiter: u8,
    /// Scanner used to find delimiters.
    pub strategy: ScanStrategy,
}

impl ParserConfig {
    /// Creates a configuration with the `|` delimiter and automatic strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: PIPE,
            strategy: ScanStrategy::Auto,
        }
    }

    /// Creates a configuration for SOH-delimited FIX traffic.
    #[must_use]
    pub const fn soh() -> Self {
        Self::new().with_delimiter(SOH)
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the scan strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Checks that the delimiter can separate tag=value fields.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDelimiter` if the delimiter is `=` or an
    /// ASCII digit.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter == EQUALS || self.delimiter.is_ascii_digit() {
            return Err(ConfigError::InvalidDelimiter {
                delimiter: self.delimiter,
            });
        }
        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}
