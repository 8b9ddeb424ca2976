/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # FixScan
//!
//! SIMD-accelerated field extraction for FIX-style tag=value messages.
//!
//! FixScan pulls a fixed set of order fields (message type, symbol, side,
//! quantity, price and the two CompIDs) out of a delimiter-separated message
//! without copying the text.
//!
//! ## Features
//!
//! - **Zero-copy parsing**: text fields reference the original buffer
//! - **SIMD-accelerated**: AVX-512BW delimiter scan, 64 bytes per step
//! - **Runtime dispatch**: falls back to the scalar scanner on older CPUs
//! - **Any delimiter**: `|` for logs and tests, SOH for live sessions
//!
//! ## Quick Start
//!
//! ```rust
//! use fixscan::prelude::*;
//!
//! let msg = parse_auto("8=FIX.4.4|35=D|49=SENDER|56=TARGET|55=AAPL|54=1|38=100|44=150.25|");
//! assert!(msg.valid);
//! assert_eq!(msg.side_kind(), Some(Side::Buy));
//!
//! let parser = Parser::new(ParserConfig::soh()).unwrap();
//! let msg = parser.parse("35=D\x0155=MSFT\x01");
//! assert_eq!(msg.symbol_str().unwrap(), "MSFT");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Message record, field and tag types, error definitions
//! - [`tagvalue`]: Delimiter scanners, numeric decoders and the parser

pub mod core {
    //! Message record, field and tag types, error definitions.
    pub use fixscan_core::*;
}

pub mod tagvalue {
    //! Delimiter scanners, numeric decoders and the parser.
    pub use fixscan_tagvalue::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixscan_core::{
        ConfigError, DecodeError, FieldRef, FixMessage, FixScanError, OwnedMessage, Result, Side,
        Tag,
    };

    // Parsing
    pub use fixscan_tagvalue::{
        Parser, ParserConfig, SOH, ScanStrategy, fields, parse_auto, parse_auto_with, parse_scalar,
        parse_scalar_with, parse_simd, parse_simd_with,
    };

    // Scanning
    pub use fixscan_tagvalue::{
        Offsets, find_delimiters_scalar, find_delimiters_simd, has_avx512_support,
    };
}
