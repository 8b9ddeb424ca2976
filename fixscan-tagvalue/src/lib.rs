/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # FixScan Tag-Value
//!
//! Zero-copy field extraction from delimiter-separated tag=value messages.
//!
//! ## Features
//!
//! - **Two scanners**: a byte-by-byte reference scanner and a 64-byte lane
//!   scanner that uses AVX-512BW when the CPU has it
//! - **Zero-copy parsing**: text fields reference the original buffer
//! - **Best-effort decoding**: malformed fields are dropped, never fatal
//! - **Runtime dispatch**: [`parse_auto`] checks the CPU once per process
//!
//! ## Example
//!
//! ```
//! use fixscan_tagvalue::parse_auto;
//!
//! let msg = parse_auto("8=FIX.4.4|35=D|55=AAPL|54=1|38=100|44=150.25|");
//! assert!(msg.valid);
//! assert_eq!(msg.symbol_str().unwrap(), "AAPL");
//! assert_eq!(msg.quantity, 100);
//! ```

pub mod config;
pub mod cpu;
pub mod numeric;
pub mod parser;
pub mod scalar;
pub mod simd;

pub use config::{EQUALS, PIPE, ParserConfig, SOH, ScanStrategy};
pub use cpu::{LaneKernel, avx512_enabled, has_avx512_support, scan_kernel};
pub use fixscan_core::field::FieldRef;
pub use fixscan_core::message::FixMessage;
pub use numeric::{parse_double, parse_int};
pub use parser::{
    Fields, Parser, fields, parse_auto, parse_auto_with, parse_scalar, parse_scalar_with,
    parse_simd, parse_simd_with,
};
pub use scalar::{Offsets, find_delimiters_scalar};
pub use simd::{LANE_WIDTH, find_delimiters_simd};
