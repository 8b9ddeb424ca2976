/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # FixScan Core
//!
//! Core types and error definitions for the FixScan field extractor.
//!
//! This crate provides the building blocks shared by the scanning and
//! assembling crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: [`Tag`] and the zero-copy [`FieldRef`]
//! - **Message types**: the borrowed [`FixMessage`] record and its owned
//!   counterpart [`OwnedMessage`]
//! - **Core types**: [`Side`]
//!
//! ## Zero-Copy Design
//!
//! [`FixMessage`] borrows every text field from the caller's buffer. The
//! lifetime parameter ties the record to that buffer, so a record cannot
//! outlive the bytes it points into. Use [`FixMessage::to_owned_message`]
//! when a message must be stored or sent to another thread.

pub mod error;
pub mod field;
pub mod message;
pub mod types;

pub use error::{ConfigError, DecodeError, FixScanError, Result};
pub use field::{FieldRef, Tag};
pub use message::{FixMessage, OwnedMessage};
pub use types::Side;
