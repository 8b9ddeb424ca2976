/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Message types for extracted FIX fields.
//!
//! This module provides:
//! - [`FixMessage`]: Zero-copy record of the extracted fields
//! - [`OwnedMessage`]: Owned copy for storage and cross-thread transfer

use crate::error::DecodeError;
use crate::field::Tag;
use crate::types::Side;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-copy record of the fields extracted from one message.
///
/// Text fields are views into the buffer handed to the parser, numeric
/// fields are decoded on the spot. Unset fields keep their defaults (empty
/// view, `0`, `0.0`). `valid` is true when both the message type and the
/// symbol are non-empty.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct FixMessage<'a> {
    /// Message type (tag 35), e.g. `D` for NewOrderSingle.
    pub message_type: &'a [u8],
    /// Symbol (tag 55).
    pub symbol: &'a [u8],
    /// Sender CompID (tag 49).
    pub sender: &'a [u8],
    /// Target CompID (tag 56).
    pub target: &'a [u8],
    /// Side (tag 54), 1 = buy, 2 = sell.
    pub side: i32,
    /// Order quantity (tag 38).
    pub quantity: i32,
    /// Price (tag 44).
    pub price: f64,
    /// Whether the message type and symbol are both present.
    pub valid: bool,
}

impl<'a> FixMessage<'a> {
    /// Creates an empty, invalid record.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            message_type: &[],
            symbol: &[],
            sender: &[],
            target: &[],
            side: 0,
            quantity: 0,
            price: 0.0,
            valid: false,
        }
    }

    /// Returns true if the message type and symbol are both non-empty.
    ///
    /// This is the rule the parser uses to set `valid` once the scan ends.
    #[inline]
    #[must_use]
    pub const fn has_required_fields(&self) -> bool {
        !self.message_type.is_empty() && !self.symbol.is_empty()
    }

    /// Returns the message type as a string slice.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidUtf8` if the value is not valid UTF-8.
    pub fn message_type_str(&self) -> Result<&'a str, DecodeError> {
        Ok(std::str::from_utf8(self.message_type)?)
    }

    /// Returns the symbol as a string slice.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidUtf8` if the value is not valid UTF-8.
    pub fn symbol_str(&self) -> Result<&'a str, DecodeError> {
        Ok(std::str::from_utf8(self.symbol)?)
    }

    /// Returns the sender CompID as a string slice.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidUtf8` if the value is not valid UTF-8.
    pub fn sender_str(&self) -> Result<&'a str, DecodeError> {
        Ok(std::str::from_utf8(self.sender)?)
    }

    /// Returns the target CompID as a string slice.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidUtf8` if the value is not valid UTF-8.
    pub fn target_str(&self) -> Result<&'a str, DecodeError> {
        Ok(std::str::from_utf8(self.target)?)
    }

    /// Returns the side as a [`Side`], if the code is a known one.
    #[inline]
    #[must_use]
    pub const fn side_kind(&self) -> Option<Side> {
        Side::from_code(self.side)
    }

    /// Returns the record if both required fields are present.
    ///
    /// # Errors
    /// Returns `DecodeError::MissingRequiredField` naming tag 35 when the
    /// message type is empty, otherwise tag 55 when the symbol is empty.
    pub fn require_valid(self) -> Result<Self, DecodeError> {
        if self.message_type.is_empty() {
            return Err(DecodeError::MissingRequiredField {
                tag: Tag::MessageType.value(),
            });
        }
        if self.symbol.is_empty() {
            return Err(DecodeError::MissingRequiredField {
                tag: Tag::Symbol.value(),
            });
        }
        Ok(self)
    }

    /// Copies the record into an [`OwnedMessage`].
    #[must_use]
    pub fn to_owned_message(&self) -> OwnedMessage {
        OwnedMessage {
            message_type: Bytes::copy_from_slice(self.message_type),
            symbol: Bytes::copy_from_slice(self.symbol),
            sender: Bytes::copy_from_slice(self.sender),
            target: Bytes::copy_from_slice(self.target),
            side: self.side,
            quantity: self.quantity,
            price: self.price,
            valid: self.valid,
        }
    }
}

impl fmt::Debug for FixMessage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixMessage")
            .field("message_type", &String::from_utf8_lossy(self.message_type))
            .field("symbol", &String::from_utf8_lossy(self.symbol))
            .field("sender", &String::from_utf8_lossy(self.sender))
            .field("target", &String::from_utf8_lossy(self.target))
            .field("side", &self.side)
            .field("quantity", &self.quantity)
            .field("price", &self.price)
            .field("valid", &self.valid)
            .finish()
    }
}

/// Owned copy of an extracted message.
///
/// Unlike [`FixMessage`] this type does not borrow the source buffer, so it
/// can be stored, serialized, or moved across threads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OwnedMessage {
    /// Message type (tag 35).
    pub message_type: Bytes,
    /// Symbol (tag 55).
    pub symbol: Bytes,
    /// Sender CompID (tag 49).
    pub sender: Bytes,
    /// Target CompID (tag 56).
    pub target: Bytes,
    /// Side (tag 54).
    pub side: i32,
    /// Order quantity (tag 38).
    pub quantity: i32,
    /// Price (tag 44).
    pub price: f64,
    /// Validity flag carried over from the parsed record.
    pub valid: bool,
}

impl OwnedMessage {
    /// Borrows this message as a [`FixMessage`].
    #[must_use]
    pub fn as_message(&self) -> FixMessage<'_> {
        FixMessage {
            message_type: &self.message_type,
            symbol: &self.symbol,
            sender: &self.sender,
            target: &self.target,
            side: self.side,
            quantity: self.quantity,
            price: self.price,
            valid: self.valid,
        }
    }
}

impl From<FixMessage<'_>> for OwnedMessage {
    fn from(msg: FixMessage<'_>) -> Self {
        msg.to_owned_message()
    }
}
