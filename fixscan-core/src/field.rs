/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Field types for tag=value messages.
//!
//! This module provides:
//! - [`Tag`]: The FIX tags the extractor knows about
//! - [`FieldRef`]: Zero-copy reference to a field within a message buffer

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// FIX field tags recognized by the extractor.
///
/// Only a subset of these are stored on [`FixMessage`](crate::FixMessage);
/// `BeginString` and `BodyLength` are recognized but discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Tag {
    /// FIX version (8).
    BeginString = 8,
    /// Message body length (9).
    BodyLength = 9,
    /// Message type (35).
    MessageType = 35,
    /// Order quantity (38).
    OrderQty = 38,
    /// Price per unit (44).
    Price = 44,
    /// Sender identifier (49).
    SenderCompId = 49,
    /// Side, 1 = buy, 2 = sell (54).
    Side = 54,
    /// Trading symbol (55).
    Symbol = 55,
    /// Target identifier (56).
    TargetCompId = 56,
}

impl Tag {
    /// Maps a tag number to a known tag.
    ///
    /// # Returns
    /// `Some(Tag)` for the tags above, `None` for anything else.
    #[inline]
    #[must_use]
    pub const fn from_u32(tag: u32) -> Option<Self> {
        match tag {
            8 => Some(Self::BeginString),
            9 => Some(Self::BodyLength),
            35 => Some(Self::MessageType),
            38 => Some(Self::OrderQty),
            44 => Some(Self::Price),
            49 => Some(Self::SenderCompId),
            54 => Some(Self::Side),
            55 => Some(Self::Symbol),
            56 => Some(Self::TargetCompId),
            _ => None,
        }
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self as u32
    }

    /// Returns the FIX field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BeginString => "BeginString",
            Self::BodyLength => "BodyLength",
            Self::MessageType => "MsgType",
            Self::OrderQty => "OrderQty",
            Self::Price => "Price",
            Self::SenderCompId => "SenderCompID",
            Self::Side => "Side",
            Self::Symbol => "Symbol",
            Self::TargetCompId => "TargetCompID",
        }
    }
}

impl From<Tag> for u32 {
    fn from(tag: Tag) -> Self {
        tag.value()
    }
}

impl TryFrom<u32> for Tag {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_u32(value).ok_or(value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Zero-copy reference to a field within a message buffer.
///
/// The tag is decoded with the same permissive integer rules the assembler
/// uses, so a tag such as `12a` is reported as `12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRef<'a> {
    /// The field tag number.
    pub tag: u32,
    /// Reference to the field value bytes (without delimiters).
    pub value: &'a [u8],
}

impl<'a> FieldRef<'a> {
    /// Creates a new field reference.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `value` - Reference to the value bytes
    #[inline]
    #[must_use]
    pub const fn new(tag: u32, value: &'a [u8]) -> Self {
        Self { tag, value }
    }

    /// Returns the known tag for this field, if any.
    #[inline]
    #[must_use]
    pub const fn known_tag(&self) -> Option<Tag> {
        Tag::from_u32(self.tag)
    }

    /// Returns the value as a string slice.
    ///
    /// # Errors
    /// Returns `DecodeError::InvalidUtf8` if the value is not valid UTF-8.
    pub fn as_str(&self) -> Result<&'a str, DecodeError> {
        std::str::from_utf8(self.value).map_err(DecodeError::from)
    }

    /// Returns the raw bytes of the value.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.value
    }

    /// Returns the length of the value in bytes.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if the value is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
