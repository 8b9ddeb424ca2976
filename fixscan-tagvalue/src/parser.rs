/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Zero-copy message assembler.
//!
//! The assembler asks a scanner for delimiter offsets, slices the input into
//! fields between consecutive offsets, splits each field at its first `=`,
//! and stores the value on [`FixMessage`] by tag number. Malformed fields
//! (no `=`, or an empty tag) and unknown tags are dropped without error.
//! Later occurrences of a tag overwrite earlier ones.

use crate::config::{EQUALS, PIPE, ParserConfig, ScanStrategy};
use crate::numeric::{parse_double, parse_int};
use crate::scalar::{Offsets, find_delimiters_scalar};
use crate::simd::find_delimiters_simd;
use fixscan_core::error::ConfigError;
use fixscan_core::field::{FieldRef, Tag};
use fixscan_core::message::FixMessage;
use memchr::memchr;
use tracing::debug;

/// Parses a `|`-delimited message with the scalar scanner.
///
/// # Example
/// ```
/// use fixscan_tagvalue::parse_scalar;
///
/// let msg = parse_scalar("35=D|55=SPY|");
/// assert!(msg.valid);
/// assert_eq!(msg.symbol, b"SPY");
/// ```
#[inline]
#[must_use]
pub fn parse_scalar<T: AsRef<[u8]> + ?Sized>(data: &T) -> FixMessage<'_> {
    parse_scalar_with(data, PIPE)
}

/// Parses a `|`-delimited message with the vectorized scanner.
#[inline]
#[must_use]
pub fn parse_simd<T: AsRef<[u8]> + ?Sized>(data: &T) -> FixMessage<'_> {
    parse_simd_with(data, PIPE)
}

/// Parses a `|`-delimited message with the scanner picked for this CPU.
///
/// The choice is made on first use and kept for the life of the process.
#[inline]
#[must_use]
pub fn parse_auto<T: AsRef<[u8]> + ?Sized>(data: &T) -> FixMessage<'_> {
    parse_auto_with(data, PIPE)
}

/// Parses a message split by `delimiter` with the scalar scanner.
#[must_use]
pub fn parse_scalar_with<T: AsRef<[u8]> + ?Sized>(data: &T, delimiter: u8) -> FixMessage<'_> {
    assemble(data.as_ref(), delimiter, find_delimiters_scalar)
}

/// Parses a message split by `delimiter` with the vectorized scanner.
#[must_use]
pub fn parse_simd_with<T: AsRef<[u8]> + ?Sized>(data: &T, delimiter: u8) -> FixMessage<'_> {
    assemble(data.as_ref(), delimiter, find_delimiters_simd)
}

/// Parses a message split by `delimiter` with the scanner picked for this CPU.
#[must_use]
pub fn parse_auto_with<T: AsRef<[u8]> + ?Sized>(data: &T, delimiter: u8) -> FixMessage<'_> {
    parse_with_strategy(data.as_ref(), delimiter, ScanStrategy::Auto.resolve())
}

#[inline]
fn parse_with_strategy(data: &[u8], delimiter: u8, strategy: ScanStrategy) -> FixMessage<'_> {
    match strategy {
        ScanStrategy::Simd => assemble(data, delimiter, find_delimiters_simd),
        ScanStrategy::Scalar | ScanStrategy::Auto => {
            assemble(data, delimiter, find_delimiters_scalar)
        }
    }
}

#[inline]
fn assemble<F>(data: &[u8], delimiter: u8, scan: F) -> FixMessage<'_>
where
    F: Fn(&[u8], u8) -> Offsets,
{
    let mut msg = FixMessage::new();
    if data.is_empty() {
        return msg;
    }

    let mut cursor = 0;
    for offset in scan(data, delimiter) {
        if offset > cursor
            && let Some(field) = split_field(&data[cursor..offset])
        {
            populate(&mut msg, field);
        }
        cursor = offset + 1;
    }

    if cursor < data.len()
        && let Some(field) = split_field(&data[cursor..])
    {
        populate(&mut msg, field);
    }

    msg.valid = msg.has_required_fields();
    msg
}

/// Splits `tag=value` at the first `=`.
///
/// Returns `None` when there is no `=`, when the tag is empty, or when the
/// tag decodes to a negative number.
#[inline]
fn split_field(field: &[u8]) -> Option<FieldRef<'_>> {
    let eq_pos = memchr(EQUALS, field)?;
    if eq_pos == 0 {
        return None;
    }
    let tag = u32::try_from(parse_int(&field[..eq_pos])).ok()?;
    Some(FieldRef::new(tag, &field[eq_pos + 1..]))
}

#[inline]
fn populate<'a>(msg: &mut FixMessage<'a>, field: FieldRef<'a>) {
    match Tag::from_u32(field.tag) {
        Some(Tag::MessageType) => msg.message_type = field.value,
        Some(Tag::Symbol) => msg.symbol = field.value,
        Some(Tag::SenderCompId) => msg.sender = field.value,
        Some(Tag::TargetCompId) => msg.target = field.value,
        Some(Tag::Side) => msg.side = parse_int(field.value),
        Some(Tag::OrderQty) => msg.quantity = parse_int(field.value),
        Some(Tag::Price) => msg.price = parse_double(field.value),
        Some(Tag::BeginString | Tag::BodyLength) | None => {}
    }
}

/// Iterates over the well-formed fields of a message.
///
/// Yields every non-empty field that has a non-empty tag, in input order,
/// including tags that [`FixMessage`] does not store. Returned by
/// [`fields`] and [`Parser::fields`].
#[derive(Debug, Clone)]
pub struct Fields<'a> {
    data: &'a [u8],
    offsets: smallvec::IntoIter<[usize; 32]>,
    cursor: usize,
}

impl<'a> Iterator for Fields<'a> {
    type Item = FieldRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let end = match self.offsets.next() {
                Some(offset) => offset,
                None if self.cursor < self.data.len() => self.data.len(),
                None => return None,
            };
            let field = &self.data[self.cursor..end];
            self.cursor = end + 1;
            if field.is_empty() {
                continue;
            }
            if let Some(field) = split_field(field) {
                return Some(field);
            }
        }
    }
}

/// Returns an iterator over the well-formed fields of `data`.
///
/// # Example
/// ```
/// use fixscan_tagvalue::fields;
///
/// let tags: Vec<u32> = fields(b"8=FIX.4.4|35D|11=ORD1|", b'|').map(|f| f.tag).collect();
/// assert_eq!(tags, [8, 11]);
/// ```
#[must_use]
pub fn fields(data: &[u8], delimiter: u8) -> Fields<'_> {
    Fields {
        data,
        offsets: find_delimiters_scalar(data, delimiter).into_iter(),
        cursor: 0,
    }
}

/// Reusable parser bound to one configuration.
///
/// The scan strategy is resolved when the parser is built, so `Auto` costs
/// nothing per message.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    config: ParserConfig,
    strategy: ScanStrategy,
}

impl Parser {
    /// Creates a parser for the given configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidDelimiter` if the delimiter cannot
    /// separate tag=value fields.
    pub fn new(config: ParserConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let strategy = config.strategy.resolve();
        debug!(
            delimiter = config.delimiter,
            requested = %config.strategy,
            resolved = %strategy,
            "parser configured"
        );
        Ok(Self { config, strategy })
    }

    /// Parses one message.
    #[inline]
    #[must_use]
    pub fn parse<'a, T: AsRef<[u8]> + ?Sized>(&self, data: &'a T) -> FixMessage<'a> {
        parse_with_strategy(data.as_ref(), self.config.delimiter, self.strategy)
    }

    /// Returns an iterator over the well-formed fields of `data`.
    #[must_use]
    pub fn fields<'a>(&self, data: &'a [u8]) -> Fields<'a> {
        fields(data, self.config.delimiter)
    }

    /// Returns the resolved scan strategy, never `Auto`.
    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> ScanStrategy {
        self.strategy
    }

    /// Returns the configuration this parser was built from.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }
}

impl Default for Parser {
    fn default() -> Self {
        let config = ParserConfig::new();
        Self {
            config,
            strategy: config.strategy.resolve(),
        }
    }
}
