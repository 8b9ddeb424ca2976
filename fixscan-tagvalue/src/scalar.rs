/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Scalar delimiter scanner.
//!
//! This is the reference scanner: every other scanner must produce exactly
//! the same offsets for the same input.

use smallvec::SmallVec;

/// Ascending byte offsets of delimiter occurrences.
///
/// Inline capacity covers a typical order message without touching the
/// heap.
pub type Offsets = SmallVec<[usize; 32]>;

/// Average field width used to size the offset buffer up front.
pub(crate) const FIELD_WIDTH_HINT: usize = 10;

/// Finds all positions of `delimiter` in `data`, one byte at a time.
///
/// # Arguments
/// * `data` - The bytes to search
/// * `delimiter` - The byte to find
///
/// # Returns
/// Strictly increasing offsets from the start of `data`; empty when there
/// is no match.
///
/// # Example
/// ```
/// use fixscan_tagvalue::find_delimiters_scalar;
///
/// let offsets = find_delimiters_scalar(b"a|b|c", b'|');
/// assert_eq!(offsets.as_slice(), &[1, 3]);
/// ```
#[must_use]
pub fn find_delimiters_scalar(data: &[u8], delimiter: u8) -> Offsets {
    let mut positions = Offsets::with_capacity(data.len() / FIELD_WIDTH_HINT);
    scan_bytes(data, 0, delimiter, &mut positions);
    positions
}

/// Appends the offsets of `delimiter` in `data`, shifted by `base`.
#[inline]
pub(crate) fn scan_bytes(data: &[u8], base: usize, delimiter: u8, positions: &mut Offsets) {
    for (index, &byte) in data.iter().enumerate() {
        if byte == delimiter {
            positions.push(base + index);
        }
    }
}
