/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Best-effort numeric decoding for field values.
//!
//! Both decoders scan left to right and stop at the first byte that does not
//! fit the expected shape. They never fail: text without leading digits
//! decodes to zero, and anything after the first invalid byte is ignored.

/// Decodes an optional `-` followed by ASCII digits.
///
/// Digits are accumulated by multiply-by-ten-and-add until the first
/// non-digit byte. Text with no leading digits (including `""`, `"-"` and
/// `"+1"`) decodes to `0`.
///
/// # Overflow
/// Arithmetic wraps modulo 2^32 (two's complement). `"2147483647"` and
/// `"-2147483648"` decode to [`i32::MAX`] and [`i32::MIN`]; longer values
/// wrap deterministically rather than saturating or failing.
///
/// # Example
/// ```
/// use fixscan_tagvalue::parse_int;
///
/// assert_eq!(parse_int(b"12345"), 12345);
/// assert_eq!(parse_int(b"-42"), -42);
/// assert_eq!(parse_int(b"100abc"), 100);
/// ```
#[inline]
#[must_use]
pub fn parse_int(text: &[u8]) -> i32 {
    let (negative, digits) = split_sign(text);

    let mut result: i32 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = i32::from(byte - b'0');
        result = result.wrapping_mul(10).wrapping_add(digit);
    }

    if negative {
        result.wrapping_neg()
    } else {
        result
    }
}

/// Decodes fixed-decimal text such as `150.25` or `-0.0025`.
///
/// The value is `sign * (integer_part + fractional_part)`, where each
/// fractional digit contributes `digit / 10^position`. A leading dot gives an
/// integer part of zero and a trailing dot a fractional part of zero.
/// Exponents are not supported: `1e5` decodes to `1.0`.
///
/// # Example
/// ```
/// use fixscan_tagvalue::parse_double;
///
/// assert!((parse_double(b"150.25") - 150.25).abs() < 1e-9);
/// assert_eq!(parse_double(b".5"), 0.5);
/// assert_eq!(parse_double(b"7.5.1"), 7.5);
/// ```
#[inline]
#[must_use]
pub fn parse_double(text: &[u8]) -> f64 {
    let (negative, digits) = split_sign(text);
    let mut index = 0;

    let mut integer_part = 0.0_f64;
    while let Some(&digit @ b'0'..=b'9') = digits.get(index) {
        integer_part = integer_part * 10.0 + f64::from(digit - b'0');
        index += 1;
    }

    let mut fractional_part = 0.0_f64;
    if digits.get(index) == Some(&b'.') {
        index += 1;
        let mut divisor = 10.0_f64;
        while let Some(&digit @ b'0'..=b'9') = digits.get(index) {
            fractional_part += f64::from(digit - b'0') / divisor;
            divisor *= 10.0;
            index += 1;
        }
    }

    let value = integer_part + fractional_part;
    if negative { -value } else { value }
}

#[inline]
fn split_sign(text: &[u8]) -> (bool, &[u8]) {
    match text.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, text),
    }
}
