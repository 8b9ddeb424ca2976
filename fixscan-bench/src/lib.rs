/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # FixScan Bench
//!
//! Message fixtures and input generators shared by the benchmark targets.

/// Minimal order, six fields.
pub const SMALL_MESSAGE: &str = "8=FIX.4.4|35=D|55=SPY|54=1|38=100|44=450.00|";

/// Typical new order single.
pub const MEDIUM_MESSAGE: &str =
    "8=FIX.4.4|35=D|49=TRADER1|56=EXCHANGE|55=AAPL|54=1|38=100|44=150.25|";

/// Order with long CompIDs.
pub const LARGE_MESSAGE: &str = "8=FIX.4.4|35=D|49=QUANTITATIVE_HEDGE_FUND|\
    56=PRIMARY_EXCHANGE_NETWORK|55=GOOGL|54=1|38=10000|44=141.75|";

/// Two orders back to back, crossing several 64-byte lanes.
pub const XLARGE_MESSAGE: &str = "8=FIX.4.4|35=D|49=INSTITUTIONAL_ASSET_MANAGER_ALPHA|\
    56=CONSOLIDATED_EXCHANGE_ROUTING_NETWORK|55=BRK.A|54=1|38=5|44=628450.00|\
    8=FIX.4.4|35=D|49=SECONDARY_TRADER|56=BACKUP_EXCHANGE|55=MSFT|54=2|38=500|44=378.50|";

/// Named fixtures in increasing size.
pub const MESSAGES: [(&str, &str); 4] = [
    ("small", SMALL_MESSAGE),
    ("medium", MEDIUM_MESSAGE),
    ("large", LARGE_MESSAGE),
    ("xlarge", XLARGE_MESSAGE),
];

const SYMBOLS: [&str; 10] = [
    "AAPL", "MSFT", "GOOGL", "AMZN", "META", "NVDA", "TSLA", "AMD", "INTC", "JPM",
];

const PRICES: [f64; 10] = [
    150.25, 378.50, 141.75, 178.45, 505.25, 875.30, 248.90, 156.80, 45.25, 195.50,
];

/// Generates `count` distinct orders rotating through ten symbols, with
/// alternating sides.
#[must_use]
pub fn message_batch(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let idx = i % SYMBOLS.len();
            format!(
                "8=FIX.4.4|35=D|49=BATCH{i}|56=EX|55={}|54={}|38={}|44={:.6}|",
                SYMBOLS[idx],
                i % 2 + 1,
                (idx + 1) * 100,
                PRICES[idx]
            )
        })
        .collect()
}

/// Generates `length` bytes of filler with `delimiter_count` evenly spaced
/// `|` bytes.
#[must_use]
pub fn generate_delimiter_string(length: usize, delimiter_count: usize) -> Vec<u8> {
    let segment = (length / (delimiter_count + 1)).max(1);
    let mut placed = 0;
    (0..length)
        .map(|i| {
            if placed < delimiter_count && i > 0 && i % segment == 0 {
                placed += 1;
                b'|'
            } else {
                b'X'
            }
        })
        .collect()
}

/// Returns a decimal integer literal with `digits` digits.
#[must_use]
pub fn integer_literal(digits: usize) -> String {
    (0..digits)
        .map(|i| char::from(b'1' + (i % 9) as u8))
        .collect()
}

/// Returns a decimal literal `123.<fraction>` with `precision` fractional
/// digits.
#[must_use]
pub fn decimal_literal(precision: usize) -> String {
    format!("123.{}", integer_literal(precision))
}
