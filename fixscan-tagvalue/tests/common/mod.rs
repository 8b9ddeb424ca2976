//! Shared message fixtures for integration tests.

#![allow(dead_code)]

pub const NEW_ORDER_SINGLE: &str =
    "8=FIX.4.4|35=D|49=SENDER|56=TARGET|55=AAPL|54=1|38=100|44=150.25|";
pub const EXECUTION_REPORT: &str =
    "8=FIX.4.4|35=8|49=EXCHANGE|56=TRADER|55=MSFT|54=2|38=500|44=378.50|";
pub const ORDER_CANCEL: &str =
    "8=FIX.4.4|35=F|49=TRADER|56=EXCHANGE|55=GOOGL|54=1|38=200|44=141.75|";
pub const MINIMAL: &str = "35=D|55=SPY|";
pub const FULL_MESSAGE: &str =
    "8=FIX.4.4|9=128|35=D|49=HEDGE_FUND|56=DARK_POOL|55=NVDA|54=2|38=1000|44=875.30|";
pub const BUY_ORDER: &str = "8=FIX.4.4|35=D|55=AAPL|54=1|38=100|44=150.00|";
pub const SELL_ORDER: &str = "8=FIX.4.4|35=D|55=AAPL|54=2|38=100|44=150.00|";
pub const LARGE_QUANTITY: &str = "8=FIX.4.4|35=D|55=VOO|54=1|38=999999|44=456.78|";
pub const HIGH_PRICE: &str = "8=FIX.4.4|35=D|55=BRK.A|54=1|38=1|44=628450.00|";
pub const LOW_PRICE: &str = "8=FIX.4.4|35=D|55=PENNY|54=1|38=100000|44=0.0025|";
pub const LONG_SYMBOL: &str = "8=FIX.4.4|35=D|55=VERYLONGSYMBOLNAME|54=1|38=100|44=50.00|";
pub const LONG_IDS: &str = "8=FIX.4.4|35=D|49=VERY_LONG_SENDER_COMPANY_ID|56=VERY_LONG_TARGET_COMPANY_ID|55=TEST|54=1|38=100|44=100.00|";

pub const VALID: &[&str] = &[
    NEW_ORDER_SINGLE,
    EXECUTION_REPORT,
    ORDER_CANCEL,
    MINIMAL,
    FULL_MESSAGE,
    BUY_ORDER,
    SELL_ORDER,
    LARGE_QUANTITY,
    HIGH_PRICE,
    LOW_PRICE,
    LONG_SYMBOL,
    LONG_IDS,
];

pub const NO_MSG_TYPE: &str = "8=FIX.4.4|55=AAPL|54=1|38=100|44=150.25|";
pub const NO_SYMBOL: &str = "8=FIX.4.4|35=D|54=1|38=100|44=150.25|";
pub const MALFORMED_FIELD: &str = "8=FIX.4.4|35D|55=AAPL|54=1|";
pub const EMPTY_VALUE: &str = "8=FIX.4.4|35=|55=AAPL|";
pub const NO_DELIMITERS: &str = "8=FIX.4.435=D55=AAPL54=1";
pub const ONLY_DELIMITERS: &str = "||||||||";
pub const SINGLE_DELIMITER: &str = "|";
pub const DOUBLE_DELIMITER: &str = "8=FIX.4.4||35=D|55=AAPL|";
pub const TRAILING_CONTENT: &str = "8=FIX.4.4|35=D|55=AAPL|extra";

pub const INVALID: &[&str] = &[
    "",
    NO_MSG_TYPE,
    NO_SYMBOL,
    MALFORMED_FIELD,
    EMPTY_VALUE,
    NO_DELIMITERS,
    ONLY_DELIMITERS,
    SINGLE_DELIMITER,
];

/// Repeats a short order `repeat + 1` times back to back.
pub fn long_message(repeat: usize) -> String {
    "8=FIX.4.4|35=D|55=TEST|54=1|38=100|44=50.00|".repeat(repeat + 1)
}

/// Builds `count` orders rotating through a few symbols, sides and quantities.
pub fn message_batch(count: usize) -> Vec<String> {
    const SYMBOLS: [&str; 5] = ["AAPL", "MSFT", "GOOGL", "AMZN", "META"];
    const PRICES: [f64; 5] = [150.25, 378.50, 141.75, 178.45, 505.25];

    (0..count)
        .map(|i| {
            let idx = i % SYMBOLS.len();
            format!(
                "8=FIX.4.4|35=D|49=TEST|56=EXCH|55={}|54={}|38={}|44={:.6}|",
                SYMBOLS[idx],
                i % 2 + 1,
                (i % 10 + 1) * 100,
                PRICES[idx]
            )
        })
        .collect()
}
