/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Common utilities shared across examples.

use fixscan::prelude::Side;

/// Initializes logging for examples.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

/// Returns a horizontal rule of `width` copies of `c`.
#[must_use]
pub fn separator(c: char, width: usize) -> String {
    std::iter::repeat_n(c, width).collect()
}

/// Formats an integer with thousands separators, e.g. `1234567` as `1,234,567`.
#[must_use]
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human-readable name for a FIX MsgType(35) value.
#[must_use]
pub fn message_type_name(msg_type: &[u8]) -> &'static str {
    match msg_type {
        b"D" => "New Order - Single",
        b"8" => "Execution Report",
        b"F" => "Order Cancel Request",
        b"G" => "Order Cancel/Replace Request",
        b"0" => "Heartbeat",
        b"A" => "Logon",
        b"5" => "Logout",
        _ => "Unknown",
    }
}

/// Human-readable name for a Side(54) code.
#[must_use]
pub fn side_name(code: i32) -> String {
    Side::from_code(code).map_or_else(|| "Unknown".to_string(), |side| side.to_string())
}
