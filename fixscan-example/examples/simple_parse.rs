//! Simple Parse Example
//!
//! Parses a handful of FIX messages and prints the extracted fields.

use fixscan::prelude::*;
use fixscan_example::{init_logging, message_type_name, separator, side_name};
use tracing::{info, warn};

const MESSAGES: [&str; 5] = [
    "8=FIX.4.4|35=D|49=TRADER1|56=EXCHANGE|55=AAPL|54=1|38=100|44=150.25|",
    "8=FIX.4.4|35=D|49=TRADER1|56=EXCHANGE|55=MSFT|54=2|38=500|44=378.50|",
    "8=FIX.4.4|35=D|49=HEDGE_FUND|56=DARK_POOL|55=GOOGL|54=1|38=1000|44=141.75|",
    "8=FIX.4.4|35=8|49=EXCHANGE|56=TRADER1|55=AAPL|54=1|38=100|44=150.25|",
    "8=FIX.4.4|35=F|49=TRADER1|56=EXCHANGE|55=TSLA|54=2|38=200|44=248.90|",
];

fn print_message(msg: &FixMessage<'_>, num: usize) -> anyhow::Result<()> {
    info!("Message {}:", num);
    let msg = match msg.require_valid() {
        Ok(msg) => msg,
        Err(e) => {
            warn!("  [INVALID MESSAGE] {}", e);
            return Ok(());
        }
    };

    info!(
        "  Type:     {} ({})",
        msg.message_type_str()?,
        message_type_name(msg.message_type)
    );
    info!("  Symbol:   {}", msg.symbol_str()?);
    if !msg.sender.is_empty() {
        info!("  Sender:   {}", msg.sender_str()?);
    }
    if !msg.target.is_empty() {
        info!("  Target:   {}", msg.target_str()?);
    }
    if msg.side != 0 {
        info!("  Side:     {}", side_name(msg.side));
    }
    if msg.quantity != 0 {
        info!("  Quantity: {}", msg.quantity);
    }
    if msg.price != 0.0 {
        info!("  Price:    ${:.2}", msg.price);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let avx512 = has_avx512_support();
    info!("{}", separator('=', 60));
    info!("   FixScan Parser Demo");
    info!("{}", separator('=', 60));
    info!("AVX-512 Support: {}", if avx512 { "YES" } else { "NO" });
    info!(
        "Parser Mode:     {}",
        if avx512 { "SIMD (AVX-512)" } else { "Scalar" }
    );

    info!("{}", separator('=', 60));
    info!("   Parsing Messages (using parse_auto)");
    for (i, raw) in MESSAGES.iter().enumerate() {
        print_message(&parse_auto(raw), i + 1)?;
    }

    info!("{}", separator('=', 60));
    info!("   Explicit Parser Selection");
    let raw = "8=FIX.4.4|35=D|49=ALGO_TRADER|56=NYSE|55=NVDA|54=1|38=250|44=875.30|";
    info!("Raw message: {}", raw);

    let scalar = parse_scalar(raw);
    let simd = parse_simd(raw);
    info!("Using parse_scalar():");
    print_message(&scalar, 1)?;
    info!("Using parse_simd():");
    print_message(&simd, 1)?;
    info!(
        "Results match: {}",
        if scalar == simd { "YES" } else { "NO" }
    );

    info!("{}", separator('=', 60));
    info!("   SOH-delimited Input");
    let parser = Parser::new(ParserConfig::soh())?;
    let wire = raw.replace('|', "\x01");
    let msg = parser.parse(&wire);
    info!("Parser strategy: {}", parser.strategy());
    print_message(&msg, 1)?;

    info!("{}", separator('=', 60));
    info!("   Invalid Message Handling");
    let invalid = "8=FIX.4.4|49=SENDER|56=TARGET|54=1|38=100|";
    info!("Message missing MsgType and Symbol: {}", invalid);
    print_message(&parse_auto(invalid), 1)?;

    Ok(())
}
