//! Advanced Usage Example
//!
//! Scalar vs SIMD timing, the low-level delimiter API, batch parsing,
//! numeric decoders and parsing messages read from a file.
//!
//! Usage: `cargo run --example advanced_usage -- [messages.txt]`

use fixscan::prelude::*;
use fixscan::tagvalue::{LaneKernel, parse_double, parse_int, scan_kernel};
use fixscan_example::{format_number, init_logging, separator, side_name};
use std::hint::black_box;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

const WARMUP_ITERATIONS: usize = 1_000;
const TEST_ITERATIONS: usize = 100_000;
const MAX_DISPLAY: usize = 5;

const SAMPLE_PATHS: [&str; 3] = [
    "demos/sample_messages.txt",
    "../demos/sample_messages.txt",
    "sample_messages.txt",
];

fn header(title: &str) {
    info!("{}", separator('=', 70));
    info!("   {}", title);
    info!("{}", separator('=', 70));
}

fn time_per_message<F: Fn(&str) -> FixMessage<'_>>(msg: &str, parse: F) -> f64 {
    let start = Instant::now();
    for _ in 0..TEST_ITERATIONS {
        black_box(parse(black_box(msg)));
    }
    start.elapsed().as_nanos() as f64 / TEST_ITERATIONS as f64
}

fn demo_performance_comparison() {
    header("Performance Comparison: Scalar vs SIMD");

    let msg = "8=FIX.4.4|35=D|49=PERFORMANCE_TEST_SENDER|56=PERFORMANCE_TEST_TARGET|\
               55=AAPL|54=1|38=1000|44=150.25|";

    info!("Test message length: {} bytes", msg.len());
    let warmup = format_number(WARMUP_ITERATIONS as u64);
    let iterations = format_number(TEST_ITERATIONS as u64);
    info!("Warmup iterations:   {}", warmup);
    info!("Test iterations:     {}", iterations);

    for _ in 0..WARMUP_ITERATIONS {
        black_box(parse_scalar(black_box(msg)));
        black_box(parse_simd(black_box(msg)));
    }

    let scalar_ns = time_per_message(msg, parse_scalar);
    let simd_ns = time_per_message(msg, parse_simd);
    let speedup = scalar_ns / simd_ns;

    info!("{}", separator('-', 70));
    info!(
        "  {:<23}{:>15}{:>15}{:>15}",
        "Metric", "Scalar", "SIMD", "Speedup"
    );
    info!("{}", separator('-', 70));
    info!(
        "  {:<23}{:>15.2}{:>15.2}{:>14.2}x",
        "Time per message (ns)", scalar_ns, simd_ns, speedup
    );
    info!(
        "  {:<23}{:>15}{:>15}{:>14.2}x",
        "Throughput (msg/sec)",
        format_number((1e9 / scalar_ns) as u64),
        format_number((1e9 / simd_ns) as u64),
        speedup
    );
    info!("{}", separator('-', 70));

    match scan_kernel() {
        LaneKernel::Avx512 => info!("SIMD parser is using AVX-512."),
        LaneKernel::Portable => info!("No AVX-512, SIMD parser uses the portable kernel."),
    }
}

fn demo_delimiter_finding() {
    header("Low-Level API: Delimiter Finding");

    let data = "8=FIX.4.4|35=D|49=SENDER|56=TARGET|55=AAPL|54=1|38=100|44=150.25|";
    info!("Input string ({} bytes): {:?}", data.len(), data);

    let scalar = find_delimiters_scalar(data.as_bytes(), b'|');
    let simd = find_delimiters_simd(data.as_bytes(), b'|');
    info!("Scalar: {:?}", scalar.as_slice());
    info!("SIMD:   {:?}", simd.as_slice());
    let verdict = if scalar == simd { "YES" } else { "NO" };
    info!("Results match: {}", verdict);

    info!("Extracted fields:");
    for (i, field) in fields(data.as_bytes(), b'|').enumerate() {
        let known = field
            .known_tag()
            .map_or_else(|| "-".to_string(), |tag| tag.name().to_string());
        info!(
            "  Field {}: {}={:<10} ({})",
            i + 1,
            field.tag,
            field.as_str().unwrap_or("<binary>"),
            known
        );
    }
}

fn demo_batch_parsing() {
    header("Batch Parsing Demo");

    let messages = [
        "8=FIX.4.4|35=D|49=BATCH1|56=EX|55=AAPL|54=1|38=100|44=150.00|",
        "8=FIX.4.4|35=D|49=BATCH2|56=EX|55=MSFT|54=2|38=200|44=375.00|",
        "8=FIX.4.4|35=D|49=BATCH3|56=EX|55=GOOGL|54=1|38=300|44=140.00|",
        "8=FIX.4.4|35=D|49=BATCH4|56=EX|55=AMZN|54=2|38=400|44=175.00|",
        "8=FIX.4.4|35=D|49=BATCH5|56=EX|55=META|54=1|38=500|44=500.00|",
        "8=FIX.4.4|35=D|49=BATCH6|56=EX|55=NVDA|54=2|38=600|44=870.00|",
        "8=FIX.4.4|35=D|49=BATCH7|56=EX|55=TSLA|54=1|38=700|44=245.00|",
        "8=FIX.4.4|35=D|49=BATCH8|56=EX|55=AMD|54=2|38=800|44=155.00|",
        "8=FIX.4.4|35=D|49=BATCH9|56=EX|55=INTC|54=1|38=900|44=45.00|",
        "8=FIX.4.4|35=D|49=BATCH10|56=EX|55=JPM|54=2|38=1000|44=195.00|",
    ];
    info!("Batch size: {} messages", messages.len());

    let start = Instant::now();
    let results: Vec<FixMessage<'_>> = messages.iter().map(parse_auto).collect();
    let elapsed = start.elapsed();

    info!("{}", separator('-', 70));
    info!(
        "  {:<6}{:<10}{:<8}{:<12}{:<15}{:<10}",
        "#", "Symbol", "Side", "Quantity", "Price", "Valid"
    );
    info!("{}", separator('-', 70));
    for (i, msg) in results.iter().enumerate() {
        info!(
            "  {:<6}{:<10}{:<8}{:<12}${:<14.2}{:<10}",
            i + 1,
            msg.symbol_str().unwrap_or("?"),
            side_name(msg.side),
            msg.quantity,
            msg.price,
            if msg.valid { "Yes" } else { "No" }
        );
    }
    info!("{}", separator('-', 70));

    info!(
        "Batch parsing time: {:.2} microseconds",
        elapsed.as_nanos() as f64 / 1e3
    );
    info!(
        "Average per message: {:.2} nanoseconds",
        elapsed.as_nanos() as f64 / results.len() as f64
    );

    let total_quantity: i64 = results.iter().map(|m| i64::from(m.quantity)).sum();
    let total_value: f64 = results
        .iter()
        .map(|msg| msg.price * f64::from(msg.quantity))
        .sum();
    let total_shares = format_number(total_quantity.unsigned_abs());
    info!("Total shares: {}", total_shares);
    info!("Total value:  ${:.2}", total_value);
}

fn demo_numeric_parsing() {
    header("Numeric Parsing Utilities");

    info!("Integer parsing (parse_int):");
    for s in ["0", "1", "42", "12345", "-100", "999999"] {
        info!("  {:>8} -> {}", s, parse_int(s.as_bytes()));
    }

    info!("Double parsing (parse_double):");
    for s in ["0.0", "1.5", "123.456", "9999.99", "-50.25", "0.001"] {
        info!("  {:>10} -> {:.6}", s, parse_double(s.as_bytes()));
    }
}

fn demo_file_parsing(path: &Path) -> anyhow::Result<()> {
    header("File Parsing Demo");

    let content = std::fs::read_to_string(path)?;
    let messages: Vec<&str> = content
        .lines()
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    info!("Read {} messages from {}", messages.len(), path.display());

    for (i, raw) in messages.iter().take(MAX_DISPLAY).enumerate() {
        let msg = parse_auto(raw);
        if msg.valid {
            let side = match msg.side_kind() {
                Some(side) if side.is_buy() => "BUY",
                _ => "SELL",
            };
            info!(
                "  [{}] {} {} {} @ ${:.2}",
                i + 1,
                msg.symbol_str()?,
                side,
                msg.quantity,
                msg.price
            );
        }
    }
    if messages.len() > MAX_DISPLAY {
        info!("  ... and {} more messages", messages.len() - MAX_DISPLAY);
    }

    let start = Instant::now();
    for raw in &messages {
        black_box(parse_auto(black_box(raw)));
    }
    let elapsed_ns = start.elapsed().as_nanos().max(1) as f64;
    info!(
        "Parsed {} messages in {:.2} us",
        messages.len(),
        elapsed_ns / 1e3
    );
    info!(
        "Throughput: {} messages/second",
        format_number((messages.len() as f64 * 1e9 / elapsed_ns) as u64)
    );
    Ok(())
}

fn sample_file() -> Option<PathBuf> {
    if let Some(arg) = std::env::args_os().nth(1) {
        return Some(PathBuf::from(arg));
    }
    SAMPLE_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    header("FixScan Parser - Advanced Examples");
    info!(
        "AVX-512 Support: {}",
        if has_avx512_support() { "YES" } else { "NO" }
    );
    info!("Lane kernel:     {}", scan_kernel());

    demo_performance_comparison();
    demo_delimiter_finding();
    demo_batch_parsing();
    demo_numeric_parsing();

    match sample_file() {
        Some(path) => {
            if let Err(e) = demo_file_parsing(&path) {
                warn!("Could not parse {}: {}", path.display(), e);
            }
        }
        None => info!("No sample message file found, skipping file parsing demo"),
    }

    header("Demo Complete");
    Ok(())
}
