//! End-to-end tests for the message assembler.

mod common;

use common::*;
use fixscan_tagvalue::{
    FixMessage, Parser, ParserConfig, ScanStrategy, has_avx512_support, parse_auto, parse_scalar,
    parse_simd,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_new_order_single_all_entry_points() {
    for msg in [
        parse_scalar(NEW_ORDER_SINGLE),
        parse_simd(NEW_ORDER_SINGLE),
        parse_auto(NEW_ORDER_SINGLE),
    ] {
        assert!(msg.valid);
        assert_eq!(msg.message_type, b"D");
        assert_eq!(msg.symbol, b"AAPL");
        assert_eq!(msg.sender, b"SENDER");
        assert_eq!(msg.target, b"TARGET");
        assert_eq!(msg.side, 1);
        assert_eq!(msg.quantity, 100);
        assert_close(msg.price, 150.25);
    }
}

#[test]
fn test_scalar_and_simd_agree_on_fixtures() {
    let long = long_message(10);
    let inputs = VALID
        .iter()
        .chain(INVALID)
        .copied()
        .chain([DOUBLE_DELIMITER, TRAILING_CONTENT, long.as_str()]);
    for input in inputs {
        let scalar = parse_scalar(input);
        let simd = parse_simd(input);
        assert_eq!(scalar, simd, "input {input:?}");
        assert_eq!(scalar.price.to_bits(), simd.price.to_bits());
    }
}

#[test]
fn test_valid_fixtures() {
    for input in VALID {
        assert!(parse_auto(input).valid, "input {input:?}");
    }
}

#[test]
fn test_invalid_fixtures() {
    for input in INVALID {
        assert!(!parse_auto(input).valid, "input {input:?}");
    }
}

#[test]
fn test_message_types() {
    assert_eq!(parse_auto(EXECUTION_REPORT).message_type, b"8");
    assert_eq!(parse_auto(EXECUTION_REPORT).symbol, b"MSFT");
    assert_eq!(parse_auto(EXECUTION_REPORT).side, 2);
    assert_eq!(parse_auto(ORDER_CANCEL).message_type, b"F");
    assert_eq!(parse_auto(ORDER_CANCEL).symbol, b"GOOGL");
}

#[test]
fn test_numeric_fields() {
    assert_eq!(parse_auto(BUY_ORDER).side, 1);
    assert_eq!(parse_auto(SELL_ORDER).side, 2);
    assert_eq!(parse_auto(LARGE_QUANTITY).quantity, 999_999);
    assert_close(parse_auto(HIGH_PRICE).price, 628_450.0);
    assert!((parse_auto(LOW_PRICE).price - 0.0025).abs() < 1e-4);
}

#[test]
fn test_missing_numeric_fields_default() {
    let msg = parse_auto("35=D|55=TEST|");
    assert_eq!(msg.side, 0);
    assert_eq!(msg.quantity, 0);
    assert_eq!(msg.price, 0.0);

    let no_price = parse_auto("35=D|55=TEST|54=1|38=100|");
    assert_eq!(no_price.price, 0.0);
}

#[test]
fn test_full_message_populates_everything() {
    let msg = parse_auto(FULL_MESSAGE);
    assert!(msg.valid);
    assert_eq!(msg.sender, b"HEDGE_FUND");
    assert_eq!(msg.target, b"DARK_POOL");
    assert_eq!(msg.symbol, b"NVDA");
    assert_eq!(msg.side, 2);
    assert_eq!(msg.quantity, 1000);
    assert_close(msg.price, 875.30);
}

#[test]
fn test_long_text_fields() {
    assert_eq!(parse_auto(LONG_SYMBOL).symbol, b"VERYLONGSYMBOLNAME");
    assert_eq!(parse_auto(HIGH_PRICE).symbol, b"BRK.A");

    let msg = parse_auto(LONG_IDS);
    assert_eq!(msg.sender, b"VERY_LONG_SENDER_COMPANY_ID");
    assert_eq!(msg.target, b"VERY_LONG_TARGET_COMPANY_ID");
}

#[test]
fn test_minimal_message() {
    let msg = parse_auto(MINIMAL);
    assert!(msg.valid);
    assert_eq!(msg.message_type, b"D");
    assert_eq!(msg.symbol, b"SPY");
    assert!(msg.sender.is_empty());
    assert!(msg.target.is_empty());
}

#[test]
fn test_malformed_field_is_skipped() {
    let msg = parse_auto(MALFORMED_FIELD);
    assert_eq!(msg.symbol, b"AAPL");
    assert_eq!(msg.side, 1);
    assert!(msg.message_type.is_empty());
    assert!(!msg.valid);
}

#[test]
fn test_delimiter_edge_cases() {
    assert_eq!(parse_auto(ONLY_DELIMITERS), FixMessage::new());
    assert_eq!(parse_auto(SINGLE_DELIMITER), FixMessage::new());

    let double = parse_auto(DOUBLE_DELIMITER);
    assert!(double.valid);
    assert_eq!(double.message_type, b"D");

    let trailing = parse_auto(TRAILING_CONTENT);
    assert!(trailing.valid);
    assert_eq!(trailing.symbol, b"AAPL");
}

#[test]
fn test_no_delimiters_is_single_field() {
    let msg = parse_auto(NO_DELIMITERS);
    assert!(!msg.valid);
    assert!(msg.symbol.is_empty());
}

#[test]
fn test_last_write_wins() {
    let msg = parse_auto("35=D|55=FIRST|55=SECOND|");
    assert_eq!(msg.symbol, b"SECOND");

    let long = long_message(3);
    let repeated = parse_auto(&long);
    assert!(repeated.valid);
    assert_eq!(repeated.symbol, b"TEST");
}

#[test]
fn test_idempotent() {
    for input in VALID {
        assert_eq!(parse_auto(input), parse_auto(input));
    }
}

#[test]
fn test_views_point_into_buffer() {
    let message = String::from("8=FIX.4.4|35=D|55=AAPL|54=1|38=100|44=150.25|");
    let msg = parse_auto(&message);
    assert!(msg.valid);

    let range = message.as_bytes().as_ptr_range();
    for view in [msg.symbol, msg.message_type] {
        assert!(range.contains(&view.as_ptr()));
        assert!(view.as_ptr_range().end <= range.end);
    }
}

#[test]
fn test_batch_messages() {
    for input in message_batch(1000) {
        let msg = parse_auto(&input);
        assert!(msg.valid, "input {input:?}");
        assert_eq!(msg, parse_scalar(&input));
    }
}

#[test]
fn test_parser_on_soh_batch() {
    let parser = Parser::new(ParserConfig::soh()).unwrap();
    for input in message_batch(50) {
        let wire = input.replace('|', "\x01");
        let msg = parser.parse(&wire);
        assert!(msg.valid);
        assert_eq!(msg.sender_str().unwrap(), "TEST");
        assert_eq!(msg.target_str().unwrap(), "EXCH");
    }
}

#[test]
fn test_auto_matches_detection() {
    let parser = Parser::default();
    let expected = if has_avx512_support() {
        ScanStrategy::Simd
    } else {
        ScanStrategy::Scalar
    };
    assert_eq!(parser.strategy(), expected);
}

#[test]
fn test_owned_copy_outlives_buffer() {
    let owned = {
        let buffer = NEW_ORDER_SINGLE.to_string();
        parse_auto(&buffer).to_owned_message()
    };
    let msg = owned.as_message();
    assert!(msg.valid);
    assert_eq!(msg.symbol, b"AAPL");
}

#[test]
fn test_parse_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            std::thread::spawn(move || {
                message_batch(200)
                    .iter()
                    .skip(t)
                    .all(|input| parse_auto(input).valid)
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
