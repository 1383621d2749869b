// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties of the shipped Windows-1256 tables and the two conversions, checked
//! through the public API only.

use std::collections::HashSet;

use harf_core::{ByteTable, FORWARD_TABLE, FallbackKind, WINDOWS_1256, check_entries,
                decode, decode_with_report, encode, encode_with_report, reverse_table};
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn forward_table_bytes_are_unique() {
    let bytes = FORWARD_TABLE
        .iter()
        .map(|entry| entry.byte)
        .collect::<HashSet<_>>();
    assert_eq!(bytes.len(), FORWARD_TABLE.len());
    assert_eq!(check_entries(FORWARD_TABLE), None);
}

#[test]
fn ascii_round_trips_by_identity() {
    for byte in 0..=0x7F_u8 {
        let ch = char::from(byte);
        let text = ch.to_string();
        let escaped = encode(&text);
        assert_eq!(escaped, format!("\\u00{byte:02X}"));
        assert_eq!(decode(&escaped), text);
    }
}

#[test]
fn every_forward_entry_round_trips() {
    for entry in FORWARD_TABLE {
        let text = entry.codepoint.to_string();
        let report = encode_with_report(&text);
        assert!(report.is_lossless(), "{:?} took the fallback path", entry.codepoint);
        assert_eq!(report.text, format!("\\u00{:02X}", entry.byte));

        let back = decode_with_report(&report.text);
        assert!(back.is_lossless());
        assert_eq!(back.text, text);
    }
}

#[test]
fn mixed_mapped_text_round_trips() {
    let text = "Export: تصدير، پاکستان گھر؟";
    let report = encode_with_report(text);
    assert!(report.is_lossless());
    assert!(report.text.is_ascii());
    assert_eq!(decode(&report.text), text);
}

#[test]
fn export_word_encodes_to_known_tokens() {
    assert_eq!(
        encode("تصدير"),
        "\\u00CA\\u00D5\\u00CF\\u00ED\\u00D1"
    );
}

#[test]
fn decode_ignores_text_between_tokens() {
    assert_eq!(decode("hello\\u00C7world"), "ا");
}

#[test_case("\\u\\u00C7", "ا" ; "broken marker before a token")]
#[test_case("\\U00C7\\u00c7", "ا" ; "uppercase marker is plain text")]
#[test_case("\\u01C7\\u0041", "A" ; "non zero pad is plain text")]
#[test_case("\\u00C", "" ; "token cut short")]
#[test_case("", "" ; "empty input")]
fn decode_skips_near_misses(input: &str, expected: &str) {
    assert_eq!(decode(input), expected);
}

#[test]
fn emoji_takes_the_utf8_fallback_and_does_not_come_back() {
    let report = encode_with_report("😀");
    assert_eq!(report.text, "\\u00F0\\u009F\\u0098\\u0080");
    assert_eq!(report.fallback_count(), 1);
    assert_eq!(report.fallbacks[0].kind, FallbackKind::UnmappedChar('😀'));

    // F0 and 80 are unmapped, 9F and 98 are Urdu letters. Lossy by design.
    let back = decode_with_report(&report.text);
    assert_eq!(back.text, "\u{F0}ںک\u{80}");
    assert_ne!(back.text, "😀");
    assert_eq!(
        back.fallbacks
            .iter()
            .map(|it| it.kind)
            .collect::<Vec<_>>(),
        vec![
            FallbackKind::UnmappedByte(0xF0),
            FallbackKind::UnmappedByte(0x80),
        ]
    );
}

#[test]
fn reverse_table_rebuild_is_identical() {
    let rebuilt = ByteTable::build(FORWARD_TABLE);
    assert_eq!(&rebuilt, reverse_table());
    assert_eq!(ByteTable::build(FORWARD_TABLE), rebuilt);
    assert_eq!(ByteTable::try_build(FORWARD_TABLE).unwrap(), rebuilt);
    assert_eq!(WINDOWS_1256.reverse_table(), reverse_table());
}

#[test]
fn decode_of_every_token_is_a_single_char() {
    for byte in 0..=u8::MAX {
        let decoded = decode(&format!("\\u00{byte:02x}"));
        assert_eq!(decoded.chars().count(), 1, "byte 0x{byte:02X}");
        match reverse_table().get(byte) {
            Some(ch) => assert_eq!(decoded, ch.to_string()),
            None => assert_eq!(decoded, char::from(byte).to_string()),
        }
    }
}
