// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Literal pieces of an escape token.

use const_format::concatcp;

/// Two char marker that starts every token.
pub const MARKER: &str = "\\u";

/// The byte value is always written as a four digit code point, so the high two digits
/// are always zero.
pub const PAD: &str = "00";

/// What comes before the two hex digits.
pub const TOKEN_PREFIX: &str = concatcp!(MARKER, PAD);

/// Length of a whole token, in bytes (and chars, it's all ASCII).
pub const TOKEN_LEN: usize = TOKEN_PREFIX.len() + 2;

pub const MARKER_START: u8 = b'\\';
pub const MARKER_END: u8 = b'u';
pub const PAD_DIGIT: u8 = b'0';

/// Used by the encoder, which always writes uppercase.
pub const HEX_DIGITS_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Value of an ASCII hex digit, in either case.
#[must_use]
pub const fn hex_value(it: u8) -> Option<u8> {
    match it {
        b'0'..=b'9' => Some(it - b'0'),
        b'a'..=b'f' => Some(it - b'a' + 10),
        b'A'..=b'F' => Some(it - b'A' + 10),
        _ => None,
    }
}
