// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use super::escape_codes::{HEX_DIGITS_UPPER, TOKEN_LEN, TOKEN_PREFIX};
use crate::TokenScanner;

/// One byte, in its textual escape form. [`Display`] writes the canonical form, which is
/// always uppercase, eg: `EscapeToken(0xCA)` is written as `\u00CA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EscapeToken(pub u8);

impl EscapeToken {
    /// Append this token to `acc` without any intermediate allocation.
    pub fn push_to(self, acc: &mut String) {
        let EscapeToken(byte) = self;
        acc.push_str(TOKEN_PREFIX);
        acc.push(char::from(HEX_DIGITS_UPPER[usize::from(byte >> 4)]));
        acc.push(char::from(HEX_DIGITS_UPPER[usize::from(byte & 0x0F)]));
    }

    /// Parse `text` if it is exactly one token (hex digits in either case). Anything
    /// else, including a token with extra text around it, is [`None`].
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() != TOKEN_LEN {
            return None;
        }
        TokenScanner::new(text)
            .next()
            .map(|scanned| EscapeToken(scanned.byte))
    }
}

impl Display for EscapeToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let mut acc = String::with_capacity(TOKEN_LEN);
        self.push_to(&mut acc);
        f.write_str(&acc)
    }
}
