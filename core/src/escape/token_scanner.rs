// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! A finite state scanner that pulls escape tokens out of arbitrary text.
//!
//! ```text
//!            '\'         'u'        '0'         '0'         hex         hex
//! Ground ─────────▶ Backslash ──▶ Marker ──▶ FirstPad ──▶ SecondPad ──▶ HighNibble ──▶ emit
//!   ▲                                                                                  │
//!   └───────────────────────── any other byte, or after emit ──────────────────────────┘
//! ```
//!
//! A `'\'` seen in any state restarts the match at that position. No other byte in a
//! token can start a new one, so a failed partial match never needs to back up, and
//! the scan is a single pass over the input. Everything that is not part of a complete
//! token is skipped.

use super::escape_codes::{MARKER_END, MARKER_START, PAD_DIGIT, TOKEN_LEN, hex_value};

/// A token found by [`TokenScanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedToken {
    /// Byte offset of the token's marker in the scanned text.
    pub offset: usize,
    /// The byte value the token encodes.
    pub byte: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Ground,
    Backslash { start: usize },
    Marker { start: usize },
    FirstPad { start: usize },
    SecondPad { start: usize },
    HighNibble { start: usize, high: u8 },
}

/// Iterator over the tokens in a piece of text, in order. Near misses (wrong marker,
/// wrong number of digits, non zero pad) yield nothing.
///
/// ```
/// use harf_core::{ScannedToken, TokenScanner};
///
/// let found = TokenScanner::new("hello\\u00C7world\\u00c8").collect::<Vec<_>>();
/// assert_eq!(
///     found,
///     vec![
///         ScannedToken { offset: 5, byte: 0xC7 },
///         ScannedToken { offset: 16, byte: 0xC8 },
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct TokenScanner<'a> {
    input: &'a [u8],
    position: usize,
    state: ScanState,
}

impl<'a> TokenScanner<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            input: text.as_bytes(),
            position: 0,
            state: ScanState::Ground,
        }
    }

    /// Feed one byte (found at `at`) to the state machine. Returns the token if this
    /// byte completed one.
    fn step(&mut self, at: usize, it: u8) -> Option<ScannedToken> {
        use ScanState::{Backslash, FirstPad, Ground, HighNibble, Marker, SecondPad};

        let (next_state, emit) = match (self.state, it) {
            (_, MARKER_START) => (Backslash { start: at }, None),
            (Backslash { start }, MARKER_END) => (Marker { start }, None),
            (Marker { start }, PAD_DIGIT) => (FirstPad { start }, None),
            (FirstPad { start }, PAD_DIGIT) => (SecondPad { start }, None),
            (SecondPad { start }, _) => match hex_value(it) {
                Some(high) => (HighNibble { start, high }, None),
                None => (Ground, None),
            },
            (HighNibble { start, high }, _) => match hex_value(it) {
                Some(low) => (
                    Ground,
                    Some(ScannedToken {
                        offset: start,
                        byte: (high << 4) | low,
                    }),
                ),
                None => (Ground, None),
            },
            _ => (Ground, None),
        };

        self.state = next_state;
        emit
    }
}

impl Iterator for TokenScanner<'_> {
    type Item = ScannedToken;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&it) = self.input.get(self.position) {
            let at = self.position;
            self.position += 1;
            if let Some(token) = self.step(at, it) {
                return Some(token);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.input.len() - self.position;
        (0, Some(remaining / TOKEN_LEN + 1))
    }
}
