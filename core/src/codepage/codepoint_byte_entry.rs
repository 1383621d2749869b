// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::Serialize;

use super::{ASCII_MAX, UPPER_HALF_START};

/// One row of a forward table: a Unicode scalar value and the legacy byte it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CodepointByteEntry {
    pub codepoint: char,
    pub byte: u8,
}

impl CodepointByteEntry {
    #[must_use]
    pub const fn new(codepoint: char, byte: u8) -> Self { Self { codepoint, byte } }
}

/// Things that can be wrong with a forward table. Produced by [`check_entries`], which
/// runs both at compile time (for [`crate::FORWARD_TABLE`]) and at run time (for caller
/// supplied tables, see [`crate::CodePage::try_new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableDefect {
    /// Two entries map to the same byte, so the table can't be inverted.
    DuplicateByte {
        byte: u8,
        first: usize,
        second: usize,
    },
    /// The codepoint at `index` is not strictly greater than the one before it. This
    /// also catches duplicate codepoints.
    UnsortedCodepoint { index: usize },
    /// The byte at `index` is in the ASCII range, which is reserved for identity.
    ByteOutsideUpperHalf { index: usize, byte: u8 },
    /// The codepoint at `index` is ASCII, which never goes through the table.
    AsciiCodepoint { index: usize },
}

impl Display for TableDefect {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            TableDefect::DuplicateByte {
                byte,
                first,
                second,
            } => write!(
                f,
                "byte 0x{byte:02X} is used by entry {first} and entry {second}"
            ),
            TableDefect::UnsortedCodepoint { index } => {
                write!(f, "entry {index} is not sorted by codepoint, or is a duplicate")
            }
            TableDefect::ByteOutsideUpperHalf { index, byte } => {
                write!(f, "entry {index} maps to byte 0x{byte:02X}, below 0x80")
            }
            TableDefect::AsciiCodepoint { index } => {
                write!(f, "entry {index} has an ASCII codepoint")
            }
        }
    }
}

/// Returns the first problem found in `entries`, or [`None`] if the table is usable:
/// 1. Codepoints are above ASCII, strictly ascending (so also unique).
/// 2. Bytes are in the upper half and unique (so the table is injective, and can be
///    inverted without any slot being overwritten).
///
/// This is a `const fn` so that the shipped table is checked when the crate is compiled.
#[must_use]
pub const fn check_entries(entries: &[CodepointByteEntry]) -> Option<TableDefect> {
    let mut index = 0;
    while index < entries.len() {
        let entry = entries[index];

        if entry.codepoint as u32 <= ASCII_MAX as u32 {
            return Some(TableDefect::AsciiCodepoint { index });
        }

        if entry.byte < UPPER_HALF_START {
            return Some(TableDefect::ByteOutsideUpperHalf {
                index,
                byte: entry.byte,
            });
        }

        if index > 0 && entries[index - 1].codepoint as u32 >= entry.codepoint as u32 {
            return Some(TableDefect::UnsortedCodepoint { index });
        }

        let mut other = 0;
        while other < index {
            if entries[other].byte == entry.byte {
                return Some(TableDefect::DuplicateByte {
                    byte: entry.byte,
                    first: other,
                    second: index,
                });
            }
            other += 1;
        }

        index += 1;
    }
    None
}

/// Binary search `entries` (which must be sorted by codepoint) for `codepoint`.
#[must_use]
pub const fn lookup_codepoint(
    entries: &[CodepointByteEntry],
    codepoint: char,
) -> Option<u8> {
    let needle = codepoint as u32;
    let mut low = 0;
    let mut high = entries.len();
    while low < high {
        let mid = low + (high - low) / 2;
        let entry = entries[mid];
        let probe = entry.codepoint as u32;
        if probe == needle {
            return Some(entry.byte);
        }
        if probe < needle {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    None
}
