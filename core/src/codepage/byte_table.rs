// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ASCII_MAX, BYTE_TABLE_LEN, CodepointByteEntry, check_entries};
use crate::{HarfError, HarfResult};

/// The reverse mapping table: 256 slots indexed by byte value.
///
/// - Slots `0x00..=0x7F` hold the ASCII char with the same value.
/// - Slots `0x80..=0xFF` hold the char that the forward table maps to that byte, or
///   [`None`] if no entry uses it.
///
/// It is built by [`ByteTable::build`], which is a `const fn`, so the table for
/// [`crate::WINDOWS_1256`] lives in a `static` and needs no lazy initialization or
/// locking. It is never mutated after it is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteTable {
    slots: [Option<char>; BYTE_TABLE_LEN],
}

impl ByteTable {
    /// Invert `entries` into a new table. This does not validate anything. If two
    /// entries use the same byte, the later one wins and the earlier one is silently
    /// lost. Use [`ByteTable::try_build`] if the entries come from somewhere you don't
    /// control.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn build(entries: &[CodepointByteEntry]) -> Self {
        let mut slots = [None; BYTE_TABLE_LEN];

        // ASCII identity.
        let mut byte = 0;
        while byte <= ASCII_MAX as usize {
            slots[byte] = Some(byte as u8 as char);
            byte += 1;
        }

        // Invert the forward table.
        let mut index = 0;
        while index < entries.len() {
            let entry = entries[index];
            slots[entry.byte as usize] = Some(entry.codepoint);
            index += 1;
        }

        Self { slots }
    }

    /// Same as [`ByteTable::build`], but the entries are run through [`check_entries`]
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`HarfError::InvalidTable`] with the first defect found.
    pub fn try_build(entries: &[CodepointByteEntry]) -> HarfResult<Self> {
        match check_entries(entries) {
            Some(defect) => Err(HarfError::InvalidTable { defect }.into()),
            None => Ok(Self::build(entries)),
        }
    }

    /// The char stored for `byte`, or [`None`] if the slot is unmapped.
    #[must_use]
    pub const fn get(&self, byte: u8) -> Option<char> { self.slots[byte as usize] }

    #[must_use]
    pub const fn is_mapped(&self, byte: u8) -> bool { self.get(byte).is_some() }

    /// Number of slots (ASCII included) that hold a char.
    #[must_use]
    pub fn mapped_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// All 256 slots, in byte order.
    pub fn slots(&self) -> impl Iterator<Item = (u8, Option<char>)> + '_ {
        (0..=u8::MAX).map(|byte| (byte, self.get(byte)))
    }
}
