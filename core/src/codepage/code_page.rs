// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{ASCII_MAX, ByteTable, CodepointByteEntry, check_entries, lookup_codepoint};
use crate::HarfResult;

/// A forward table and its inverse, bundled together. This is the immutable
/// configuration object that the encoder and decoder read from. There is no interior
/// mutability, so a `&CodePage` can be shared between any number of threads.
///
/// There are two ways to make one:
/// 1. [`CodePage::from_static_entries`] is a `const fn`, used to build a `static` like
///    [`crate::WINDOWS_1256`]. Bad entries fail the build.
/// 2. [`CodePage::try_new`] checks the entries at run time and returns an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodePage<'a> {
    name: &'a str,
    forward: &'a [CodepointByteEntry],
    reverse: ByteTable,
}

impl<'a> CodePage<'a> {
    /// # Panics
    ///
    /// Panics if [`check_entries`] finds a defect. When this is used to initialize a
    /// `static` or `const` the panic happens at compile time, which is the point.
    #[must_use]
    pub const fn from_static_entries(
        name: &'a str,
        forward: &'a [CodepointByteEntry],
    ) -> Self {
        if check_entries(forward).is_some() {
            panic!("code page entries are not sorted, unique, and in the upper half");
        }
        Self {
            name,
            forward,
            reverse: ByteTable::build(forward),
        }
    }

    /// # Errors
    ///
    /// Returns [`crate::HarfError::InvalidTable`] if [`check_entries`] finds a defect,
    /// eg: two entries that map to the same byte.
    pub fn try_new(name: &'a str, forward: &'a [CodepointByteEntry]) -> HarfResult<Self> {
        let reverse = ByteTable::try_build(forward).inspect_err(|report| {
            // % is Display, ? is Debug.
            tracing::warn!(
                message = "Rejected code page table",
                name = %name,
                report = %report
            );
        })?;
        Ok(Self {
            name,
            forward,
            reverse,
        })
    }

    #[must_use]
    pub const fn name(&self) -> &'a str { self.name }

    #[must_use]
    pub const fn forward_table(&self) -> &'a [CodepointByteEntry] { self.forward }

    #[must_use]
    pub const fn reverse_table(&self) -> &ByteTable { &self.reverse }

    /// Forward lookup, upper half only. ASCII is not in the table, so this returns
    /// [`None`] for it. See [`CodePage::byte_for`] for the lookup the encoder uses.
    #[must_use]
    pub const fn lookup(&self, codepoint: char) -> Option<u8> {
        lookup_codepoint(self.forward, codepoint)
    }

    /// The single byte that represents `codepoint`, ASCII included, or [`None`] if the
    /// encoder has to fall back to UTF-8 bytes.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn byte_for(&self, codepoint: char) -> Option<u8> {
        if codepoint as u32 <= ASCII_MAX as u32 {
            Some(codepoint as u32 as u8)
        } else {
            self.lookup(codepoint)
        }
    }

    /// The char for `byte`, or [`None`] if the slot is unmapped.
    #[must_use]
    pub const fn char_for(&self, byte: u8) -> Option<char> { self.reverse.get(byte) }
}
