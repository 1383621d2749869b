// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two lookup tables, and the [`CodePage`] that bundles them.
//!
//! - [`FORWARD_TABLE`] maps a [`char`] to a byte in the upper half (`0x80..=0xFF`).
//! - [`ByteTable`] is the inverse, 256 slots indexed by byte, with ASCII filled in by
//!   identity.
//!
//! Both are built at compile time. See [`WINDOWS_1256`].

// Attach sources.
pub mod byte_table;
pub mod code_page;
pub mod codepoint_byte_entry;
pub mod windows_1256;

// Re-export.
pub use byte_table::*;
pub use code_page::*;
pub use codepoint_byte_entry::*;
pub use windows_1256::*;

/// Highest byte (and codepoint) that passes through unchanged.
pub const ASCII_MAX: u8 = 0x7F;

/// First byte of the upper half of the code page, where all the table entries live.
pub const UPPER_HALF_START: u8 = 0x80;

/// One slot per possible byte value.
pub const BYTE_TABLE_LEN: usize = 256;
