// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # harf_core
//!
//! Convert Arabic, Persian, and Urdu text to and from the Windows-1256 legacy code page.
//! Bytes are not emitted raw. Each one is written as a six character escape token
//! (`\u00CA`), which is plain ASCII and safe to paste into any text field.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Quick start](#quick-start)
//! - [How the pieces fit](#how-the-pieces-fit)
//! - [Fallback paths](#fallback-paths)
//! - [Logging](#logging)
//! <!-- /TOC -->
//!
//! # Quick start
//!
//! ```
//! use harf_core::{decode, encode};
//!
//! let escaped = encode("تصدير");
//! assert_eq!(escaped, "\\u00CA\\u00D5\\u00CF\\u00ED\\u00D1");
//! assert_eq!(decode(&escaped), "تصدير");
//! ```
//!
//! # How the pieces fit
//!
//! ```text
//! &str ──▶ encode ──▶ FORWARD_TABLE (char → u8) ──▶ EscapeToken ──▶ escaped String
//! &str ──▶ TokenScanner (byte) ──▶ reverse_table (u8 → char) ──▶ decode ──▶ String
//! ```
//!
//! 1. [`FORWARD_TABLE`] is a literal list of [`CodepointByteEntry`] values, sorted by
//!    codepoint. It is checked at compile time: codepoints ascending and unique, bytes
//!    unique and in the upper half.
//! 2. [`reverse_table`] returns the [`ByteTable`] inside [`WINDOWS_1256`]. It is built
//!    from the forward table by a `const fn`, so there is no lazy initialization and no
//!    locking.
//! 3. [`TokenScanner`] is a small state machine that recognizes tokens and skips
//!    everything else.
//!
//! # Fallback paths
//!
//! Both [`encode`] and [`decode`] are total. Characters outside the code page are
//! written as their UTF-8 bytes, and bytes without a mapping decode to the code point
//! with the same number. Use [`encode_with_report`] and [`decode_with_report`] to find
//! out whether that happened, see [`Conversion`].
//!
//! # Logging
//!
//! Logging is **disabled** by default. Call [`try_initialize_logging_global`] to turn it
//! on, see [`TracingConfig`]. The clipboard helpers live in [`ClipboardService`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

pub const DEBUG_HARF_FALLBACK: bool = true;
pub const DEBUG_HARF_COPY_PASTE: bool = true;

// Attach sources.
pub mod clipboard;
pub mod codepage;
pub mod common;
pub mod convert;
pub mod escape;
pub mod log;

// Re-export.
pub use clipboard::*;
pub use codepage::*;
pub use common::*;
pub use convert::*;
pub use escape::*;
pub use log::*;
