// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The escape token grammar, shared by the encoder and the decoder.
//!
//! A token is exactly six ASCII chars: the marker `\u`, two zero digits, and two hex
//! digits for the byte value. Eg: byte `0xCA` is written as `\u00CA`.
//!
//! - Writing: [`EscapeToken`] (always uppercase hex).
//! - Reading: [`TokenScanner`] (hex digits in either case, everything that is not a
//!   token is skipped).

// Attach sources.
pub mod escape_codes;
pub mod escape_token;
pub mod token_scanner;

// Re-export.
pub use escape_token::*;
pub use token_scanner::*;
