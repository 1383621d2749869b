// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # harf-cmdr
//!
//! The `harf` command line app. It reads text from an argument, a file, or stdin, runs
//! it through [`harf_core`], and prints the result.
//!
//! ```text
//! $ harf encode تصدير
//! \u00CA\u00D5\u00CF\u00ED\u00D1
//! $ harf decode '\u00CA\u00D5\u00CF\u00ED\u00D1'
//! تصدير
//! $ harf table --json
//! ```
//!
//! Run `harf --help` for all the options. Pass `-l` to write a debug log to
//! `harf_log.txt`, and `--strict` to turn fallbacks into errors.

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod harf;
