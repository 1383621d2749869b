// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Include.
pub mod clap_config;
pub mod input_source;
pub mod launcher;
pub mod ui_str;

// Reexport.
pub use clap_config::*;
pub use input_source::*;
pub use launcher::*;
