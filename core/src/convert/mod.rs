// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod conversion;
pub mod decoder;
pub mod encoder;

// Re-export.
pub use conversion::*;
pub use decoder::*;
pub use encoder::*;
