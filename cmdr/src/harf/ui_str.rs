// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use harf_core::{CodepointByteEntry, Direction};

#[must_use]
pub fn lossy_warning(direction: Direction, fallback_count: usize) -> String {
    format!(
        "⚠️  {direction} took {fallback_count} fallback(s), the result won't round trip. \
         Use --strict to make this an error."
    )
}

#[must_use]
pub fn copied_to_clipboard_msg() -> String { "📋 Copied to clipboard".to_string() }

#[must_use]
pub fn clipboard_cleared_msg() -> String { "🧹 Clipboard cleared".to_string() }

/// One line of the `table` command, eg: `0xC7  U+0627  ا`.
#[must_use]
pub fn table_row(entry: &CodepointByteEntry) -> String {
    format!(
        "0x{:02X}  U+{:04X}  {}",
        entry.byte,
        u32::from(entry.codepoint),
        entry.codepoint
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_table_row() {
        assert_eq!(
            table_row(&CodepointByteEntry::new('ا', 0xC7)),
            "0xC7  U+0627  ا"
        );
    }

    #[test]
    fn test_lossy_warning_names_direction() {
        let warning = lossy_warning(Direction::Decode, 3);
        assert!(warning.contains("decode took 3 fallback(s)"));
    }
}
