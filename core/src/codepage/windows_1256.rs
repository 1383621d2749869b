// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Windows-1256 (Arabic) repertoire: the core Arabic letters, the Persian and Urdu
//! extensions, and the Arabic punctuation. The Latin letters and symbols that also live
//! in the upper half of Windows-1256 are intentionally not listed, so their bytes decode
//! through the fallback path.
//!
//! Reference: <https://www.unicode.org/Public/MAPPINGS/VENDORS/MICSFT/WindowsBestFit/bestfit1256.txt>

use super::{CodePage, CodepointByteEntry};

/// Shorthand to keep the table below readable.
const fn entry(codepoint: char, byte: u8) -> CodepointByteEntry {
    CodepointByteEntry::new(codepoint, byte)
}

/// Sorted by codepoint (required by [`crate::lookup_codepoint`]). Every byte is used at
/// most once. Both are checked when the crate is compiled, see [`WINDOWS_1256`].
pub const FORWARD_TABLE: &[CodepointByteEntry] = &[
    // Arabic punctuation.
    entry('،', 0xA1), // U+060C ARABIC COMMA
    entry('؛', 0xBA), // U+061B ARABIC SEMICOLON
    entry('؟', 0xBF), // U+061F ARABIC QUESTION MARK
    // Hamza and its carriers.
    entry('ء', 0xC1), // U+0621
    entry('آ', 0xC2), // U+0622
    entry('أ', 0xC3), // U+0623
    entry('ؤ', 0xC4), // U+0624
    entry('إ', 0xC5), // U+0625
    entry('ئ', 0xC6), // U+0626
    // Core Arabic letters.
    entry('ا', 0xC7), // U+0627
    entry('ب', 0xC8), // U+0628
    entry('ة', 0xC9), // U+0629
    entry('ت', 0xCA), // U+062A
    entry('ث', 0xCB), // U+062B
    entry('ج', 0xCC), // U+062C
    entry('ح', 0xCD), // U+062D
    entry('خ', 0xCE), // U+062E
    entry('د', 0xCF), // U+062F
    entry('ذ', 0xD0), // U+0630
    entry('ر', 0xD1), // U+0631
    entry('ز', 0xD2), // U+0632
    entry('س', 0xD3), // U+0633
    entry('ش', 0xD4), // U+0634
    entry('ص', 0xD5), // U+0635
    entry('ض', 0xD6), // U+0636
    entry('ط', 0xD8), // U+0637 (0xD7 is the multiplication sign)
    entry('ظ', 0xD9), // U+0638
    entry('ع', 0xDA), // U+0639
    entry('غ', 0xDB), // U+063A
    entry('ـ', 0xDC), // U+0640 ARABIC TATWEEL
    entry('ف', 0xDD), // U+0641
    entry('ق', 0xDE), // U+0642
    entry('ك', 0xDF), // U+0643
    entry('ل', 0xE1), // U+0644
    entry('م', 0xE3), // U+0645
    entry('ن', 0xE4), // U+0646
    entry('ه', 0xE5), // U+0647
    entry('و', 0xE6), // U+0648
    entry('ى', 0xEC), // U+0649
    entry('ي', 0xED), // U+064A
    // Persian and Urdu extensions.
    entry('ٹ', 0x8A), // U+0679
    entry('پ', 0x81), // U+067E
    entry('چ', 0x8D), // U+0686
    entry('ڈ', 0x8F), // U+0688
    entry('ڑ', 0x9A), // U+0691
    entry('ژ', 0x8E), // U+0698
    entry('ک', 0x98), // U+06A9
    entry('گ', 0x90), // U+06AF
    entry('ں', 0x9F), // U+06BA
    entry('ھ', 0xAA), // U+06BE
    entry('ہ', 0xC0), // U+06C1
    entry('ے', 0xFF), // U+06D2
    // Joiner control used inside Persian words.
    entry('\u{200C}', 0x9D), // U+200C ZERO WIDTH NON-JOINER
];

/// The process wide code page. Built entirely at compile time: if [`FORWARD_TABLE`] ever
/// gets a duplicate byte or an out of order codepoint, the crate stops compiling.
pub static WINDOWS_1256: CodePage<'static> =
    CodePage::from_static_entries("windows-1256", FORWARD_TABLE);

/// Forward lookup in [`FORWARD_TABLE`]. Returns [`None`] for ASCII and for anything
/// outside the repertoire.
#[must_use]
pub const fn forward_lookup(codepoint: char) -> Option<u8> {
    super::lookup_codepoint(FORWARD_TABLE, codepoint)
}

/// The reverse mapping table derived from [`FORWARD_TABLE`].
#[must_use]
pub fn reverse_table() -> &'static super::ByteTable { WINDOWS_1256.reverse_table() }
