// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Conversion, Fallback, FallbackKind};
use crate::{CodePage, DEBUG_HARF_FALLBACK, ScannedToken, TokenScanner, WINDOWS_1256};

/// Decode the escape tokens in `text` using [`WINDOWS_1256`]. Text that isn't a token is
/// skipped, and an unmapped byte turns into the char with the same numeric value. This
/// never fails, see [`decode_with_report`] to find out if any byte was unmapped.
///
/// ```
/// use harf_core::decode;
///
/// assert_eq!(decode("\\u00D3\\u00E1\\u00C7\\u00E3"), "سلام");
/// assert_eq!(decode("hello\\u00C7world"), "ا");
/// ```
#[must_use]
pub fn decode(text: &str) -> String {
    let mut acc = String::with_capacity(estimate_capacity(text));
    decode_into(&WINDOWS_1256, text, &mut acc, |_| {});
    acc
}

/// Same output as [`decode`], plus every place where a fallback was used.
#[must_use]
pub fn decode_with_report(text: &str) -> Conversion {
    decode_with_code_page(&WINDOWS_1256, text)
}

/// Same as [`decode_with_report`], for any [`CodePage`].
#[must_use]
pub fn decode_with_code_page(code_page: &CodePage<'_>, text: &str) -> Conversion {
    let mut it = Conversion {
        text: String::with_capacity(estimate_capacity(text)),
        fallbacks: vec![],
    };
    decode_into(code_page, text, &mut it.text, |fallback| {
        it.fallbacks.push(fallback);
    });

    // % is Display, ? is Debug.
    tracing::trace!(
        message = "Decoded text",
        code_page = %code_page.name(),
        input_len = text.len(),
        output_len = it.text.len(),
        fallbacks = it.fallbacks.len()
    );

    it
}

/// Scan `text` for tokens, and append the char for each one to `acc`. Unmapped bytes are
/// appended as `U+0080..=U+00FF`, and `on_fallback` is called.
pub fn decode_into(
    code_page: &CodePage<'_>,
    text: &str,
    acc: &mut String,
    mut on_fallback: impl FnMut(Fallback),
) {
    for ScannedToken { offset, byte } in TokenScanner::new(text) {
        if let Some(ch) = code_page.char_for(byte) {
            acc.push(ch);
            continue;
        }

        acc.push(char::from(byte));

        DEBUG_HARF_FALLBACK.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Byte is not mapped, wrote the same numbered char instead",
                offset = offset,
                byte = byte
            );
        });

        on_fallback(Fallback {
            offset,
            kind: FallbackKind::UnmappedByte(byte),
        });
    }
}

/// Each token is 6 bytes of input, and at most 3 bytes of output (the zero width
/// non-joiner is the only slot above U+07FF).
fn estimate_capacity(text: &str) -> usize { text.len() / 2 }
