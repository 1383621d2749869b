// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Conversion, Fallback, FallbackKind};
use crate::{CodePage, DEBUG_HARF_FALLBACK, EscapeToken, WINDOWS_1256,
            escape::escape_codes::TOKEN_LEN};

/// Encode `text` into escape tokens using [`WINDOWS_1256`]. This never fails, see
/// [`encode_with_report`] to find out if any char had to use the fallback path.
///
/// ```
/// use harf_core::encode;
///
/// assert_eq!(encode("Hi"), "\\u0048\\u0069");
/// assert_eq!(encode("سلام"), "\\u00D3\\u00E1\\u00C7\\u00E3");
/// ```
#[must_use]
pub fn encode(text: &str) -> String {
    let mut acc = String::with_capacity(text.len() * TOKEN_LEN);
    encode_into(&WINDOWS_1256, text, &mut acc, |_| {});
    acc
}

/// Same output as [`encode`], plus every place where a fallback was used.
#[must_use]
pub fn encode_with_report(text: &str) -> Conversion {
    encode_with_code_page(&WINDOWS_1256, text)
}

/// Same as [`encode_with_report`], for any [`CodePage`].
#[must_use]
pub fn encode_with_code_page(code_page: &CodePage<'_>, text: &str) -> Conversion {
    let mut it = Conversion {
        text: String::with_capacity(text.len() * TOKEN_LEN),
        fallbacks: vec![],
    };
    encode_into(code_page, text, &mut it.text, |fallback| {
        it.fallbacks.push(fallback);
    });

    // % is Display, ? is Debug.
    tracing::trace!(
        message = "Encoded text",
        code_page = %code_page.name(),
        input_len = text.len(),
        output_len = it.text.len(),
        fallbacks = it.fallbacks.len()
    );

    it
}

/// Walk `text` one [`char`] at a time (so anything outside the BMP is still one unit):
/// 1. ASCII and table hits become one token.
/// 2. Anything else becomes one token per UTF-8 byte, and `on_fallback` is called.
pub fn encode_into(
    code_page: &CodePage<'_>,
    text: &str,
    acc: &mut String,
    mut on_fallback: impl FnMut(Fallback),
) {
    for (offset, ch) in text.char_indices() {
        if let Some(byte) = code_page.byte_for(ch) {
            EscapeToken(byte).push_to(acc);
            continue;
        }

        let mut buffer = [0_u8; 4];
        for byte in ch.encode_utf8(&mut buffer).bytes() {
            EscapeToken(byte).push_to(acc);
        }

        DEBUG_HARF_FALLBACK.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "Char is not in the code page, wrote UTF-8 bytes instead",
                offset = offset,
                ch = ?ch
            );
        });

        on_fallback(Fallback {
            offset,
            kind: FallbackKind::UnmappedChar(ch),
        });
    }
}
