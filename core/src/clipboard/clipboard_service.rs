// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

use crate::{Conversion, DEBUG_HARF_COPY_PASTE, HarfError, HarfResult, ok};

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by both a test clipboard service and a system clipboard service.
pub trait ClipboardService {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()>;
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}

/// Puts the converted text into the clipboard. Fallbacks don't matter here, the caller
/// decides whether a lossy [`Conversion`] is acceptable before getting this far.
///
/// # Errors
///
/// Returns [`HarfError::ClipboardUnavailable`] if the clipboard rejects the content.
pub fn copy_conversion_to_clipboard(
    conversion: &Conversion,
    clipboard_service_provider: &mut impl ClipboardService,
) -> HarfResult<()> {
    put_into_clipboard(clipboard_service_provider, conversion.text.clone())
}

/// Empties the clipboard by writing an empty string into it.
///
/// # Errors
///
/// Returns [`HarfError::ClipboardUnavailable`] if the clipboard can't be reached.
pub fn clear_clipboard(
    clipboard_service_provider: &mut impl ClipboardService,
) -> HarfResult<()> {
    put_into_clipboard(clipboard_service_provider, String::new())
}

fn put_into_clipboard(
    clipboard_service_provider: &mut impl ClipboardService,
    content: String,
) -> HarfResult<()> {
    let char_count = content.chars().count();
    if let Err(error) = clipboard_service_provider.try_to_put_content_into_clipboard(content)
    {
        DEBUG_HARF_COPY_PASTE.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋📋📋 Failed to put text into clipboard",
                error = ?error,
            );
        });
        return Err(HarfError::ClipboardUnavailable {
            message: error.to_string(),
        }
        .into());
    }

    DEBUG_HARF_COPY_PASTE.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "📋📋📋 Text was put into clipboard",
            char_count = char_count,
        );
    });

    ok!()
}
