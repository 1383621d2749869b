// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on error types, see:
//!
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use crate::{Direction, FallbackKind, TableDefect};

/// Type alias to make it easy to work with:
/// 1. [`core::result::Result`]
/// 2. [`miette::Result`] and [`miette::Report`], which are [`std::error::Error`]
///    wrappers.
///
/// - It is basically `miette::Result<T, miette::Report>`.
/// - Works hand in hand w/ [`HarfError`] and any other type of error.
///
/// # Example
///
/// ```
/// use harf_core::{Direction, HarfResult, encode_with_report};
///
/// fn encode_strict(text: &str) -> HarfResult<String> {
///     let conversion = encode_with_report(text).into_strict(Direction::Encode)?;
///     Ok(conversion.text)
/// }
///
/// assert!(encode_strict("سلام").is_ok());
/// assert!(encode_strict("😀").is_err());
/// ```
pub type HarfResult<T> = miette::Result<T>;

/// Every error this workspace can produce. The two core conversions ([`crate::encode`]
/// and [`crate::decode`]) never fail, so nothing in here comes from them directly. These
/// come from checked table construction, strict mode, and the collaborators at the
/// edges (clipboard, input).
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum HarfError {
    /// A caller supplied table failed [`crate::check_entries`].
    #[error("Code page table is invalid: {defect}")]
    #[diagnostic(
        code(harf::table::invalid),
        help(
            "Each codepoint and each byte may appear only once, entries must be sorted \
             by codepoint, and bytes must be in the range 0x80..=0xFF."
        )
    )]
    InvalidTable { defect: TableDefect },

    /// Strict mode was requested and the conversion took at least one fallback path.
    #[error(
        "{direction} is lossy: {count} fallback(s), the first one at byte offset \
         {first_offset} ({first})"
    )]
    #[diagnostic(
        code(harf::convert::lossy),
        help(
            "The input contains text that Windows-1256 can't represent exactly. Run \
             without --strict to accept a best effort result."
        )
    )]
    LossyConversion {
        direction: Direction,
        count: usize,
        first_offset: usize,
        first: FallbackKind,
    },

    #[error("Could not access the system clipboard: {message}")]
    #[diagnostic(
        code(harf::clipboard::unavailable),
        help("Make sure a clipboard provider (eg: X11 or Wayland) is running.")
    )]
    ClipboardUnavailable { message: String },

    #[error("Could not read input from {source_name}")]
    #[diagnostic(
        code(harf::input::unreadable),
        help("Check that the path exists and holds UTF-8 text.")
    )]
    InputUnreadable {
        source_name: String,
        #[source]
        cause: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_lossy_conversion_message() {
        let error = HarfError::LossyConversion {
            direction: Direction::Encode,
            count: 2,
            first_offset: 5,
            first: FallbackKind::UnmappedChar('😀'),
        };
        assert_eq!(
            error.to_string(),
            "encode is lossy: 2 fallback(s), the first one at byte offset 5 \
             (unmapped char U+1F600)"
        );
    }

    #[test]
    fn test_error_converts_into_report() {
        fn fails() -> HarfResult<()> {
            Err(HarfError::ClipboardUnavailable {
                message: "no display".to_string(),
            })?;
            Ok(())
        }

        let report = fails().unwrap_err();
        assert!(report.to_string().contains("no display"));
        let code = report.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("harf::clipboard::unavailable"));
    }
}
