// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use harf_core::{ClipboardService, Conversion, Direction, FORWARD_TABLE, HarfResult,
                clear_clipboard, copy_conversion_to_clipboard, decode_with_report,
                encode_with_report};
use miette::IntoDiagnostic;

use super::{CLICommand, InputSource, RunOptions, ui_str};

/// What a command wants printed. The binary writes `stdout` followed by a newline, and
/// each of `notes` on its own line to stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Option<String>,
    pub notes: Vec<String>,
}

/// Runs one command. Reading the input is the only thing that awaits, the conversion
/// itself is synchronous.
///
/// # Errors
///
/// Returns an error if the input can't be read, the clipboard can't be reached, the
/// table can't be serialized, or `--strict` is set and the conversion is lossy.
pub async fn try_run_command(
    command: CLICommand,
    run_options: RunOptions,
    clipboard_service_provider: &mut impl ClipboardService,
) -> HarfResult<CommandOutput> {
    match command {
        CLICommand::Encode { input } => {
            let text = InputSource::from(input).try_read().await?;
            finish_conversion(
                Direction::Encode,
                encode_with_report(&text),
                run_options,
                clipboard_service_provider,
            )
        }
        CLICommand::Decode { input } => {
            let text = InputSource::from(input).try_read().await?;
            finish_conversion(
                Direction::Decode,
                decode_with_report(&text),
                run_options,
                clipboard_service_provider,
            )
        }
        CLICommand::Table { json } => Ok(CommandOutput {
            stdout: Some(format_table(json)?),
            notes: vec![],
        }),
        CLICommand::ClearClipboard => {
            clear_clipboard(clipboard_service_provider)?;
            Ok(CommandOutput {
                stdout: None,
                notes: vec![ui_str::clipboard_cleared_msg()],
            })
        }
    }
}

/// Applies `--strict` and `--copy` to a finished conversion.
///
/// # Errors
///
/// Returns [`harf_core::HarfError::LossyConversion`] in strict mode if any fallback was
/// taken, or [`harf_core::HarfError::ClipboardUnavailable`] if copying fails.
pub fn finish_conversion(
    direction: Direction,
    conversion: Conversion,
    run_options: RunOptions,
    clipboard_service_provider: &mut impl ClipboardService,
) -> HarfResult<CommandOutput> {
    let conversion = if run_options.strict {
        conversion.into_strict(direction)?
    } else {
        conversion
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "Conversion finished",
        direction = %direction,
        fallbacks = conversion.fallback_count(),
        run_options = ?run_options
    );

    let mut notes = vec![];

    if !conversion.is_lossless() {
        notes.push(ui_str::lossy_warning(direction, conversion.fallback_count()));
    }

    if run_options.copy {
        copy_conversion_to_clipboard(&conversion, clipboard_service_provider)?;
        notes.push(ui_str::copied_to_clipboard_msg());
    }

    Ok(CommandOutput {
        stdout: Some(conversion.text),
        notes,
    })
}

/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_table(json: bool) -> HarfResult<String> {
    if json {
        return serde_json::to_string_pretty(FORWARD_TABLE).into_diagnostic();
    }
    Ok(FORWARD_TABLE
        .iter()
        .map(ui_str::table_row)
        .collect::<Vec<_>>()
        .join("\n"))
}
