// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use harf_core::{HarfError, HarfResult};
use tokio::io::AsyncReadExt;

use super::InputArg;

/// Where the text to convert is read from. Precedence is positional text, then
/// `--file`, then stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl From<InputArg> for InputSource {
    fn from(input_arg: InputArg) -> Self {
        match (input_arg.text, input_arg.file) {
            (Some(text), _) => Self::Inline(text),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }
}

impl InputSource {
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Inline(_) => "the command line".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Stdin => "stdin".to_string(),
        }
    }

    /// Inline text is returned as typed. Text read from a file or stdin loses one
    /// trailing line ending, so `echo تصدير | harf encode` has no token for it.
    ///
    /// # Errors
    ///
    /// Returns [`HarfError::InputUnreadable`] if the file or stdin can't be read, or
    /// doesn't hold UTF-8 text.
    pub async fn try_read(self) -> HarfResult<String> {
        let source_name = self.name();
        let result = match self {
            Self::Inline(text) => return Ok(text),
            Self::File(path) => tokio::fs::read_to_string(&path).await,
            Self::Stdin => {
                let mut acc = String::new();
                let result = tokio::io::stdin().read_to_string(&mut acc).await;
                result.map(|_| acc)
            }
        };

        match result {
            Ok(text) => Ok(strip_one_line_ending(text)),
            Err(cause) => {
                // % is Display, ? is Debug.
                tracing::error!(
                    message = "Could not read input",
                    source_name = %source_name,
                    cause = ?cause
                );
                Err(HarfError::InputUnreadable { source_name, cause }.into())
            }
        }
    }
}

/// Drops a single trailing `\n` or `\r\n`, nothing else.
#[must_use]
pub fn strip_one_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
