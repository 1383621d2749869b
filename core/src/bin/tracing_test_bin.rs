// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use harf_core::{DisplayPreference, TracingConfig, WriterConfig, decode, encode,
                try_initialize_logging_thread_local};
use tracing_core::LevelFilter;

/// `assert_cmd` : <https://docs.rs/assert_cmd/latest/assert_cmd/index.html>
///
/// This is the binary under test, which is tested by `tests/tracing_test_bin_stdio.rs`.
/// It takes 1 argument: "stdout" or "stderr". Depending on the argument, it will
/// display the logs to stdout or stderr. Besides the plain level messages it runs one
/// lossy encode and one lossy decode, so the fallback logs show up too.
fn main() -> miette::Result<()> {
    let arg = std::env::args().nth(1).unwrap_or_default();
    let display_preference = match arg.as_str() {
        "stderr" => DisplayPreference::Stderr,
        _ => DisplayPreference::Stdout,
    };

    let default_guard = try_initialize_logging_thread_local(TracingConfig {
        writer_config: WriterConfig::Display(display_preference),
        level_filter: LevelFilter::DEBUG,
    })?;

    tracing::error!("error");
    tracing::warn!("warn");
    tracing::info!("info");
    tracing::debug!("debug");
    tracing::trace!("trace");

    let _unused = encode("€");
    let _unused = decode("\\u0080");

    drop(default_guard);
    Ok(())
}
