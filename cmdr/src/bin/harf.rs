// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! For more information on how to use CLAP, here are some resources:
//! 1. [Tutorial](https://developerlife.com/2023/09/17/tuify-clap/)
//! 2. [Video](https://youtu.be/lzMYDA6St0s)

use clap::Parser;
use harf_cmdr::harf::{CLIArg, CommandOutput, try_run_command};
use harf_core::{HarfResult, SystemClipboard, ok, try_initialize_logging_global};

/// `mimalloc` is a replacement for the default global allocator. It's optimized for
/// multi-threaded use cases where lots of small objects are created and destroyed.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> HarfResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;
    try_initialize_logging_global(cli_arg.global_options.tracing_config())?;

    should_log.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let run_options = cli_arg.global_options.run_options();
    let result = try_run_command(cli_arg.command, run_options, &mut SystemClipboard).await;

    should_log.then(|| match &result {
        Ok(_) => tracing::debug!(message = "Stop logging..."),
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not run harf due to the following problem",
                error = ?error
            );
        }
    });

    print_output(result?);

    ok!()
}

fn print_output(output: CommandOutput) {
    for note in &output.notes {
        eprintln!("{note}");
    }
    if let Some(stdout) = output.stdout {
        println!("{stdout}");
    }
}
