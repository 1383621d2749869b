// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use harf_core::{TracingConfig, WriterConfig,
                tracing_config_options::DEFAULT_LOG_FILE_NAME};
use tracing_core::LevelFilter;

/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
#[derive(Debug, Parser)]
#[command(bin_name = "harf")]
#[command(about = "🔤 Convert Arabic script to Windows-1256 escape tokens, and back")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  harf [\x1b[32mCommand\x1b[0m] [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n",
    subcommand_help_heading("Command")
)]
pub struct CLIArg {
    #[command(subcommand)]
    pub command: CLICommand,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging, see `--log-file`"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE_NAME,
        help = "Where the log goes when `--enable-logging` is set"
    )]
    pub log_file: PathBuf,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = LogLevel::Debug,
        help = "Most verbose level written to the log"
    )]
    pub log_level: LogLevel,

    #[arg(
        global = true,
        long,
        help = "Fail instead of taking a fallback path when text is not in the code page"
    )]
    pub strict: bool,

    #[arg(
        global = true,
        long,
        short = 'c',
        help = "Also copy the result to the system clipboard"
    )]
    pub copy: bool,
}

#[derive(Debug, Subcommand)]
pub enum CLICommand {
    #[clap(
        about = "🔒 Turn Unicode text into escape tokens\n💡 Eg: `harf encode تصدير`"
    )]
    Encode {
        #[command(flatten)]
        input: InputArg,
    },

    #[clap(
        about = "🔓 Turn escape tokens back into Unicode text, other text is skipped\n💡 Eg: `harf decode '\\u00C7'`"
    )]
    Decode {
        #[command(flatten)]
        input: InputArg,
    },

    #[clap(about = "📖 Print the code page table, one entry per line")]
    Table {
        #[arg(long, help = "Print the table as JSON instead")]
        json: bool,
    },

    #[clap(about = "🧹 Empty the system clipboard")]
    ClearClipboard,
}

/// Where the text to convert comes from. When neither is given, stdin is read.
#[derive(Debug, Clone, Args)]
pub struct InputArg {
    #[arg(value_name = "TEXT", help = "Text to convert, used as is")]
    pub text: Option<String>,

    #[arg(
        long,
        short = 'f',
        value_name = "PATH",
        conflicts_with = "text",
        help = "Read the text from a file, one trailing line ending is dropped"
    )]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// How a conversion result is treated once it is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub strict: bool,
    pub copy: bool,
}

impl GlobalOption {
    /// Logging is off (and nothing gets installed) unless `--enable-logging` is passed.
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        if !self.enable_logging {
            return TracingConfig {
                writer_config: WriterConfig::None,
                level_filter: LevelFilter::OFF,
            };
        }
        TracingConfig {
            writer_config: WriterConfig::File(self.log_file.display().to_string()),
            level_filter: self.log_level.into(),
        }
    }

    #[must_use]
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            strict: self.strict,
            copy: self.copy,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clap_config_is_valid() { CLIArg::command().debug_assert(); }

    #[test]
    fn test_defaults() {
        let cli_arg = CLIArg::try_parse_from(["harf", "encode", "سلام"]).unwrap();
        let global_options = &cli_arg.global_options;
        assert_eq!(global_options.log_file, PathBuf::from(DEFAULT_LOG_FILE_NAME));
        assert_eq!(global_options.log_level, LogLevel::Debug);
        assert_eq!(global_options.run_options(), RunOptions::default());
        assert_eq!(
            global_options.tracing_config().level_filter,
            LevelFilter::OFF
        );
        match cli_arg.command {
            CLICommand::Encode { input } => {
                assert_eq!(input.text.as_deref(), Some("سلام"));
                assert_eq!(input.file, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli_arg = CLIArg::try_parse_from([
            "harf",
            "decode",
            "--strict",
            "-c",
            "-l",
            "--log-level",
            "trace",
            "--log-file",
            "/tmp/harf.log",
        ])
        .unwrap();
        let global_options = &cli_arg.global_options;
        assert_eq!(
            global_options.run_options(),
            RunOptions {
                strict: true,
                copy: true
            }
        );
        assert_eq!(
            global_options.tracing_config(),
            TracingConfig {
                writer_config: WriterConfig::File("/tmp/harf.log".to_string()),
                level_filter: LevelFilter::TRACE,
            }
        );
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result =
            CLIArg::try_parse_from(["harf", "encode", "x", "--file", "input.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_no_args_is_an_error() {
        assert!(CLIArg::try_parse_from(["harf"]).is_err());
    }
}
