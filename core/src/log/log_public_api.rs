// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing::dispatcher;

use crate::{DisplayPreference, TracingConfig, WriterConfig, ok};

pub mod tracing_config_options {
    use super::{Add, DisplayPreference, TracingConfig, WriterConfig};

    pub const DEFAULT_LOG_FILE_NAME: &str = "harf_log.txt";

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self {
            Self {
                level_filter: level.into(),
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<tracing_core::LevelFilter> for TracingConfig {
        fn from(level_filter: tracing_core::LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: tracing_core::LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// The more verbose level filter wins, and the writer configs are merged.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// The right hand side wins for each of the display and file slots it fills.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,

                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp, f))
                | (Display(dp), File(f))
                | (File(f), Display(dp))
                | (DisplayAndFile(_, f), Display(dp))
                | (DisplayAndFile(dp, _), File(f)) => DisplayAndFile(dp, f),

                (Display(_), Display(dp)) => Display(dp),
                (File(_), File(f)) => File(f),
            }
        }
    }

    #[cfg(test)]
    mod tests_add_writer_configs {
        use pretty_assertions::assert_eq;

        use super::*;

        #[test]
        fn test_add_writer_configs() {
            let fname = DEFAULT_LOG_FILE_NAME.to_string();

            let none = WriterConfig::None;
            let display_stdout = WriterConfig::Display(DisplayPreference::Stdout);
            let display_stderr = WriterConfig::Display(DisplayPreference::Stderr);
            let file = WriterConfig::File(fname.clone());
            let display_stdout_and_file =
                WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());
            let display_stderr_and_file =
                WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname.clone());

            assert_eq!(none.clone() + none.clone(), none);
            assert_eq!(display_stdout.clone() + none.clone(), display_stdout);
            assert_eq!(none.clone() + file.clone(), file);
            assert_eq!(
                display_stdout.clone() + display_stderr.clone(),
                display_stderr
            );
            assert_eq!(
                file.clone() + display_stdout.clone(),
                display_stdout_and_file
            );
            assert_eq!(
                display_stderr.clone() + file.clone(),
                display_stderr_and_file
            );
            assert_eq!(
                display_stdout_and_file.clone() + display_stderr.clone(),
                display_stderr_and_file
            );
            assert_eq!(
                display_stderr_and_file.clone() + file.clone(),
                display_stderr_and_file
            );
            assert_eq!(
                display_stdout_and_file.clone() + display_stderr_and_file.clone(),
                display_stderr_and_file
            );
            assert_eq!(
                file.clone() + WriterConfig::File("other.txt".into()),
                WriterConfig::File("other.txt".into())
            );
        }

        #[test]
        fn test_level_converts_to_file_only_config() {
            let it = TracingConfig::from(tracing::Level::INFO);
            assert_eq!(it.level_filter, tracing_core::LevelFilter::INFO);
            assert_eq!(
                it.writer_config,
                WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
            );
        }

        #[test]
        fn test_add_tracing_configs_keeps_more_verbose_level() {
            let lhs = TracingConfig::from(tracing_core::LevelFilter::WARN);
            let rhs = TracingConfig::from(DisplayPreference::Stderr);
            let sum = lhs + rhs;
            assert_eq!(sum.level_filter, tracing_core::LevelFilter::DEBUG);
            assert_eq!(
                sum.writer_config,
                WriterConfig::DisplayAndFile(
                    DisplayPreference::Stderr,
                    DEFAULT_LOG_FILE_NAME.to_string()
                )
            );
        }
    }
}

/// Installs a global subscriber built from `options`. When the level filter is
/// [`tracing_core::LevelFilter::OFF`] nothing is installed.
///
/// # Errors
///
/// Returns an error if the layers can't be created, or a global subscriber is already
/// set.
pub fn try_initialize_logging_global(
    options: impl Into<TracingConfig>,
) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Installs a subscriber for the current thread only. Drop the returned guard to
/// restore the previous one. When the level filter is
/// [`tracing_core::LevelFilter::OFF`] nothing is installed and [`None`] is returned.
///
/// # Errors
///
/// Returns an error if the layers can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();

    if matches!(it.get_level_filter(), tracing_core::LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}
