// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use miette::IntoDiagnostic as _;
use tracing_core::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

use super::rolling_file_appender_impl;

pub const DEFAULT_LOG_FILE_NAME: &str = "pim.log";

/// Where the logs go, and how much of them.
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    /// Logging is off.
    None,
    File(PathBuf),
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }
}

impl TracingConfig {
    /// Debug level logs written to `maybe_path`, or to [`DEFAULT_LOG_FILE_NAME`] in the
    /// current directory.
    #[must_use]
    pub fn new_file(maybe_path: Option<PathBuf>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                maybe_path.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE_NAME)),
            ),
            level_filter: LevelFilter::DEBUG,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.writer_config != WriterConfig::None && self.level_filter != LevelFilter::OFF
    }
}

/// Install the global tracing subscriber described by `tracing_config`. Does nothing
/// when logging is off.
///
/// # Errors
///
/// Returns an error if the log file can't be used, or if a global subscriber was already
/// installed.
pub fn try_initialize_logging_global(tracing_config: &TracingConfig) -> miette::Result<()> {
    if !tracing_config.is_enabled() {
        return Ok(());
    }

    let WriterConfig::File(path) = &tracing_config.writer_config else {
        return Ok(());
    };

    let file_appender = rolling_file_appender_impl::try_create(path)?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(file_appender);

    tracing_subscriber::registry()
        .with(tracing_config.level_filter)
        .with(file_layer)
        .try_init()
        .into_diagnostic()?;

    tracing::debug!(
        message = "Start logging...",
        path = %path.display(),
        level = %tracing_config.level_filter
    );

    Ok(())
}
