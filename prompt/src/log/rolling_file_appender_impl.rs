// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::IntoDiagnostic as _;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// A log file that is never rotated. Relative paths are relative to the current
/// directory.
///
/// Note that if you wrap this up in a non blocking writer it doesn't work, since the
/// worker guard would have to outlive the whole program.
///
/// # Errors
///
/// Returns an error if `path` has no file name (eg `/` or `..`), or if the file can't be
/// created.
pub fn try_create(path: &Path) -> miette::Result<RollingFileAppender> {
    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!(
            "Can't use {} as a log file. It does not name a file.",
            path.display()
        )
    })?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}
