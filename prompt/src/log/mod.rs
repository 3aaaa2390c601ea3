// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The prompt owns the whole terminal while it runs, so logs can only go to a file. Use
//! `tail -f` on it to watch what the event loop is doing.

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;

// Re-export.
pub use tracing_config::*;
