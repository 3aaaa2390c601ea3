// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

/// Collects everything written to it, escape sequences included.
#[derive(Debug, Default, Clone)]
pub struct TestStringWriter {
    buffer: String,
}

impl TestStringWriter {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn get_buffer(&self) -> &str { &self.buffer }

    /// The buffer with all ANSI escape sequences removed, which is what a person looking
    /// at the terminal would read (minus cursor placement).
    #[must_use]
    pub fn get_plain_text(&self) -> String { strip_ansi_escape_sequences(&self.buffer) }
}

impl Write for TestStringWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        match std::str::from_utf8(buf) {
            Ok(value) => {
                self.buffer.push_str(value);
                Ok(buf.len())
            }
            Err(_) => Ok(0),
        }
    }

    fn flush(&mut self) -> Result<()> { Ok(()) }
}

#[must_use]
pub fn contains_ansi_escape_sequence(text: &str) -> bool {
    text.chars().any(|it| it == '\x1b')
}

/// Removes all escape sequences from `text`, OSC ones included.
#[must_use]
pub fn strip_ansi_escape_sequences(text: &str) -> String {
    strip_ansi_escapes::strip_str(text)
}
