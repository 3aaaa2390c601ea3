// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{self, IsTerminal as _};

use crossterm::terminal::size;

use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH, RESERVED_ROW_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub col_count: u16,
    pub row_count: u16,
}

impl Default for Size {
    fn default() -> Self {
        Self {
            col_count: DEFAULT_WIDTH,
            row_count: DEFAULT_HEIGHT,
        }
    }
}

impl Size {
    #[must_use]
    pub fn new(col_count: u16, row_count: u16) -> Self {
        Self {
            col_count,
            row_count,
        }
    }

    /// How many option rows fit on one page: the visible height minus the header and
    /// footer rows. Never less than one, even on absurdly short windows.
    #[must_use]
    pub fn page_size(&self) -> usize {
        usize::from(self.row_count.saturating_sub(RESERVED_ROW_COUNT)).max(1)
    }
}

/// Get the terminal size.
///
/// # Errors
///
/// Returns an error if the size can't be queried, eg when there is no tty.
pub fn get_size() -> io::Result<Size> {
    let (columns, rows) = size()?;
    Ok(Size::new(columns, rows))
}

/// Get the terminal size. If there is a problem, or the terminal reports a zero sized
/// window, return the default size.
#[must_use]
pub fn get_size_or_default() -> Size {
    match get_size() {
        Ok(it) if it.col_count > 0 && it.row_count > 0 => it,
        _ => Size::default(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinIsPipedResult {
    StdinIsPiped,
    StdinIsNotPiped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdoutIsPipedResult {
    StdoutIsPiped,
    StdoutIsNotPiped,
}

/// If you run `echo "test" | cargo run` the following will return true.
/// More info: <https://unix.stackexchange.com/questions/597083/how-does-piping-affect-stdin>
#[must_use]
pub fn is_stdin_piped() -> StdinIsPipedResult {
    if io::stdin().is_terminal() {
        StdinIsPipedResult::StdinIsNotPiped
    } else {
        StdinIsPipedResult::StdinIsPiped
    }
}

/// If you run `cargo run | grep foo` the following will return true.
#[must_use]
pub fn is_stdout_piped() -> StdoutIsPipedResult {
    if io::stdout().is_terminal() {
        StdoutIsPipedResult::StdoutIsNotPiped
    } else {
        StdoutIsPipedResult::StdoutIsPiped
    }
}
