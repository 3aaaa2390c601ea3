// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{stderr, Stderr, Write};

use crossterm::{cursor::{Hide, MoveTo, Show},
                queue,
                terminal::{self,
                           Clear,
                           ClearType,
                           EnterAlternateScreen,
                           LeaveAlternateScreen}};

use crate::{get_size_or_default,
            CrosstermKeyPressReader,
            KeyPress,
            KeyPressReader,
            PromptResult,
            Size,
            TestStringWriter,
            TestVecKeyPressReader,
            DEVELOPMENT_MODE};

/// Everything a prompt needs from a terminal: somewhere to draw, the window size, key
/// presses, and a way to switch into (and back out of) full screen prompt mode.
pub trait TerminalDevice: KeyPressReader {
    type Output: Write;

    fn output(&mut self) -> &mut Self::Output;

    fn size(&self) -> Size;

    /// # Errors
    ///
    /// Returns an error if the terminal mode can't be changed.
    fn enter_prompt_mode(&mut self) -> PromptResult<()>;

    /// Must undo everything [`enter_prompt_mode`](Self::enter_prompt_mode) did. Called on
    /// every exit path, including errors and interrupts.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal mode can't be changed.
    fn leave_prompt_mode(&mut self) -> PromptResult<()>;
}

/// The real terminal. The UI is drawn on `stderr`, so `stdout` is left free for the
/// caller's output, eg `pim single a b c | xargs ...`.
#[derive(Debug)]
pub struct CrosstermTerminal {
    pub output: Stderr,
    pub key_press_reader: CrosstermKeyPressReader,
    is_in_prompt_mode: bool,
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self {
            output: stderr(),
            key_press_reader: CrosstermKeyPressReader,
            is_in_prompt_mode: false,
        }
    }
}

impl KeyPressReader for CrosstermTerminal {
    fn read_key_press(&mut self) -> Option<KeyPress> {
        self.key_press_reader.read_key_press()
    }
}

impl TerminalDevice for CrosstermTerminal {
    type Output = Stderr;

    fn output(&mut self) -> &mut Stderr { &mut self.output }

    fn size(&self) -> Size { get_size_or_default() }

    fn enter_prompt_mode(&mut self) -> PromptResult<()> {
        terminal::enable_raw_mode()?;
        self.is_in_prompt_mode = true;
        queue!(
            self.output,
            EnterAlternateScreen,
            MoveTo(0, 0),
            Clear(ClearType::All),
            Hide,
        )?;
        self.output.flush()?;

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(message = "enter prompt mode", size = ?self.size());
        });

        Ok(())
    }

    fn leave_prompt_mode(&mut self) -> PromptResult<()> {
        if !self.is_in_prompt_mode {
            return Ok(());
        }
        self.is_in_prompt_mode = false;

        // Try all of these even if one of them fails, then report the first failure.
        let screen_result = queue!(self.output, Show, LeaveAlternateScreen)
            .and_then(|()| self.output.flush());
        let raw_mode_result = terminal::disable_raw_mode();

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(message = "leave prompt mode");
        });

        screen_result?;
        raw_mode_result?;
        Ok(())
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        if let Err(error) = self.leave_prompt_mode() {
            tracing::error!(message = "could not restore terminal", error = ?error);
        }
    }
}

/// A terminal that replays scripted key presses and records what was drawn.
#[derive(Debug, Default, Clone)]
pub struct TestTerminal {
    pub output: TestStringWriter,
    pub key_press_reader: TestVecKeyPressReader,
    pub size: Size,
    pub enter_count: usize,
    pub leave_count: usize,
}

impl TestTerminal {
    #[must_use]
    pub fn new(key_press_vec: Vec<KeyPress>) -> Self {
        Self {
            key_press_reader: TestVecKeyPressReader::new(key_press_vec),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn is_in_prompt_mode(&self) -> bool { self.enter_count > self.leave_count }
}

impl KeyPressReader for TestTerminal {
    fn read_key_press(&mut self) -> Option<KeyPress> {
        self.key_press_reader.read_key_press()
    }
}

impl TerminalDevice for TestTerminal {
    type Output = TestStringWriter;

    fn output(&mut self) -> &mut TestStringWriter { &mut self.output }

    fn size(&self) -> Size { self.size }

    fn enter_prompt_mode(&mut self) -> PromptResult<()> {
        self.enter_count += 1;
        Ok(())
    }

    fn leave_prompt_mode(&mut self) -> PromptResult<()> {
        self.leave_count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_test_terminal_defaults() {
        let mut it = TestTerminal::new(vec![KeyPress::Enter]);
        assert_eq!(it.size(), Size::new(80, 24));
        assert_eq!(it.read_key_press(), Some(KeyPress::Enter));
        assert_eq!(it.read_key_press(), None);

        it.enter_prompt_mode().unwrap();
        assert!(it.is_in_prompt_mode());
        it.leave_prompt_mode().unwrap();
        assert!(!it.is_in_prompt_mode());
    }

    #[test]
    fn test_with_size() {
        let it = TestTerminal::new(vec![]).with_size(Size::new(40, 6));
        assert_eq!(it.size(), Size::new(40, 6));
    }
}
