// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::KeyPress;

pub trait KeyPressReader {
    /// Blocks until the next key press. Returns `None` once the input source is gone,
    /// and no more key presses will ever arrive.
    fn read_key_press(&mut self) -> Option<KeyPress>;
}

#[derive(Debug, Default)]
pub struct CrosstermKeyPressReader;

impl KeyPressReader for CrosstermKeyPressReader {
    fn read_key_press(&mut self) -> Option<KeyPress> {
        // Resize, focus, and mouse events don't count as key presses.
        loop {
            let event = crossterm::event::read().ok()?;
            if let Some(key_press) = KeyPress::from_event(event) {
                return Some(key_press);
            }
        }
    }
}

/// Replays a fixed script of key presses. Once the script runs out it reports the input
/// source as closed, so a test that forgets the final `Enter` fails instead of hanging.
#[derive(Debug, Default, Clone)]
pub struct TestVecKeyPressReader {
    pub key_press_vec: Vec<KeyPress>,
    pub index: usize,
}

impl TestVecKeyPressReader {
    #[must_use]
    pub fn new(key_press_vec: Vec<KeyPress>) -> Self {
        Self {
            key_press_vec,
            index: 0,
        }
    }

    /// How many key presses have been handed out so far.
    #[must_use]
    pub fn consumed(&self) -> usize { self.index }
}

impl KeyPressReader for TestVecKeyPressReader {
    fn read_key_press(&mut self) -> Option<KeyPress> {
        let it = self.key_press_vec.get(self.index).copied()?;
        self.index += 1;
        Some(it)
    }
}
