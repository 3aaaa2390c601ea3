// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// The closed set of keys the prompt understands. Everything else collapses into
/// [`KeyPress::Other`].
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone, Copy)]
pub enum KeyPress {
    Up,
    Down,
    PageUp,
    PageDown,
    Enter,
    Space,
    Esc,
    Backspace,
    /// A printable character typed without `Ctrl`.
    Char(char),
    /// A character typed while `Ctrl` was held. Always lower case.
    Ctrl(char),
    #[default]
    Other,
}

impl KeyPress {
    #[must_use]
    pub fn is_interrupt(self) -> bool { self == KeyPress::Ctrl('c') }

    /// Returns `None` for events that are not key presses (resize, focus, paste,
    /// mouse) and for key releases, which are only reported on Windows or when keyboard
    /// enhancement flags are pushed.
    #[must_use]
    pub fn from_event(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                Some(key_event.into())
            }
            _ => None,
        }
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(key_event: KeyEvent) -> Self {
        let KeyEvent {
            code, modifiers, ..
        } = key_event;
        let is_ctrl = modifiers.contains(KeyModifiers::CONTROL);

        match code {
            KeyCode::Up => KeyPress::Up,
            KeyCode::Down => KeyPress::Down,
            KeyCode::PageUp => KeyPress::PageUp,
            KeyCode::PageDown => KeyPress::PageDown,
            KeyCode::Enter => KeyPress::Enter,
            KeyCode::Esc => KeyPress::Esc,
            KeyCode::Backspace => KeyPress::Backspace,
            KeyCode::Char(ch) if is_ctrl => KeyPress::Ctrl(ch.to_ascii_lowercase()),
            KeyCode::Char(' ') => KeyPress::Space,
            KeyCode::Char(ch) => KeyPress::Char(ch),
            _ => KeyPress::Other,
        }
    }
}
