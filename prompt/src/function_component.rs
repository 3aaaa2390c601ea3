// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

use crate::Size;

/// Something that can paint a whole frame for a state `S`. Rendering only reads the
/// state; all changes to it happen in the key press handlers.
pub trait FunctionComponent<S> {
    /// Draw one full frame. `viewport` is re-read by the caller before every frame so the
    /// rows always match the current terminal width.
    fn render(&self, writer: &mut impl Write, state: &S, viewport: Size) -> Result<()>;
}
