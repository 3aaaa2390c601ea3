// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crossterm::style::{Attribute, Color, SetAttribute, SetForegroundColor};

/// Turns one field of a [`Style`](crate::Style) into a crossterm command that can be
/// passed to `queue!`.
///
/// ```
/// use crossterm::{queue, style::Print};
/// use pim_prompt::{apply_style, StyleSheet, TestStringWriter};
///
/// let style = StyleSheet::default().focused_style;
/// let mut writer = TestStringWriter::new();
/// queue!(
///     writer,
///     apply_style!(style => fg_color),
///     apply_style!(style => intensity),
///     Print("> Todo"),
/// )
/// .unwrap();
/// assert_eq!(writer.get_plain_text(), "> Todo");
/// ```
#[macro_export]
macro_rules! apply_style {
    ($style: expr => fg_color) => {
        $crate::fg_color_command($style.color_fg)
    };
    ($style: expr => intensity) => {
        $crate::intensity_command($style.bold, $style.dim)
    };
}

#[must_use]
pub fn fg_color_command(color_fg: Option<Color>) -> SetForegroundColor {
    SetForegroundColor(color_fg.unwrap_or(Color::Reset))
}

/// Bold and dim share one SGR slot, so they are set together. Bold wins if both are
/// on.
#[must_use]
pub fn intensity_command(bold: bool, dim: bool) -> SetAttribute {
    match (bold, dim) {
        (true, _) => SetAttribute(Attribute::Bold),
        (false, true) => SetAttribute(Attribute::Dim),
        (false, false) => SetAttribute(Attribute::NormalIntensity),
    }
}
