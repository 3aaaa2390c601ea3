// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Hints.
pub const SINGLE_SELECT_HINT: &str = "Use arrows or j/k to move, type / to filter";
pub const MULTI_SELECT_HINT: &str =
    "Use arrows or j/k to move and space to select, type / to filter";
pub const FILTER_ACTIVE_HINT: &str = "Press ESC to reset filter and Enter to accept";
pub const PAGINATION_HINT: &str =
    ", PageUp/Ctrl+U previous page, PageDown/Ctrl+D next page";
pub const NO_MATCHES: &str = "No matches";

// Glyphs.
pub const IS_FOCUSED: &str = "> ";
pub const IS_NOT_FOCUSED: &str = "  ";
pub const MULTI_SELECT_IS_SELECTED: &str = "[x] ";
pub const MULTI_SELECT_IS_NOT_SELECTED: &str = "[ ] ";
pub const FILTER_PREFIX: &str = " /";
pub const ELLIPSIS: &str = "…";

// Layout.
/// Rows that are not available to options: the header row, the spacer row above the
/// footer, and the footer row.
pub const RESERVED_ROW_COUNT: u16 = 3;
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;
