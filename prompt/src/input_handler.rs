// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pure state transitions. Nothing in here reads keys or draws anything, so every rule
//! can be checked directly against a [`PromptState`].

use unicode_segmentation::UnicodeSegmentation as _;

use crate::{KeyPress, PromptState};

/// How a key press handled in filter mode left the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTransition {
    /// Still typing.
    Editing,
    /// `Enter`. The filtered list stays as the working set.
    Committed,
    /// `Esc`. Back to the full list.
    Discarded,
}

impl FilterTransition {
    #[must_use]
    pub fn exits_filter_mode(self) -> bool { self != FilterTransition::Editing }
}

/// `/` pressed while navigating. Any earlier filter is thrown away and the full list
/// comes back, so the user always starts typing against every option.
pub fn enter_filter_mode(state: &mut PromptState) {
    state.is_filter_mode_active = true;
    state.reset_filter();
}

pub fn handle_filter_mode(state: &mut PromptState, key_press: KeyPress) -> FilterTransition {
    match key_press {
        KeyPress::Enter => {
            state.is_filter_mode_active = false;
            FilterTransition::Committed
        }
        KeyPress::Esc => {
            state.is_filter_mode_active = false;
            state.reset_filter();
            FilterTransition::Discarded
        }
        KeyPress::Backspace => {
            if let Some((offset, _)) = state.filter_text.grapheme_indices(true).next_back() {
                state.filter_text.truncate(offset);
                state.apply_filter();
            }
            FilterTransition::Editing
        }
        KeyPress::Space => {
            state.filter_text.push(' ');
            state.apply_filter();
            FilterTransition::Editing
        }
        KeyPress::Char(ch) if !ch.is_control() => {
            state.filter_text.push(ch);
            state.apply_filter();
            FilterTransition::Editing
        }
        _ => FilterTransition::Editing,
    }
}

/// Move the cursor or change the page. Keys that don't navigate are ignored, as is
/// everything when the filtered list is empty.
pub fn handle_navigation(state: &mut PromptState, key_press: KeyPress) {
    let count = state.filtered_len();
    if count == 0 {
        return;
    }

    match key_press {
        KeyPress::Up | KeyPress::Char('k') => {
            state.cursor_index = (state.cursor_index + count - 1) % count;
            sync_page_to_cursor(state);
        }
        KeyPress::Down | KeyPress::Char('j') => {
            state.cursor_index = (state.cursor_index + 1) % count;
            sync_page_to_cursor(state);
        }
        KeyPress::PageUp | KeyPress::Ctrl('u') => {
            if state.current_page > 0 {
                state.current_page -= 1;
                state.cursor_index = state.cursor_index.saturating_sub(state.page_size);
            }
        }
        KeyPress::PageDown | KeyPress::Ctrl('d') => {
            if state.current_page + 1 < state.total_pages() {
                state.current_page += 1;
                state.cursor_index = (state.cursor_index + state.page_size).min(count - 1);
            }
        }
        _ => {}
    }
}

/// Flip the membership of the option under the cursor. Does nothing when the filtered
/// list is empty.
pub fn toggle_selection(state: &mut PromptState) {
    let Some((option_index, _)) = state.option_at_cursor() else {
        return;
    };
    if !state.selected.remove(&option_index) {
        state.selected.insert(option_index);
    }
}

/// Keeps the highlighted row on the visible page after the cursor wraps or crosses a
/// page boundary.
fn sync_page_to_cursor(state: &mut PromptState) {
    state.current_page = state.cursor_index / state.page_size;
}
