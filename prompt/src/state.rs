// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{collections::BTreeSet, ops::Range};

use clap::ValueEnum;
use serde::Deserialize;
use strum_macros::{Display, EnumString};

use crate::{PromptError, PromptResult};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display)]
pub enum HowToChoose {
    #[default]
    #[strum(serialize = "single")]
    Single,
    #[strum(serialize = "multiple")]
    Multiple,
}

/// What happens to the multi select selection set when the user leaves filter mode.
///
/// Selections are tracked by the position of the option in the full list, so they stay
/// valid across any number of filter edits. `Keep` lets the user build up a selection
/// from several different filters.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SelectionRetention {
    #[default]
    Keep,
    ClearOnFilterExit,
}

/// The data model of one prompt session. Created at the start of a `select_*` call and
/// dropped when it returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptState {
    /// Never empty, and never changes after construction.
    pub all_options: Vec<String>,
    pub filter_text: String,
    /// Indices into [`all_options`](Self::all_options) that match
    /// [`filter_text`](Self::filter_text), in ascending order.
    pub filtered_indices: Vec<usize>,
    pub is_filter_mode_active: bool,
    /// Position in [`filtered_indices`](Self::filtered_indices), not in `all_options`.
    pub cursor_index: usize,
    /// Indices into `all_options`.
    pub selected: BTreeSet<usize>,
    pub page_size: usize,
    pub current_page: usize,
}

impl PromptState {
    /// # Errors
    ///
    /// Returns [`PromptError::EmptyOptions`] when there is nothing to choose from.
    pub fn try_new(all_options: Vec<String>, page_size: usize) -> PromptResult<Self> {
        if all_options.is_empty() {
            return Err(PromptError::EmptyOptions);
        }
        let filtered_indices = (0..all_options.len()).collect();
        Ok(Self {
            all_options,
            filter_text: String::new(),
            filtered_indices,
            is_filter_mode_active: false,
            cursor_index: 0,
            selected: BTreeSet::new(),
            page_size: page_size.max(1),
            current_page: 0,
        })
    }

    #[must_use]
    pub fn filtered_len(&self) -> usize { self.filtered_indices.len() }

    #[must_use]
    pub fn total_pages(&self) -> usize { self.filtered_len().div_ceil(self.page_size) }

    /// The slice of the filtered list that is visible on the current page.
    #[must_use]
    pub fn page_bounds(&self) -> Range<usize> {
        page_bounds(self.current_page, self.page_size, self.filtered_len())
    }

    /// The option at `position` in the filtered list, along with its index in
    /// `all_options`.
    #[must_use]
    pub fn filtered_option(&self, position: usize) -> Option<(usize, &str)> {
        let option_index = *self.filtered_indices.get(position)?;
        let text = self.all_options.get(option_index)?;
        Some((option_index, text.as_str()))
    }

    #[must_use]
    pub fn option_at_cursor(&self) -> Option<(usize, &str)> {
        self.filtered_option(self.cursor_index)
    }

    #[must_use]
    pub fn is_selected(&self, option_index: usize) -> bool {
        self.selected.contains(&option_index)
    }

    /// In the order they appear in `all_options`.
    #[must_use]
    pub fn selected_options(&self) -> Vec<String> {
        self.selected
            .iter()
            .filter_map(|it| self.all_options.get(*it))
            .cloned()
            .collect()
    }

    /// Recompute the filtered list from `all_options` and `filter_text`. The cursor and
    /// page go back to the top so they are always inside the new list.
    pub fn apply_filter(&mut self) {
        let needle = self.filter_text.to_lowercase();
        self.filtered_indices = self
            .all_options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();
        self.cursor_index = 0;
        self.current_page = 0;
    }

    pub fn reset_filter(&mut self) {
        self.filter_text.clear();
        self.apply_filter();
    }

    pub fn clear_selection(&mut self) { self.selected.clear(); }
}

/// The half open range `[start, end)` of the filtered list shown on `current_page`.
/// Empty when there is nothing to show.
#[must_use]
pub fn page_bounds(current_page: usize, page_size: usize, count: usize) -> Range<usize> {
    let start = current_page.saturating_mul(page_size).min(count);
    let end = start.saturating_add(page_size).min(count);
    start..end
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use test_case::test_case;

    use super::*;

    fn make_state(options: &[&str], page_size: usize) -> PromptState {
        PromptState::try_new(options.iter().map(ToString::to_string).collect(), page_size)
            .unwrap()
    }

    #[test]
    fn test_empty_options_are_rejected() {
        let result = PromptState::try_new(vec![], 5);
        assert!(matches!(result, Err(PromptError::EmptyOptions)));
    }

    #[test]
    fn test_new_state_shows_everything() {
        let state = make_state(&["Todo", "In Progress", "Done"], 0);
        assert_eq!(state.page_size, 1);
        assert_eq!(state.filtered_indices, vec![0, 1, 2]);
        assert_eq!(state.option_at_cursor(), Some((0, "Todo")));
        assert!(!state.is_filter_mode_active);
    }

    #[test_case(0, 2, 0)]
    #[test_case(1, 2, 1)]
    #[test_case(2, 2, 1)]
    #[test_case(5, 2, 3)]
    #[test_case(6, 3, 2)]
    #[test_case(7, 10, 1)]
    fn test_total_pages_is_ceiling(len: usize, page_size: usize, expected: usize) {
        let options = (0..len.max(1)).map(|it| format!("item {it}")).collect();
        let mut state = PromptState::try_new(options, page_size).unwrap();
        if len == 0 {
            state.filter_text = "nothing matches this".into();
            state.apply_filter();
        }
        assert_eq!(state.total_pages(), expected);
        assert_eq!(state.total_pages() == 0, state.filtered_len() == 0);
    }

    #[test_case(0, 2, 5 => 0..2)]
    #[test_case(1, 2, 5 => 2..4)]
    #[test_case(2, 2, 5 => 4..5)]
    #[test_case(3, 2, 5 => 5..5)]
    #[test_case(0, 4, 0 => 0..0)]
    fn test_page_bounds(current_page: usize, page_size: usize, count: usize) -> Range<usize> {
        page_bounds(current_page, page_size, count)
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut state = make_state(&["Alpha", "Beta", "alphabet", "Gamma"], 5);
        state.cursor_index = 2;
        state.current_page = 1;
        state.filter_text = "ALP".into();
        state.apply_filter();

        assert_eq!(state.filtered_indices, vec![0, 2]);
        assert_eq!(state.cursor_index, 0);
        assert_eq!(state.current_page, 0);
        assert_eq!(state.filtered_option(1), Some((2, "alphabet")));
        assert_eq!(state.filtered_option(2), None);
    }

    #[test]
    fn test_filter_is_monotonic() {
        let mut state = make_state(&["Alpha", "Beta", "alphabet", "Gamma", "ALPS"], 5);
        let mut previous_len = state.filtered_len();
        for ch in "alpha".chars() {
            state.filter_text.push(ch);
            state.apply_filter();
            assert!(state.filtered_len() <= previous_len);
            previous_len = state.filtered_len();
        }
        assert_eq!(state.filtered_indices, vec![0, 2]);
    }

    #[test]
    fn test_reset_filter_restores_all_options() {
        let mut state = make_state(&["Alpha", "Beta"], 5);
        state.filter_text = "zzz".into();
        state.apply_filter();
        assert_eq!(state.filtered_len(), 0);
        assert_eq!(state.option_at_cursor(), None);

        state.reset_filter();
        assert_eq!(state.filter_text, "");
        assert_eq!(state.filtered_indices, vec![0, 1]);
    }

    #[test]
    fn test_selected_options_follow_all_options_order() {
        let mut state = make_state(&["Alpha", "Beta", "Gamma"], 5);
        state.selected.insert(2);
        state.selected.insert(0);
        assert_eq!(state.selected_options(), vec!["Alpha", "Gamma"]);
        assert!(state.is_selected(2));
        assert!(!state.is_selected(1));

        state.clear_selection();
        assert!(state.selected_options().is_empty());
    }

    #[test]
    fn test_selection_retention_names() {
        assert_eq!(SelectionRetention::default(), SelectionRetention::Keep);
        assert_eq!(
            SelectionRetention::ClearOnFilterExit.to_string(),
            "clear-on-filter-exit"
        );
        assert_eq!(
            <SelectionRetention as FromStr>::from_str("keep").unwrap(),
            SelectionRetention::Keep
        );
        assert_eq!(HowToChoose::Multiple.to_string(), "multiple");
    }
}
