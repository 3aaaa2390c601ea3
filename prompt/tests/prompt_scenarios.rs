// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Whole prompt sessions driven by scripted key presses.

use pim_prompt::{KeyPress, PromptConfig, PromptEngine, PromptError, PromptState, Size,
                 TestTerminal, FILTER_ACTIVE_HINT, NO_MATCHES};
use pretty_assertions::assert_eq;

fn engine(key_press_vec: Vec<KeyPress>) -> PromptEngine<TestTerminal> {
    PromptEngine::new(TestTerminal::new(key_press_vec), PromptConfig::default())
}

fn typed(text: &str) -> Vec<KeyPress> { text.chars().map(KeyPress::Char).collect() }

#[test]
fn single_select_moves_down_and_picks() {
    let mut it = engine(vec![KeyPress::Down, KeyPress::Enter]);
    let result = it.select_one("Column", ["Todo", "In Progress", "Done"], None);
    assert_eq!(result.unwrap(), "In Progress");
}

#[test]
fn single_select_wraps_with_vim_keys() {
    let mut it = engine(vec![KeyPress::Char('k'), KeyPress::Space]);
    let result = it.select_one("Column", ["Todo", "In Progress", "Done"], None);
    assert_eq!(result.unwrap(), "Done");
}

#[test]
fn multi_select_returns_in_option_order() {
    let mut it = engine(vec![
        KeyPress::Space,
        KeyPress::Down,
        KeyPress::Down,
        KeyPress::Space,
        KeyPress::Enter,
    ]);
    let result = it.select_many("Labels", ["Alpha", "Beta", "Gamma"], None);
    assert_eq!(result.unwrap(), vec!["Alpha", "Gamma"]);
}

#[test]
fn multi_select_order_does_not_depend_on_pick_order() {
    let mut it = engine(vec![
        KeyPress::Up,
        KeyPress::Space,
        KeyPress::Up,
        KeyPress::Up,
        KeyPress::Space,
        KeyPress::Enter,
    ]);
    let result = it.select_many("Labels", ["Alpha", "Beta", "Gamma"], None);
    assert_eq!(result.unwrap(), vec!["Alpha", "Gamma"]);
}

#[test]
fn multi_select_nothing_is_a_valid_answer() {
    let mut it = engine(vec![KeyPress::Enter]);
    let result = it.select_many("Labels", ["Alpha", "Beta"], None);
    assert_eq!(result.unwrap(), Vec::<String>::new());
}

#[test]
fn multi_select_builds_selection_across_filters() {
    let mut keys = vec![KeyPress::Char('/')];
    keys.extend(typed("bet"));
    keys.extend([KeyPress::Enter, KeyPress::Space, KeyPress::Char('/')]);
    keys.extend(typed("gam"));
    keys.extend([KeyPress::Enter, KeyPress::Space, KeyPress::Enter]);

    let mut it = engine(keys);
    let result = it.select_many("Labels", ["Alpha", "Beta", "Gamma"], None);
    assert_eq!(result.unwrap(), vec!["Beta", "Gamma"]);
}

#[test]
fn single_select_filter_with_one_match_picks_it() {
    let mut keys = vec![KeyPress::Char('/')];
    keys.extend(typed("al"));
    keys.push(KeyPress::Enter);

    let mut it = engine(keys);
    let result = it.select_one("Letters", ["Alpha", "Beta"], None);
    assert_eq!(result.unwrap(), "Alpha");
}

#[test]
fn single_select_filter_is_case_insensitive_and_backspace_widens_it() {
    let mut keys = vec![KeyPress::Char('/')];
    keys.extend(typed("GAMMAX"));
    keys.push(KeyPress::Backspace);
    keys.push(KeyPress::Enter);

    let mut it = engine(keys);
    let result = it.select_one("Letters", ["Alpha", "Beta", "gamma"], None);
    assert_eq!(result.unwrap(), "gamma");

    let output = it.device().output.get_plain_text();
    assert!(output.contains("Letters /GAMMAX"));
    assert!(output.contains(NO_MATCHES));
    assert!(output.contains(FILTER_ACTIVE_HINT));
}

#[test]
fn esc_discards_the_filter() {
    let mut keys = vec![KeyPress::Char('/')];
    keys.extend(typed("be"));
    keys.extend([KeyPress::Esc, KeyPress::Down, KeyPress::Down, KeyPress::Enter]);

    let mut it = engine(keys);
    let result = it.select_one("Letters", ["Alpha", "Beta", "Gamma"], None);
    assert_eq!(result.unwrap(), "Gamma");
}

#[test]
fn page_down_moves_to_next_page() {
    let mut state = PromptState::try_new(
        ["a", "b", "c", "d", "e"].map(String::from).to_vec(),
        2,
    )
    .unwrap();
    pim_prompt::handle_navigation(&mut state, KeyPress::PageDown);
    assert_eq!(state.current_page, 1);
    assert!(state.cursor_index < 5);
}

#[test]
fn paging_through_a_long_list() {
    let options: Vec<String> = (1..=25).map(|it| format!("Issue #{it}")).collect();
    // 8 rows leave 5 per page.
    let device = TestTerminal::new(vec![
        KeyPress::PageDown,
        KeyPress::PageDown,
        KeyPress::Ctrl('d'),
        KeyPress::PageUp,
        KeyPress::Down,
        KeyPress::Enter,
    ])
    .with_size(Size::new(140, 8));
    let mut it = PromptEngine::new(device, PromptConfig::default());

    let result = it.select_one("Issue", options, None);
    assert_eq!(result.unwrap(), "Issue #12");

    let output = it.device().output.get_plain_text();
    assert!(output.contains("Page 1 of 5"));
    assert!(output.contains("Page 4 of 5"));
    assert!(output.contains("PageDown/Ctrl+D next page"));
}

#[test]
fn ctrl_c_interrupts_in_filter_mode_too() {
    let mut keys = vec![KeyPress::Char('/')];
    keys.extend(typed("a"));
    keys.push(KeyPress::Ctrl('c'));

    let mut it = engine(keys);
    let result = it.select_one("Letters", ["Alpha", "Beta"], None);
    assert!(matches!(result, Err(PromptError::Interrupted)));
    assert!(!it.device().is_in_prompt_mode());
}

#[test]
fn running_out_of_keys_is_an_error() {
    let mut it = engine(vec![KeyPress::Down]);
    let result = it.select_many("Letters", ["Alpha", "Beta"], None);
    assert!(matches!(result, Err(PromptError::InputClosed)));
    assert!(!it.device().is_in_prompt_mode());
}

#[test]
fn every_row_is_padded_to_the_terminal_width() {
    let device = TestTerminal::new(vec![KeyPress::Enter]).with_size(Size::new(30, 10));
    let mut it = PromptEngine::new(device, PromptConfig::default());
    it.select_one("Column", ["Todo", "A rather long option that will not fit"], None)
        .unwrap();

    let output = it.device().output.get_plain_text();
    assert!(output.contains(&format!("{:<29}", "> Todo")));
    assert!(output.contains("  A rather long option that …"));
}
