// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{enter_filter_mode,
            handle_filter_mode,
            handle_navigation,
            toggle_selection,
            FunctionComponent,
            KeyPress,
            PromptError,
            PromptResult,
            PromptState,
            SelectionRetention,
            TerminalDevice,
            DEVELOPMENT_MODE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventLoopResult<T> {
    Continue,
    ExitWithResult(T),
}

/// Runs one prompt session: render, read a key, hand it to `on_keypress`, repeat until
/// the handler produces a result.
///
/// The device is put into prompt mode first, and taken out of it again on every way out
/// of the loop. `Ctrl+C` is handled here, before `on_keypress` sees it, so no handler can
/// swallow it.
///
/// # Errors
///
/// - [`PromptError::Interrupted`] when the user presses `Ctrl+C`.
/// - [`PromptError::InputClosed`] when the device runs out of key presses.
/// - [`PromptError::Io`] when drawing or switching terminal modes fails.
pub fn enter_event_loop<D, C, T>(
    device: &mut D,
    state: &mut PromptState,
    function_component: &C,
    mut on_keypress: impl FnMut(&mut PromptState, KeyPress) -> EventLoopResult<T>,
) -> PromptResult<T>
where
    D: TerminalDevice,
    C: FunctionComponent<PromptState>,
{
    device.enter_prompt_mode()?;

    let loop_result = run_loop(device, state, function_component, &mut on_keypress);
    let leave_result = device.leave_prompt_mode();

    // The loop's own error is the more useful one to report.
    let it = loop_result?;
    leave_result?;
    Ok(it)
}

fn run_loop<D, C, T>(
    device: &mut D,
    state: &mut PromptState,
    function_component: &C,
    on_keypress: &mut impl FnMut(&mut PromptState, KeyPress) -> EventLoopResult<T>,
) -> PromptResult<T>
where
    D: TerminalDevice,
    C: FunctionComponent<PromptState>,
{
    loop {
        let viewport = device.size();
        function_component.render(device.output(), state, viewport)?;

        let Some(key_press) = device.read_key_press() else {
            return Err(PromptError::InputClosed);
        };

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(message = "key press", key_press = ?key_press);
        });

        if key_press.is_interrupt() {
            return Err(PromptError::Interrupted);
        }

        match on_keypress(state, key_press) {
            EventLoopResult::Continue => {}
            EventLoopResult::ExitWithResult(it) => return Ok(it),
        }
    }
}

/// Single select: `Enter` or `Space` picks the row under the cursor. Leaving filter mode
/// with exactly one match left picks that match.
pub fn single_select_keypress_handler(
    state: &mut PromptState,
    key_press: KeyPress,
) -> EventLoopResult<String> {
    if state.is_filter_mode_active {
        let transition = handle_filter_mode(state, key_press);
        if transition.exits_filter_mode() && state.filtered_len() == 1 {
            if let Some((_, it)) = state.filtered_option(0) {
                DEVELOPMENT_MODE.then(|| {
                    tracing::debug!(message = "fast accept", option = it);
                });
                return EventLoopResult::ExitWithResult(it.to_string());
            }
        }
        return EventLoopResult::Continue;
    }

    match key_press {
        KeyPress::Enter | KeyPress::Space => match state.option_at_cursor() {
            Some((_, it)) => EventLoopResult::ExitWithResult(it.to_string()),
            None => EventLoopResult::Continue,
        },
        KeyPress::Char('/') => {
            enter_filter_mode(state);
            EventLoopResult::Continue
        }
        KeyPress::Esc => {
            reset_committed_filter(state);
            EventLoopResult::Continue
        }
        _ => {
            handle_navigation(state, key_press);
            EventLoopResult::Continue
        }
    }
}

/// Multi select: `Space` toggles the row under the cursor, `Enter` returns everything
/// selected (possibly nothing), in the order the options were given.
pub fn multi_select_keypress_handler(
    state: &mut PromptState,
    key_press: KeyPress,
    selection_retention: SelectionRetention,
) -> EventLoopResult<Vec<String>> {
    if state.is_filter_mode_active {
        let transition = handle_filter_mode(state, key_press);
        if transition.exits_filter_mode()
            && selection_retention == SelectionRetention::ClearOnFilterExit
        {
            state.clear_selection();
        }
        return EventLoopResult::Continue;
    }

    match key_press {
        KeyPress::Enter => {
            let it = state.selected_options();
            DEVELOPMENT_MODE.then(|| {
                tracing::debug!(message = "confirm", selected = ?it);
            });
            EventLoopResult::ExitWithResult(it)
        }
        KeyPress::Space => {
            toggle_selection(state);
            EventLoopResult::Continue
        }
        KeyPress::Char('/') => {
            enter_filter_mode(state);
            EventLoopResult::Continue
        }
        KeyPress::Esc => {
            reset_committed_filter(state);
            EventLoopResult::Continue
        }
        _ => {
            handle_navigation(state, key_press);
            EventLoopResult::Continue
        }
    }
}

/// `Esc` while navigating drops a filter that was accepted earlier. Without one it does
/// nothing.
fn reset_committed_filter(state: &mut PromptState) {
    if !state.filter_text.is_empty() {
        state.reset_filter();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{HowToChoose, SelectComponent, StyleSheet, TestTerminal, SINGLE_SELECT_HINT};

    fn make_state(options: &[&str], page_size: usize) -> PromptState {
        PromptState::try_new(options.iter().map(ToString::to_string).collect(), page_size)
            .unwrap()
    }

    fn component() -> SelectComponent {
        SelectComponent::new("Pick", SINGLE_SELECT_HINT, HowToChoose::Single, StyleSheet::default())
    }

    fn chars(text: &str) -> Vec<KeyPress> { text.chars().map(KeyPress::Char).collect() }

    #[test]
    fn test_enter_pressed() {
        let mut device = TestTerminal::new(vec![KeyPress::Down, KeyPress::Down, KeyPress::Enter]);
        let mut state = make_state(&["a", "b", "c"], 10);

        let result =
            enter_event_loop(&mut device, &mut state, &component(), single_select_keypress_handler);

        assert_eq!(result.unwrap(), "c");
        assert_eq!((device.enter_count, device.leave_count), (1, 1));
        assert_eq!(device.key_press_reader.consumed(), 3);
    }

    #[test]
    fn test_ctrl_c_pressed() {
        let mut device = TestTerminal::new(vec![KeyPress::Down, KeyPress::Ctrl('c'), KeyPress::Enter]);
        let mut state = make_state(&["a", "b", "c"], 10);

        let result =
            enter_event_loop(&mut device, &mut state, &component(), single_select_keypress_handler);

        assert!(matches!(result, Err(PromptError::Interrupted)));
        assert!(!device.is_in_prompt_mode());
        assert_eq!(device.key_press_reader.consumed(), 2);
    }

    #[test]
    fn test_input_closed() {
        let mut device = TestTerminal::new(vec![KeyPress::Down]);
        let mut state = make_state(&["a", "b"], 10);

        let result =
            enter_event_loop(&mut device, &mut state, &component(), single_select_keypress_handler);

        assert!(matches!(result, Err(PromptError::InputClosed)));
        assert_eq!((device.enter_count, device.leave_count), (1, 1));
    }

    #[test]
    fn test_single_select_space_picks_and_slash_filters() {
        let mut state = make_state(&["Alpha", "Beta"], 10);
        assert_eq!(
            single_select_keypress_handler(&mut state, KeyPress::Char('/')),
            EventLoopResult::Continue
        );
        assert!(state.is_filter_mode_active);

        // Space is typed into the filter, not used to pick.
        assert_eq!(
            single_select_keypress_handler(&mut state, KeyPress::Space),
            EventLoopResult::Continue
        );
        assert_eq!(state.filter_text, " ");
        assert_eq!(state.filtered_len(), 0);

        // Leaving filter mode with no matches does not pick anything.
        assert_eq!(
            single_select_keypress_handler(&mut state, KeyPress::Enter),
            EventLoopResult::Continue
        );
        // And Enter on an empty list is ignored.
        assert_eq!(
            single_select_keypress_handler(&mut state, KeyPress::Enter),
            EventLoopResult::Continue
        );

        // Esc while navigating resets the accepted filter.
        single_select_keypress_handler(&mut state, KeyPress::Esc);
        assert_eq!(state.filtered_len(), 2);
        assert_eq!(
            single_select_keypress_handler(&mut state, KeyPress::Space),
            EventLoopResult::ExitWithResult("Alpha".to_string())
        );
    }

    #[test]
    fn test_single_select_fast_accept_on_esc() {
        // Esc discards the filter, which restores the full list. A one option list is
        // picked right away.
        let mut state = make_state(&["Only"], 10);
        single_select_keypress_handler(&mut state, KeyPress::Char('/'));
        assert_eq!(
            single_select_keypress_handler(&mut state, KeyPress::Esc),
            EventLoopResult::ExitWithResult("Only".to_string())
        );
    }

    #[test]
    fn test_single_select_commit_with_many_matches_keeps_going() {
        let mut state = make_state(&["Alpha", "alphabet", "Beta"], 10);
        let mut keys = vec![KeyPress::Char('/')];
        keys.extend(chars("alp"));
        keys.push(KeyPress::Enter);
        for key_press in keys {
            assert_eq!(
                single_select_keypress_handler(&mut state, key_press),
                EventLoopResult::Continue
            );
        }
        assert!(!state.is_filter_mode_active);
        assert_eq!(state.filtered_indices, vec![0, 1]);

        handle_navigation(&mut state, KeyPress::Char('j'));
        assert_eq!(
            single_select_keypress_handler(&mut state, KeyPress::Enter),
            EventLoopResult::ExitWithResult("alphabet".to_string())
        );
    }

    #[test]
    fn test_multi_select_keeps_selection_across_filters() {
        let mut state = make_state(&["Alpha", "Beta", "Gamma"], 10);
        let mut keys = vec![KeyPress::Space, KeyPress::Char('/')];
        keys.extend(chars("gam"));
        keys.extend([KeyPress::Enter, KeyPress::Space]);
        for key_press in keys {
            multi_select_keypress_handler(&mut state, key_press, SelectionRetention::Keep);
        }
        assert_eq!(state.filter_text, "gam");
        assert_eq!(
            multi_select_keypress_handler(&mut state, KeyPress::Enter, SelectionRetention::Keep),
            EventLoopResult::ExitWithResult(vec!["Alpha".to_string(), "Gamma".to_string()])
        );
    }

    #[test]
    fn test_multi_select_clear_on_filter_exit() {
        let retention = SelectionRetention::ClearOnFilterExit;
        let mut state = make_state(&["Alpha", "Beta", "Gamma"], 10);
        let mut keys = vec![KeyPress::Space, KeyPress::Char('/')];
        keys.extend(chars("gam"));
        keys.push(KeyPress::Esc);
        for key_press in keys {
            multi_select_keypress_handler(&mut state, key_press, retention);
        }
        assert!(state.selected.is_empty());
        assert_eq!(
            multi_select_keypress_handler(&mut state, KeyPress::Enter, retention),
            EventLoopResult::ExitWithResult(vec![])
        );
    }

    #[test]
    fn test_multi_select_navigation_letters() {
        let mut state = make_state(&["Alpha", "Beta", "Gamma"], 10);
        multi_select_keypress_handler(&mut state, KeyPress::Char('k'), SelectionRetention::Keep);
        assert_eq!(state.cursor_index, 2);
        multi_select_keypress_handler(&mut state, KeyPress::Char('j'), SelectionRetention::Keep);
        assert_eq!(state.cursor_index, 0);
    }
}
