// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{enter_event_loop,
            multi_select_keypress_handler,
            single_select_keypress_handler,
            CrosstermTerminal,
            HowToChoose,
            PromptConfig,
            PromptResult,
            PromptState,
            SelectComponent,
            TerminalDevice};

/// Runs prompts against one terminal device. Each `select_*` call is an independent
/// session with its own [`PromptState`].
#[derive(Debug)]
pub struct PromptEngine<D: TerminalDevice> {
    device: D,
    config: PromptConfig,
}

impl<D: TerminalDevice> PromptEngine<D> {
    #[must_use]
    pub fn new(device: D, config: PromptConfig) -> Self { Self { device, config } }

    #[must_use]
    pub fn device(&self) -> &D { &self.device }

    #[must_use]
    pub fn config(&self) -> &PromptConfig { &self.config }

    #[must_use]
    pub fn into_device(self) -> D { self.device }

    /// Let the user pick exactly one of `options`.
    ///
    /// # Errors
    ///
    /// - [`PromptError::EmptyOptions`](crate::PromptError::EmptyOptions) if there is
    ///   nothing to pick, checked before the terminal is touched.
    /// - [`PromptError::Interrupted`](crate::PromptError::Interrupted) on `Ctrl+C`.
    /// - [`PromptError::InputClosed`](crate::PromptError::InputClosed) or
    ///   [`PromptError::Io`](crate::PromptError::Io) if the terminal goes away.
    pub fn select_one<I, S>(
        &mut self,
        title: &str,
        options: I,
        maybe_description: Option<&str>,
    ) -> PromptResult<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (mut state, component) =
            self.prepare(title, options, maybe_description, HowToChoose::Single)?;

        let it = enter_event_loop(
            &mut self.device,
            &mut state,
            &component,
            single_select_keypress_handler,
        );

        tracing::debug!(message = "select_one", title = title, result = ?it);
        it
    }

    /// Let the user pick any number of `options`, including none. The result keeps the
    /// order of `options`, whatever order they were picked in.
    ///
    /// # Errors
    ///
    /// Same as [`select_one`](Self::select_one).
    pub fn select_many<I, S>(
        &mut self,
        title: &str,
        options: I,
        maybe_description: Option<&str>,
    ) -> PromptResult<Vec<String>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (mut state, component) =
            self.prepare(title, options, maybe_description, HowToChoose::Multiple)?;
        let selection_retention = self.config.selection_retention;

        let it = enter_event_loop(
            &mut self.device,
            &mut state,
            &component,
            |state, key_press| {
                multi_select_keypress_handler(state, key_press, selection_retention)
            },
        );

        tracing::debug!(message = "select_many", title = title, result = ?it);
        it
    }

    /// The page size is worked out once, here, from the size of the terminal when the
    /// prompt starts.
    fn prepare<I, S>(
        &self,
        title: &str,
        options: I,
        maybe_description: Option<&str>,
        how_to_choose: HowToChoose,
    ) -> PromptResult<(PromptState, SelectComponent)>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let all_options = options.into_iter().map(Into::into).collect::<Vec<String>>();
        let page_size = self.config.page_size_for(self.device.size());
        let state = PromptState::try_new(all_options, page_size)?;

        let description = maybe_description
            .unwrap_or_else(|| self.config.default_description(how_to_choose));
        let component = SelectComponent::new(
            title,
            description,
            how_to_choose,
            self.config.style_sheet(),
        );

        Ok((state, component))
    }
}

/// Single select on the real terminal, with the config file settings.
///
/// # Errors
///
/// See [`PromptEngine::select_one`]. Also fails if the config file is invalid.
pub fn select_one<I, S>(
    title: &str,
    options: I,
    maybe_description: Option<&str>,
) -> PromptResult<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = PromptConfig::try_load(None)?;
    PromptEngine::new(CrosstermTerminal::default(), config).select_one(
        title,
        options,
        maybe_description,
    )
}

/// Multi select on the real terminal, with the config file settings.
///
/// # Errors
///
/// See [`PromptEngine::select_many`]. Also fails if the config file is invalid.
pub fn select_many<I, S>(
    title: &str,
    options: I,
    maybe_description: Option<&str>,
) -> PromptResult<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let config = PromptConfig::try_load(None)?;
    PromptEngine::new(CrosstermTerminal::default(), config).select_many(
        title,
        options,
        maybe_description,
    )
}
