// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

/// Everything that can stop a prompt from producing a choice.
///
/// The state machine itself never fails. These come from the edges: the caller passing
/// nothing to choose from, the user bailing out, the terminal going away, or a bad
/// config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum PromptError {
    #[error("There are no options to choose from")]
    #[diagnostic(
        code(pim_prompt::empty_options),
        help("Pass at least one option to the prompt")
    )]
    EmptyOptions,

    /// The user pressed `Ctrl+C`. Raw mode swallows `SIGINT`, so this is reported as a
    /// value instead.
    #[error("The prompt was interrupted")]
    #[diagnostic(code(pim_prompt::interrupted))]
    Interrupted,

    #[error("The key press input source was closed before a choice was made")]
    #[diagnostic(
        code(pim_prompt::input_closed),
        help("Make sure the prompt is run from an interactive terminal")
    )]
    InputClosed,

    #[error("Terminal I/O failed")]
    #[diagnostic(code(pim_prompt::io))]
    Io(#[from] std::io::Error),

    #[error("Could not load config file {}: {reason}", .path.display())]
    #[diagnostic(
        code(pim_prompt::config),
        help("Check the file for typos, or remove it to use the defaults")
    )]
    Config { path: PathBuf, reason: String },
}

pub type PromptResult<T> = Result<T, PromptError>;
