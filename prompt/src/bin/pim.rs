// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::{stdin, BufRead as _},
          path::PathBuf,
          process::ExitCode};

use clap::Parser;
use miette::IntoDiagnostic as _;
use pim_prompt::{is_stdin_piped,
                 is_stdout_piped,
                 try_initialize_logging_global,
                 CrosstermTerminal,
                 HowToChoose,
                 PromptConfig,
                 PromptEngine,
                 PromptError,
                 SelectionRetention,
                 StdinIsPipedResult,
                 StdoutIsPipedResult,
                 Theme,
                 TracingConfig};

/// Exit code for a prompt cancelled with `Ctrl+C`, the same as a shell uses for `SIGINT`.
const EXIT_CODE_INTERRUPTED: u8 = 130;

#[derive(Debug, Parser)]
#[command(bin_name = "pim")]
#[command(
    about = "Pick one or more items from a list, with filtering and paging 🔍",
    long_about = None
)]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
struct CliArgs {
    /// Pick exactly one item, or any number of them
    #[arg(value_name = "mode")]
    how_to_choose: HowToChoose,

    /// Items to pick from. When there are none, they are read from stdin, one per line
    #[arg(value_name = "items")]
    items: Vec<String>,

    /// Shown at the start of the header row
    #[arg(long, short = 't', default_value = "Choose")]
    title: String,

    /// Replaces the key hint shown after the title
    #[arg(long, short = 'd')]
    description: Option<String>,

    /// Options per page. Defaults to, and is capped at, what fits in the terminal
    #[arg(long, short = 'p')]
    page_size: Option<usize>,

    /// Color theme. `NO_COLOR` always forces monochrome
    #[arg(long, value_name = "theme")]
    theme: Option<Theme>,

    /// Multi select: forget the selection every time filter mode is left
    #[arg(long)]
    clear_selection_on_filter: bool,

    /// Config file to use instead of the default one
    #[arg(long, short = 'c', value_name = "path")]
    config: Option<PathBuf>,

    /// Write debug logs to `pim.log` in the current folder
    #[arg(long, short = 'l')]
    log: bool,

    /// Write debug logs to this file. Implies `--log`
    #[arg(long, value_name = "path")]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CliArgs` struct.
    let cli_args = CliArgs::parse();

    match run(cli_args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(report) => {
            let exit_code = match report.downcast_ref::<PromptError>() {
                Some(PromptError::Interrupted) => EXIT_CODE_INTERRUPTED,
                _ => 1,
            };
            eprintln!("{report:?}");
            ExitCode::from(exit_code)
        }
    }
}

fn run(cli_args: CliArgs) -> miette::Result<()> {
    let tracing_config = if cli_args.log || cli_args.log_file.is_some() {
        TracingConfig::new_file(cli_args.log_file.clone())
    } else {
        TracingConfig::default()
    };
    try_initialize_logging_global(&tracing_config)?;

    tracing::debug!(message = "cli_args", cli_args = ?cli_args);
    if let StdoutIsPipedResult::StdoutIsPiped = is_stdout_piped() {
        tracing::debug!(message = "stdout is piped, selections go to the pipe");
    }

    let items = if cli_args.items.is_empty() {
        read_items_from_stdin()?
    } else {
        cli_args.items.clone()
    };

    let config = apply_overrides(PromptConfig::try_load(cli_args.config.as_deref())?, &cli_args);
    let mut engine = PromptEngine::new(CrosstermTerminal::default(), config);
    let description = cli_args.description.as_deref();

    let selected_items = match cli_args.how_to_choose {
        HowToChoose::Single => vec![engine.select_one(&cli_args.title, items, description)?],
        HowToChoose::Multiple => engine.select_many(&cli_args.title, items, description)?,
    };

    tracing::debug!(message = "selected_items", selected_items = ?selected_items);

    for selected_item in selected_items {
        println!("{selected_item}");
    }

    Ok(())
}

/// Flags win over the config file.
fn apply_overrides(mut config: PromptConfig, cli_args: &CliArgs) -> PromptConfig {
    if let Some(page_size) = cli_args.page_size {
        config.page_size = Some(page_size);
    }
    if let Some(theme) = cli_args.theme {
        config.theme = theme;
    }
    if cli_args.clear_selection_on_filter {
        config.selection_retention = SelectionRetention::ClearOnFilterExit;
    }
    config
}

/// Blank lines are dropped. Nothing is read when stdin is a terminal, since that would
/// block waiting for the user to type the list.
fn read_items_from_stdin() -> miette::Result<Vec<String>> {
    if let StdinIsPipedResult::StdinIsNotPiped = is_stdin_piped() {
        return Ok(vec![]);
    }

    // macOS can't read key presses from the tty when stdin is a pipe.
    // https://github.com/crossterm-rs/crossterm/issues/396
    if cfg!(target_os = "macos") {
        miette::bail!(
            "Piping items into pim does not work on macOS yet. Pass them as arguments instead."
        );
    }

    let mut acc = vec![];
    for line in stdin().lock().lines() {
        let line = line.into_diagnostic()?;
        if !line.trim().is_empty() {
            acc.push(line);
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_args_are_valid() { CliArgs::command().debug_assert(); }

    #[test]
    fn test_parse_items_and_flags() {
        let it = CliArgs::try_parse_from([
            "pim",
            "multiple",
            "--title",
            "Labels",
            "--page-size",
            "4",
            "--theme",
            "monochrome",
            "--clear-selection-on-filter",
            "bug",
            "docs",
        ])
        .unwrap();
        assert_eq!(it.how_to_choose, HowToChoose::Multiple);
        assert_eq!(it.items, vec!["bug", "docs"]);

        let config = apply_overrides(PromptConfig::default(), &it);
        assert_eq!(config.page_size, Some(4));
        assert_eq!(config.theme, Theme::Monochrome);
        assert_eq!(config.selection_retention, SelectionRetention::ClearOnFilterExit);
    }

    #[test]
    fn test_flags_do_not_clobber_config_when_absent() {
        let it = CliArgs::try_parse_from(["pim", "single", "a"]).unwrap();
        let file_config = PromptConfig {
            page_size: Some(9),
            theme: Theme::Monochrome,
            ..Default::default()
        };
        let config = apply_overrides(file_config.clone(), &it);
        assert_eq!(config, file_config);
        assert_eq!(it.title, "Choose");
    }

    #[test]
    fn test_mode_is_required() {
        assert!(CliArgs::try_parse_from(["pim", "sideways"]).is_err());
    }
}
