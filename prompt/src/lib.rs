// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # pim_prompt
//!
//! Interactive list prompts for command line apps. You give the prompt a title and a
//! list of options, and the user picks one ([`select_one`]) or many ([`select_many`])
//! of them using the keyboard:
//!
//! | Key                      | Navigating                        | Filtering               |
//! | ------------------------ | --------------------------------- | ----------------------- |
//! | `↑` / `k`, `↓` / `j`     | Move the cursor (wraps around)    | `j` and `k` are typed   |
//! | `PageUp` / `Ctrl+U`      | Previous page                     |                         |
//! | `PageDown` / `Ctrl+D`    | Next page                         |                         |
//! | `/`                      | Start typing a filter             | Typed                   |
//! | `Space`                  | Choose (single), toggle (multi)   | Typed                   |
//! | `Enter`                  | Choose (single), confirm (multi)  | Accept filter           |
//! | `Esc`                    | Reset an accepted filter          | Discard filter          |
//! | `Backspace`              |                                   | Delete last character   |
//! | `Ctrl+C`                 | Interrupt                         | Interrupt               |
//!
//! Filtering is a case insensitive substring match against the full option list. When a
//! single select filter is accepted and exactly one option matches, that option is
//! returned right away.
//!
//! The prompt takes over the terminal (alternate screen, raw mode) for its lifetime and
//! pages the options to fit the window height that was measured when it started.
//!
//! ```no_run
//! use pim_prompt::{PromptConfig, PromptEngine, CrosstermTerminal};
//!
//! fn main() -> miette::Result<()> {
//!     let mut engine = PromptEngine::new(CrosstermTerminal::default(), PromptConfig::default());
//!     let column = engine.select_one(
//!         "Which column would you like to move the issue(s) to?",
//!         ["Todo", "In Progress", "Done"],
//!         None,
//!     )?;
//!     println!("Moving to {column}");
//!     Ok(())
//! }
//! ```
//!
//! # Testing without a terminal
//!
//! Everything that touches the terminal goes through [`TerminalDevice`]. The
//! [`TestTerminal`] implementation replays a scripted list of [`KeyPress`]es and
//! captures the rendered output, so whole prompt sessions can be driven from unit
//! tests.
//!
//! ```
//! use pim_prompt::{KeyPress, PromptConfig, PromptEngine, TestTerminal};
//!
//! let terminal = TestTerminal::new(vec![KeyPress::Down, KeyPress::Enter]);
//! let mut engine = PromptEngine::new(terminal, PromptConfig::default());
//! let it = engine.select_one("Status", ["Todo", "In Progress", "Done"], None).unwrap();
//! assert_eq!(it, "In Progress");
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod components;
pub mod config;
pub mod constants;
pub mod error;
pub mod event_loop;
pub mod function_component;
pub mod input_handler;
pub mod key_press;
pub mod key_press_reader;
pub mod log;
pub mod public_api;
pub mod state;
pub mod term;
pub mod terminal_device;
pub mod test_utils;

// Re-export.
pub use components::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use event_loop::*;
pub use function_component::*;
pub use input_handler::*;
pub use key_press::*;
pub use key_press_reader::*;
pub use log::*;
pub use public_api::*;
pub use state::*;
pub use term::*;
pub use terminal_device::*;
pub use test_utils::*;

/// Turns on the per frame trace logs. You can use `tail -f` on the log file to watch
/// them.
pub const DEVELOPMENT_MODE: bool = false;
