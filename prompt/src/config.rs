// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter},
          fs,
          io::ErrorKind,
          path::{Path, PathBuf}};

use dirs::config_dir;
use serde::Deserialize;

use crate::{HowToChoose,
            PromptError,
            PromptResult,
            SelectionRetention,
            Size,
            StyleSheet,
            Theme,
            DEVELOPMENT_MODE,
            MULTI_SELECT_HINT,
            SINGLE_SELECT_HINT};

/// Settings shared by every prompt an engine runs. Every field is optional in the file.
///
/// ```toml
/// page_size = 10
/// selection_retention = "clear-on-filter-exit"
/// theme = "monochrome"
/// single_description = "Pick one"
/// multi_description = "Pick any"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
    /// Options per page. When not set, it is the terminal height minus the header and
    /// footer rows.
    pub page_size: Option<usize>,
    pub selection_retention: SelectionRetention,
    pub theme: Theme,
    pub single_description: Option<String>,
    pub multi_description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPaths {
    TopLevelFolderName,
    ConfigFile,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "pim",
            ConfigPaths::ConfigFile => "config.toml",
        };
        write!(f, "{path}")
    }
}

/// This is where the config folder is, eg `~/.config/pim` on Linux.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::TopLevelFolderName.to_string()))
}

/// This is where the config file is, eg `~/.config/pim/config.toml` on Linux.
#[must_use]
pub fn try_get_config_file_path() -> Option<PathBuf> {
    Some(try_get_config_folder_path()?.join(ConfigPaths::ConfigFile.to_string()))
}

impl PromptConfig {
    /// Load from `maybe_path`, or from the default location when that is `None`. A
    /// missing file (or no config folder at all) means the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Config`] when the file exists but can't be read or parsed.
    pub fn try_load(maybe_path: Option<&Path>) -> PromptResult<Self> {
        let Some(path) = maybe_path.map(Path::to_path_buf).or_else(try_get_config_file_path)
        else {
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(content) => {
                let it = Self::try_parse(&content, &path)?;
                DEVELOPMENT_MODE.then(|| {
                    // % is Display, ? is Debug.
                    tracing::debug!(
                        message = "Loaded config file.",
                        path = %path.display(),
                        config = ?it
                    );
                });
                Ok(it)
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(error) => Err(PromptError::Config {
                path,
                reason: error.to_string(),
            }),
        }
    }

    /// # Errors
    ///
    /// Returns [`PromptError::Config`] when `content` is not valid for this struct.
    pub fn try_parse(content: &str, path: &Path) -> PromptResult<Self> {
        toml::from_str(content).map_err(|error| PromptError::Config {
            path: path.to_path_buf(),
            reason: error.message().to_string(),
        })
    }

    /// The configured page size, or what fits in `viewport`. Never zero, and never more
    /// rows than `viewport` has room for.
    #[must_use]
    pub fn page_size_for(&self, viewport: Size) -> usize {
        let fits = viewport.page_size();
        match self.page_size {
            Some(it) => it.clamp(1, fits),
            None => fits,
        }
    }

    /// The configured theme, unless `NO_COLOR` says otherwise.
    #[must_use]
    pub fn style_sheet(&self) -> StyleSheet { self.theme.resolve().style_sheet() }

    /// The hint shown in the header when the caller did not pass a description.
    #[must_use]
    pub fn default_description(&self, how_to_choose: HowToChoose) -> &str {
        match how_to_choose {
            HowToChoose::Single => {
                self.single_description.as_deref().unwrap_or(SINGLE_SELECT_HINT)
            }
            HowToChoose::Multiple => {
                self.multi_description.as_deref().unwrap_or(MULTI_SELECT_HINT)
            }
        }
    }
}
