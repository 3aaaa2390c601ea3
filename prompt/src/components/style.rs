// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::env;

use clap::ValueEnum;
use crossterm::style::Color;
use serde::Deserialize;
use strum_macros::{Display, EnumString};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// `None` leaves the terminal's own foreground color alone.
    pub color_fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyleSheet {
    pub title_style: Style,
    pub hint_style: Style,
    pub filter_style: Style,
    pub normal_style: Style,
    pub focused_style: Style,
    pub selected_style: Style,
    pub no_matches_style: Style,
    pub footer_style: Style,
}

impl Default for StyleSheet {
    fn default() -> Self {
        let normal_style = Style::default();
        let title_style = Style {
            color_fg: Some(Color::White),
            bold: true,
            ..Style::default()
        };
        let hint_style = Style {
            color_fg: Some(Color::Blue),
            ..Style::default()
        };
        let filter_style = Style {
            color_fg: Some(Color::Yellow),
            bold: true,
            ..Style::default()
        };
        let focused_style = Style {
            color_fg: Some(Color::Green),
            bold: true,
            ..Style::default()
        };
        let selected_style = Style {
            color_fg: Some(Color::Green),
            ..Style::default()
        };
        let no_matches_style = Style {
            dim: true,
            ..Style::default()
        };
        let footer_style = Style {
            color_fg: Some(Color::Blue),
            ..Style::default()
        };
        StyleSheet {
            title_style,
            hint_style,
            filter_style,
            normal_style,
            focused_style,
            selected_style,
            no_matches_style,
            footer_style,
        }
    }
}

impl StyleSheet {
    /// No colors at all. The focused row is told apart by weight only.
    #[must_use]
    pub fn monochrome_style() -> Self {
        let bold = Style {
            bold: true,
            ..Style::default()
        };
        let dim = Style {
            dim: true,
            ..Style::default()
        };
        StyleSheet {
            title_style: bold,
            hint_style: Style::default(),
            filter_style: bold,
            normal_style: Style::default(),
            focused_style: bold,
            selected_style: Style::default(),
            no_matches_style: dim,
            footer_style: Style::default(),
        }
    }
}

#[derive(
    Copy,
    Clone,
    Debug,
    Default,
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
pub enum Theme {
    #[default]
    Default,
    Monochrome,
}

impl Theme {
    /// `NO_COLOR` (set to anything but `0`) wins over whatever was configured.
    /// <https://no-color.org/>
    #[must_use]
    pub fn resolve(self) -> Self {
        if env_no_color() {
            Theme::Monochrome
        } else {
            self
        }
    }

    #[must_use]
    pub fn style_sheet(self) -> StyleSheet {
        match self {
            Theme::Default => StyleSheet::default(),
            Theme::Monochrome => StyleSheet::monochrome_style(),
        }
    }
}

#[must_use]
pub fn env_no_color() -> bool {
    match env::var("NO_COLOR").as_deref() {
        Ok("0") | Err(_) => false,
        Ok(_) => true,
    }
}
