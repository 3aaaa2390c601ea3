// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::io::{Result, Write};

use crossterm::{cursor::MoveTo,
                queue,
                style::{Attribute, Print, ResetColor, SetAttribute},
                terminal::{Clear, ClearType}};
use unicode_segmentation::UnicodeSegmentation as _;
use unicode_width::UnicodeWidthStr as _;

use crate::{apply_style,
            FunctionComponent,
            HowToChoose,
            PromptState,
            Size,
            Style,
            StyleSheet,
            DEVELOPMENT_MODE,
            ELLIPSIS,
            FILTER_ACTIVE_HINT,
            FILTER_PREFIX,
            IS_FOCUSED,
            IS_NOT_FOCUSED,
            MULTI_SELECT_IS_NOT_SELECTED,
            MULTI_SELECT_IS_SELECTED,
            NO_MATCHES,
            PAGINATION_HINT};

/// A run of text drawn in a single style.
pub type StyledSegment = (Style, String);

/// Draws the prompt: a header row, the visible page of options, and a page footer on the
/// last row of the terminal.
#[derive(Debug, Clone)]
pub struct SelectComponent {
    pub title: String,
    pub description: String,
    pub how_to_choose: HowToChoose,
    pub style: StyleSheet,
}

impl FunctionComponent<PromptState> for SelectComponent {
    fn render(
        &self,
        writer: &mut impl Write,
        state: &PromptState,
        viewport: Size,
    ) -> Result<()> {
        let max_width = row_width(viewport);
        let bounds = state.page_bounds();

        DEVELOPMENT_MODE.then(|| {
            tracing::debug!(
                message = "render",
                bounds = ?bounds,
                cursor_index = state.cursor_index,
                current_page = state.current_page,
                viewport = ?viewport
            );
        });

        let mut row: u16 = 0;

        // Header.
        paint_row(writer, row, &fit_to_width(self.header_segments(state), max_width))?;
        row += 1;

        // Options on the current page.
        if state.filtered_len() == 0 {
            let no_matches = vec![(
                self.style.no_matches_style,
                format!("{IS_NOT_FOCUSED}{NO_MATCHES}"),
            )];
            paint_row(writer, row, &fit_to_width(no_matches, max_width))?;
            row += 1;
        }
        for position in bounds {
            let Some(segments) = self.option_segments(state, position) else {
                continue;
            };
            paint_row(writer, row, &fit_to_width(segments, max_width))?;
            row += 1;
        }

        // Wipe whatever the previous (possibly longer) frame left below.
        queue!(writer, MoveTo(0, row), Clear(ClearType::FromCursorDown))?;

        // Footer.
        let total_pages = state.total_pages();
        if total_pages > 1 {
            let footer_row = viewport.row_count.saturating_sub(1).max(row);
            let footer = vec![(
                self.style.footer_style,
                format!("Page {} of {total_pages}", state.current_page + 1),
            )];
            paint_row(writer, footer_row, &fit_to_width(footer, max_width))?;
        }

        writer.flush()?;

        Ok(())
    }
}

impl SelectComponent {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        how_to_choose: HowToChoose,
        style: StyleSheet,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            how_to_choose,
            style,
        }
    }

    /// `Title /filter [hint]` while a filter is shown, `Title [description]` otherwise.
    #[must_use]
    pub fn header_segments(&self, state: &PromptState) -> Vec<StyledSegment> {
        let mut acc = vec![(self.style.title_style, self.title.clone())];
        if is_filter_shown(state) {
            acc.push((
                self.style.filter_style,
                format!("{FILTER_PREFIX}{}", state.filter_text),
            ));
        }
        acc.push((
            self.style.hint_style,
            format!(" [{}]", header_hint(&self.description, state)),
        ));
        acc
    }

    /// `None` when `position` is outside the filtered list.
    #[must_use]
    pub fn option_segments(
        &self,
        state: &PromptState,
        position: usize,
    ) -> Option<Vec<StyledSegment>> {
        let (option_index, text) = state.filtered_option(position)?;
        let is_focused = position == state.cursor_index;
        let cursor_glyph = if is_focused { IS_FOCUSED } else { IS_NOT_FOCUSED };

        let it = match self.how_to_choose {
            HowToChoose::Single => {
                let style = if is_focused {
                    self.style.focused_style
                } else {
                    self.style.normal_style
                };
                vec![(style, format!("{cursor_glyph}{text}"))]
            }
            HowToChoose::Multiple => {
                let cursor_style = if is_focused {
                    self.style.focused_style
                } else {
                    self.style.normal_style
                };
                let (checked_glyph, text_style) = if state.is_selected(option_index) {
                    (MULTI_SELECT_IS_SELECTED, self.style.selected_style)
                } else {
                    (MULTI_SELECT_IS_NOT_SELECTED, self.style.normal_style)
                };
                vec![
                    (cursor_style, cursor_glyph.to_string()),
                    (text_style, format!("{checked_glyph}{text}")),
                ]
            }
        };

        Some(it)
    }
}

/// The filter is shown while the user is typing it, and after it was accepted, until it
/// is reset.
#[must_use]
pub fn is_filter_shown(state: &PromptState) -> bool {
    state.is_filter_mode_active || !state.filter_text.is_empty()
}

/// The text between the brackets in the header row.
#[must_use]
pub fn header_hint(description: &str, state: &PromptState) -> String {
    if is_filter_shown(state) {
        FILTER_ACTIVE_HINT.to_string()
    } else if state.total_pages() > 1 {
        format!("{description}{PAGINATION_HINT}")
    } else {
        description.to_string()
    }
}

/// Rows stop one column short of the right edge so the terminal never wraps them.
#[must_use]
pub fn row_width(viewport: Size) -> usize {
    usize::from(viewport.col_count.saturating_sub(1)).max(1)
}

/// Clips the segments (by grapheme, measured in display columns) to `max_width`, putting
/// an ellipsis at the cut. Short rows get a trailing run of spaces.
#[must_use]
pub fn fit_to_width(segments: Vec<StyledSegment>, max_width: usize) -> Vec<StyledSegment> {
    let total_width: usize = segments.iter().map(|(_, it)| it.width()).sum();

    if total_width <= max_width {
        let mut acc = segments;
        let padding = max_width - total_width;
        if padding > 0 {
            acc.push((Style::default(), " ".repeat(padding)));
        }
        return acc;
    }

    let ellipsis_width = ELLIPSIS.width();
    let budget = max_width.saturating_sub(ellipsis_width);
    let mut used = 0;
    let mut acc: Vec<StyledSegment> = vec![];

    for (style, text) in segments {
        let mut clipped = String::new();
        let mut is_cut = false;
        for grapheme in text.graphemes(true) {
            let grapheme_width = grapheme.width();
            if used + grapheme_width > budget {
                is_cut = true;
                break;
            }
            used += grapheme_width;
            clipped.push_str(grapheme);
        }
        if is_cut {
            clipped.push_str(ELLIPSIS);
            used += ellipsis_width;
            acc.push((style, clipped));
            break;
        }
        acc.push((style, clipped));
    }

    // A wide grapheme that didn't fit can leave a one column gap.
    if used < max_width {
        acc.push((Style::default(), " ".repeat(max_width - used)));
    }

    acc
}

fn paint_row(writer: &mut impl Write, row: u16, segments: &[StyledSegment]) -> Result<()> {
    queue!(writer, MoveTo(0, row))?;
    for (style, text) in segments {
        queue!(
            writer,
            apply_style!(style => fg_color),
            apply_style!(style => intensity),
            Print(text),
        )?;
    }
    queue!(writer, ResetColor, SetAttribute(Attribute::Reset))?;
    Ok(())
}
