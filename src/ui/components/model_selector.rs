//! Model selector widget
//!
//! Renders a labeled dropdown over the fetched model list. The widget is
//! fully controlled: the current value and the clearable flag come from the
//! caller on every render, and the widget draws whatever it is given.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::WorkflowModel;
use crate::state::SelectorState;
use crate::ui::colors;

/// Help text shown next to the label.
const HELP_TEXT: &str = "The LLM model to use for this block";

/// Key hint footer shown while the dropdown is open.
const OPEN_HINTS: &str = "↑/↓ select • Enter confirm • Esc cancel";

/// Key hint footer shown while the dropdown is closed.
const CLOSED_HINTS: &str = "Enter open";

/// Widget for the model selector dropdown
#[derive(Debug)]
pub struct Widget<'a> {
    state: &'a SelectorState,
    value: Option<&'a WorkflowModel>,
    clearable: bool,
    label: String,
    placeholder: String,
}

impl<'a> Widget<'a> {
    /// Create a selector widget over the given view state.
    #[must_use]
    pub fn new(state: &'a SelectorState) -> Self {
        Self {
            state,
            value: None,
            clearable: true,
            label: "Model".to_string(),
            placeholder: "Default (optimized)".to_string(),
        }
    }

    /// Set the caller-owned current selection.
    #[must_use]
    pub const fn value(mut self, value: Option<&'a WorkflowModel>) -> Self {
        self.value = value;
        self
    }

    /// Control whether the clear affordance is shown for a selected value.
    #[must_use]
    pub const fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Override the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Override the placeholder shown while no model is selected.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Whether the clear affordance is rendered for the current inputs.
    #[must_use]
    pub const fn shows_clear(&self) -> bool {
        self.clearable && self.value.is_some()
    }

    /// Convert to a bordered Paragraph widget.
    #[must_use]
    pub fn to_paragraph(&self) -> Paragraph<'_> {
        let mut lines = vec![self.label_line(), self.trigger_line(), Line::from("")];

        if self.state.open {
            lines.extend(self.option_lines());
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            if self.state.open {
                OPEN_HINTS
            } else {
                CLOSED_HINTS
            },
            Style::default().fg(colors::TEXT_MUTED),
        )));

        Paragraph::new(lines).block(
            Block::default()
                .title(format!(" {} ", self.label))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER)),
        )
    }

    /// Label row with the help text (the tooltip analog).
    fn label_line(&self) -> Line<'_> {
        Line::from(vec![
            Span::styled(
                self.label.clone(),
                Style::default()
                    .fg(colors::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(HELP_TEXT, Style::default().fg(colors::TEXT_MUTED)),
        ])
    }

    /// Trigger row: current value or placeholder, plus the clear affordance.
    fn trigger_line(&self) -> Line<'_> {
        let mut spans = vec![Span::styled(
            "▾ ",
            Style::default().fg(colors::TEXT_DIM),
        )];

        match self.value {
            Some(value) => spans.push(Span::styled(
                value.model.clone(),
                Style::default()
                    .fg(colors::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            None => spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(colors::TEXT_MUTED),
            )),
        }

        if self.shows_clear() {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                "× clear",
                Style::default().fg(colors::ACCENT_NEGATIVE),
            ));
        }

        Line::from(spans)
    }

    /// One row per fetched option. Zero rows while the fetch is outstanding.
    fn option_lines(&self) -> Vec<Line<'_>> {
        let models = self.state.models();

        if self.state.is_loading() {
            return Vec::new();
        }

        if models.is_empty() {
            return vec![Line::from(Span::styled(
                "No models available",
                Style::default().fg(colors::TEXT_MUTED),
            ))];
        }

        models
            .iter()
            .enumerate()
            .map(|(idx, model)| {
                let is_cursor = idx == self.state.highlighted;
                let is_current = self.value.is_some_and(|v| v.model == *model);

                let row_style = if is_cursor {
                    Style::default()
                        .fg(colors::TEXT_PRIMARY)
                        .bg(colors::SURFACE_HIGHLIGHT)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(colors::TEXT_PRIMARY)
                };

                let cursor = if is_cursor { "▶ " } else { "  " };
                let check = if is_current { "✓ " } else { "  " };

                Line::from(Span::styled(format!("{cursor}{check}{model}"), row_style))
            })
            .collect()
    }
}
