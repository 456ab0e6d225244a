//! Selector view state.
//!
//! Holds the fetched option list and the ephemeral dropdown state (open flag
//! and highlight cursor). The current selection is deliberately absent: the
//! selector is fully controlled, so the value lives with the caller and only
//! flows through at render and key-handling time.

use crate::model::WorkflowModel;

/// Lifecycle of the available-models list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Options {
    /// The fetch has not resolved yet.
    #[default]
    Loading,
    /// The fetch resolved; the list may be empty.
    Ready(Vec<String>),
}

/// View state for the model selector dropdown.
#[derive(Debug, Default)]
pub struct SelectorState {
    /// Fetched option list.
    pub options: Options,

    /// Whether the dropdown list is open.
    pub open: bool,

    /// Highlight cursor into the option list while open.
    pub highlighted: usize,
}

impl SelectorState {
    /// Create a fresh selector state in the loading phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            options: Options::Loading,
            open: false,
            highlighted: 0,
        }
    }

    /// Whether the model list fetch is still outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.options, Options::Loading)
    }

    /// The selectable model identifiers. Empty while loading.
    #[must_use]
    pub fn models(&self) -> &[String] {
        match self.options {
            Options::Loading => &[],
            Options::Ready(ref models) => models,
        }
    }

    /// Install the fetched model list, in backend order.
    ///
    /// The highlight cursor is clamped so it stays valid if the list shrank.
    pub fn set_models(&mut self, models: Vec<String>) {
        self.highlighted = self.highlighted.min(models.len().saturating_sub(1));
        self.options = Options::Ready(models);
    }

    /// Open the dropdown with the current value highlighted, if present.
    ///
    /// A value not in the fetched list is tolerated: the cursor stays at the
    /// top and nothing is marked current.
    pub fn open(&mut self, value: Option<&WorkflowModel>) {
        self.highlighted = value
            .and_then(|v| self.models().iter().position(|m| *m == v.model))
            .unwrap_or(0);
        self.open = true;
    }

    /// Close the dropdown without changing the selection.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Move the highlight cursor down, wrapping at the end.
    pub fn select_next(&mut self) {
        let count = self.models().len();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    /// Move the highlight cursor up, wrapping at the top.
    pub fn select_prev(&mut self) {
        let count = self.models().len();
        if count > 0 {
            self.highlighted = self.highlighted.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// The model identifier under the highlight cursor.
    #[must_use]
    pub fn highlighted_model(&self) -> Option<&str> {
        self.models().get(self.highlighted).map(String::as_str)
    }
}
