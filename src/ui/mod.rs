//! UI components for the TUI
//!
//! This module contains the reusable selector widget and its color palette.
//! The event loop that drives the widget lives in the `tui` module.

pub mod colors;
mod components;

pub use components::model_selector::Widget as ModelSelectorWidget;
