//! Modelpick - Terminal model selector for workflow editors
//!
//! Modelpick renders a labeled dropdown over the model identifiers a workflow
//! backend exposes at `GET /models`, and reports the user's pick (or a
//! cleared selection) back to the caller. The selection is fully controlled:
//! the widget never owns the value, it only draws it and emits change events.

pub mod api;
pub mod config;
pub mod fetch;
pub mod input;
pub mod model;
pub mod state;
pub mod tui;
pub mod ui;

pub use api::ApiClient;
pub use config::Config;
pub use input::SelectorEvent;
pub use model::{ModelsResponse, WorkflowModel};
pub use state::SelectorState;
