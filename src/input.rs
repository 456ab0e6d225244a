//! Key handling for the model selector.
//!
//! The selector reports selection changes through [`SelectorEvent`]; it never
//! mutates the selection itself. Every keypress yields at most one event.

use ratatui::crossterm::event::KeyCode;

use crate::model::WorkflowModel;
use crate::state::SelectorState;

/// Output event channel of the selector (the `onChange` analog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorEvent {
    /// The user picked a model (`Some`) or cleared the selection (`None`).
    Changed(Option<WorkflowModel>),
}

/// Handle one key event for the selector.
///
/// `value` is the caller-owned current selection and `clearable` controls
/// whether the clear affordance is active. Returns the resulting event, if
/// the keypress produced one.
pub fn handle_key(
    state: &mut SelectorState,
    value: Option<&WorkflowModel>,
    clearable: bool,
    code: KeyCode,
) -> Option<SelectorEvent> {
    if state.open {
        handle_open(state, code)
    } else {
        handle_closed(state, value, clearable, code)
    }
}

fn handle_closed(
    state: &mut SelectorState,
    value: Option<&WorkflowModel>,
    clearable: bool,
    code: KeyCode,
) -> Option<SelectorEvent> {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            state.open(value);
            None
        }
        KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
            if clearable && value.is_some() {
                Some(SelectorEvent::Changed(None))
            } else {
                None
            }
        }
        _ => None,
    }
}

fn handle_open(state: &mut SelectorState, code: KeyCode) -> Option<SelectorEvent> {
    match code {
        KeyCode::Esc => {
            state.close();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.select_prev();
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.select_next();
            None
        }
        KeyCode::Enter => {
            let picked = state.highlighted_model().map(WorkflowModel::new);
            state.close();
            picked.map(|model| SelectorEvent::Changed(Some(model)))
        }
        _ => None,
    }
}
