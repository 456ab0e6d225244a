//! Terminal User Interface for modelpick
//!
//! Drives the selector widget: sets up the terminal, starts the model list
//! fetch, applies selection-change events to the caller-owned value, and
//! returns the final selection when the user quits.

use std::io;
use std::time::Duration;

use anyhow::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use tracing::warn;

use crate::api::ApiClient;
use crate::config::Config;
use crate::fetch::ModelsFetch;
use crate::input::{SelectorEvent, handle_key};
use crate::model::WorkflowModel;
use crate::state::SelectorState;
use crate::ui::ModelSelectorWidget;

/// Run the interactive selector and return the selection on exit.
///
/// `initial` seeds the controlled value, e.g. from an existing workflow
/// definition.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run(
    config: &Config,
    client: ApiClient,
    initial: Option<WorkflowModel>,
    clearable: bool,
) -> Result<Option<WorkflowModel>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, config, client, initial, clearable);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
    client: ApiClient,
    initial: Option<WorkflowModel>,
    clearable: bool,
) -> Result<Option<WorkflowModel>> {
    let mut state = SelectorState::new();
    let mut value = initial;
    let mut fetch = ModelsFetch::spawn(client);
    let poll_interval = Duration::from_millis(config.poll_interval_ms);

    loop {
        // One fetch per mount; a failed fetch leaves the list empty.
        if let Some(result) = fetch.try_take() {
            match result {
                Ok(models) => state.set_models(models),
                Err(err) => {
                    warn!("failed to fetch models: {err}");
                    state.set_models(Vec::new());
                }
            }
        }

        terminal.draw(|frame| {
            let widget = ModelSelectorWidget::new(&state)
                .value(value.as_ref())
                .clearable(clearable)
                .placeholder(config.placeholder.clone());
            let area = centered_rect_absolute(60, 16, frame.area());
            frame.render_widget(widget.to_paragraph(), area);
        })?;

        if !event::poll(poll_interval)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if !state.open && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                return Ok(value);
            }

            if let Some(SelectorEvent::Changed(next)) =
                handle_key(&mut state, value.as_ref(), clearable, key.code)
            {
                value = next;
            }
        }
    }
}

/// Center a fixed-size rectangle inside `area`, clamped to fit.
#[must_use]
pub const fn centered_rect_absolute(width: u16, height: u16, area: Rect) -> Rect {
    let width = if width > area.width {
        area.width
    } else {
        width
    };
    let height = if height > area.height {
        area.height
    } else {
        height
    };
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
