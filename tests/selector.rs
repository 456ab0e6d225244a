//! End-to-end selector flow: fetch, populate, pick, clear.
//!
//! Exercises the background fetch against a mock backend and feeds the
//! resulting state through the key handler, asserting on the emitted
//! selection-change events.

use std::thread;
use std::time::{Duration, Instant};

use modelpick::api::{ApiClient, ApiError};
use modelpick::fetch::ModelsFetch;
use modelpick::input::{SelectorEvent, handle_key};
use modelpick::model::WorkflowModel;
use modelpick::state::SelectorState;
use ratatui::crossterm::event::KeyCode;

fn wait_for(fetch: &mut ModelsFetch) -> Option<Result<Vec<String>, ApiError>> {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if let Some(result) = fetch.try_take() {
            return Some(result);
        }
        thread::sleep(Duration::from_millis(10));
    }
    None
}

fn fetch_into_state(server: &mockito::Server, state: &mut SelectorState) {
    let mut fetch = ModelsFetch::spawn(ApiClient::new(server.url(), None));
    match wait_for(&mut fetch) {
        Some(Ok(models)) => state.set_models(models),
        Some(Err(_)) | None => state.set_models(Vec::new()),
    }
}

#[test]
fn test_fetched_models_become_options() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/models")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"models":["gpt-a","gpt-b"]}"#)
        .create();

    let mut state = SelectorState::new();
    fetch_into_state(&server, &mut state);
    mock.assert();
    drop(server);

    assert_eq!(state.models(), ["gpt-a", "gpt-b"]);
}

#[test]
fn test_pick_second_option_emits_single_changed_event() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/models")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"models":["gpt-a","gpt-b"]}"#)
        .create();

    let mut state = SelectorState::new();
    fetch_into_state(&server, &mut state);
    drop(server);

    let mut events = Vec::new();
    for code in [KeyCode::Enter, KeyCode::Down, KeyCode::Enter] {
        if let Some(event) = handle_key(&mut state, None, true, code) {
            events.push(event);
        }
    }

    assert_eq!(
        events,
        vec![SelectorEvent::Changed(Some(WorkflowModel::new("gpt-b")))]
    );
}

#[test]
fn test_clear_emits_single_changed_none() {
    let mut state = SelectorState::new();
    state.set_models(vec!["gpt-a".to_string()]);

    let value = WorkflowModel::new("gpt-a");
    let first = handle_key(&mut state, Some(&value), true, KeyCode::Delete);
    assert_eq!(first, Some(SelectorEvent::Changed(None)));

    // After the caller applies the event, the value is gone and a second
    // clear is a no-op.
    let second = handle_key(&mut state, None, true, KeyCode::Delete);
    assert!(second.is_none());
}

#[test]
fn test_failed_fetch_leaves_empty_options() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", "/models").with_status(502).create();

    let mut state = SelectorState::new();
    fetch_into_state(&server, &mut state);
    mock.assert();
    drop(server);

    assert!(!state.is_loading());
    assert!(state.models().is_empty());

    // The dropdown still opens and confirms without emitting anything.
    handle_key(&mut state, None, true, KeyCode::Enter);
    let event = handle_key(&mut state, None, true, KeyCode::Enter);
    assert!(event.is_none());
}

#[test]
fn test_controlled_value_round_trip() {
    let mut state = SelectorState::new();
    state.set_models(vec!["gpt-a".to_string(), "gpt-b".to_string()]);

    // The caller owns the value; the selector only proposes changes.
    let mut value: Option<WorkflowModel> = None;

    for code in [KeyCode::Enter, KeyCode::Down, KeyCode::Enter] {
        if let Some(SelectorEvent::Changed(next)) = handle_key(&mut state, value.as_ref(), true, code)
        {
            value = next;
        }
    }
    assert_eq!(value, Some(WorkflowModel::new("gpt-b")));

    if let Some(SelectorEvent::Changed(next)) =
        handle_key(&mut state, value.as_ref(), true, KeyCode::Delete)
    {
        value = next;
    }
    assert_eq!(value, None);
}
