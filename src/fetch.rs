//! Non-blocking fetch of the model list.
//!
//! The TUI cannot block on the network, so the `GET /models` request runs on
//! a background thread and the event loop polls for the result each tick.
//! One fetch is issued per selector mount; there is no retry and no cache
//! beyond the state the result lands in.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::api::{ApiClient, ApiError};

/// Handle to an in-flight model list fetch.
#[derive(Debug)]
pub struct ModelsFetch {
    receiver: Receiver<Result<Vec<String>, ApiError>>,
}

impl ModelsFetch {
    /// Start fetching the model list on a background thread.
    #[must_use]
    pub fn spawn(client: ApiClient) -> Self {
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let result = client.get_models().map(|response| response.models);
            // The receiver may be gone if the selector was torn down first.
            let _ = sender.send(result);
        });
        Self { receiver }
    }

    /// Poll for the fetch result without blocking.
    ///
    /// Returns `None` while the request is still outstanding. Once it
    /// completes, returns `Some` exactly once; afterwards the fetch is spent
    /// and keeps returning `None`.
    pub fn try_take(&mut self) -> Option<Result<Vec<String>, ApiError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}
