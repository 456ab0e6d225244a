//! HTTP client for the workflow backend's model listing endpoint.
//!
//! One endpoint is used: `GET {base_url}/models`, which returns the set of
//! model identifiers the backend will accept in workflow definitions. The
//! credential, if any, is supplied by the caller and sent as an `x-api-key`
//! header.

use std::time::Duration;

use ureq::Agent;

use crate::model::ModelsResponse;

/// Default global timeout for requests to the backend.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Errors from the models endpoint.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with a non-success status code.
    #[error("models request failed with status {0}")]
    Status(u16),

    /// The request could not be completed (DNS, connect, timeout, TLS).
    #[error("models request failed: {0}")]
    Transport(#[from] Box<ureq::Error>),

    /// The response body was not the expected JSON shape.
    #[error("failed to decode models response: {0}")]
    Decode(#[source] std::io::Error),
}

/// Client for the workflow backend, configured with a base URL and an
/// optional credential.
#[derive(Debug, Clone)]
pub struct ApiClient {
    agent: Agent,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Create a client for `base_url` with the default timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self::with_timeout(base_url, api_key, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit global timeout.
    #[must_use]
    pub fn with_timeout(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        let config = ureq::config::Config::builder()
            .timeout_global(Some(timeout))
            .build();
        Self {
            agent: config.new_agent(),
            base_url: base_url.into(),
            api_key,
        }
    }

    /// The base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the available model identifiers from `GET /models`.
    ///
    /// The response order is preserved; identifiers are not validated or
    /// deduplicated here.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the body cannot be decoded.
    pub fn get_models(&self) -> Result<ModelsResponse, ApiError> {
        let url = format!("{}/models", self.base_url.trim_end_matches('/'));
        let user_agent = concat!("modelpick/", env!("CARGO_PKG_VERSION"));

        let mut request = self.agent.get(&url).header("User-Agent", user_agent);
        if let Some(ref key) = self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status)) => return Err(ApiError::Status(status)),
            Err(err) => return Err(ApiError::Transport(Box::new(err))),
        };

        response
            .into_body()
            .read_json()
            .map_err(|err| ApiError::Decode(std::io::Error::other(err)))
    }
}
