use std::time::Duration;

use crate::api::wire::{TaskPayload, TaskWire};
use crate::model::config::ApiConfig;

/// Error type for remote API calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response. The body is carried verbatim so the user sees
    /// what the server said.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("request failed: {0}")]
    Transport(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    fn from_ureq(err: ureq::Error) -> ApiError {
        match err {
            ureq::Error::Status(status, response) => {
                let body = response.into_string().unwrap_or_default();
                ApiError::Status { status, body }
            }
            ureq::Error::Transport(transport) => ApiError::Transport(transport.to_string()),
        }
    }
}

/// The remote task collection: a JSON CRUD endpoint.
///
/// The store is generic over this trait so tests can substitute an
/// in-memory fake for the HTTP client.
pub trait TaskApi {
    /// GET base: the full collection
    fn list(&self) -> Result<Vec<TaskWire>, ApiError>;
    /// POST base: returns the created record with its assigned id
    fn create(&self, payload: &TaskPayload) -> Result<TaskWire, ApiError>;
    /// PUT base/{id}/: full-record replacement, returns the stored record
    fn update(&self, id: u64, payload: &TaskPayload) -> Result<TaskWire, ApiError>;
    /// DELETE base/{id}/
    fn delete(&self, id: u64) -> Result<(), ApiError>;
}

/// `TaskApi` over HTTP. Calls block the calling thread; the event loop
/// issues one request at a time, so there is nothing to coordinate.
pub struct HttpTaskApi {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: &str, timeout: Duration) -> HttpTaskApi {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        HttpTaskApi {
            agent,
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn from_config(config: &ApiConfig) -> HttpTaskApi {
        HttpTaskApi::new(&config.base_url, Duration::from_secs(config.timeout_secs))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}{}/", self.base_url, id)
    }
}

/// Ensure the base URL ends with exactly one `/` so item paths
/// concatenate cleanly.
fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

impl TaskApi for HttpTaskApi {
    fn list(&self) -> Result<Vec<TaskWire>, ApiError> {
        let response = self
            .agent
            .get(&self.base_url)
            .call()
            .map_err(ApiError::from_ureq)?;
        response
            .into_json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn create(&self, payload: &TaskPayload) -> Result<TaskWire, ApiError> {
        let response = self
            .agent
            .post(&self.base_url)
            .send_json(payload)
            .map_err(ApiError::from_ureq)?;
        response
            .into_json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn update(&self, id: u64, payload: &TaskPayload) -> Result<TaskWire, ApiError> {
        let response = self
            .agent
            .put(&self.item_url(id))
            .send_json(payload)
            .map_err(ApiError::from_ureq)?;
        response
            .into_json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.agent
            .delete(&self.item_url(id))
            .call()
            .map_err(ApiError::from_ureq)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/api/tasks"),
            "http://localhost:8000/api/tasks/"
        );
        assert_eq!(
            normalize_base_url("http://localhost:8000/api/tasks///"),
            "http://localhost:8000/api/tasks/"
        );
    }

    #[test]
    fn test_item_url() {
        let api = HttpTaskApi::new("http://localhost:8000/api/tasks", Duration::from_secs(1));
        assert_eq!(api.item_url(42), "http://localhost:8000/api/tasks/42/");
    }

    #[test]
    fn test_error_messages_carry_context() {
        let err = ApiError::Status {
            status: 400,
            body: r#"{"title": ["Dieses Feld darf nicht leer sein."]}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("400"));
        assert!(msg.contains("nicht leer"));
    }
}
