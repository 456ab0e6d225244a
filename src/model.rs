//! Data model for model selection.
//!
//! The selection is fully controlled by the caller: the selector widget only
//! ever receives the current value and reports changes through events. `None`
//! means "no selection"; there is no sentinel identifier.

use serde::{Deserialize, Serialize};

/// A selected workflow model, as stored in workflow definitions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkflowModel {
    /// Opaque identifier of the backend model.
    pub model: String,
}

impl WorkflowModel {
    /// Wrap a model identifier in a selection record.
    #[must_use]
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
        }
    }
}

/// Wire shape of the `GET /models` response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelsResponse {
    /// Available model identifiers, in backend order.
    pub models: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_workflow_model_new() {
        let value = WorkflowModel::new("gpt-a");
        assert_eq!(value.model, "gpt-a");
    }

    #[test]
    fn test_workflow_model_serializes_single_field() -> anyhow::Result<()> {
        let value = WorkflowModel::new("gpt-a");
        let json = serde_json::to_string(&value)?;
        assert_eq!(json, r#"{"model":"gpt-a"}"#);
        Ok(())
    }

    #[test]
    fn test_models_response_deserializes() -> anyhow::Result<()> {
        let body = r#"{"models":["gpt-a","gpt-b"]}"#;
        let response: ModelsResponse = serde_json::from_str(body)?;
        assert_eq!(response.models, vec!["gpt-a", "gpt-b"]);
        Ok(())
    }

    #[test]
    fn test_models_response_preserves_order() -> anyhow::Result<()> {
        let body = r#"{"models":["z","a","m"]}"#;
        let response: ModelsResponse = serde_json::from_str(body)?;
        assert_eq!(response.models, vec!["z", "a", "m"]);
        Ok(())
    }

    #[test]
    fn test_models_response_empty() -> anyhow::Result<()> {
        let response: ModelsResponse = serde_json::from_str(r#"{"models":[]}"#)?;
        assert!(response.models.is_empty());
        Ok(())
    }
}
