//! Static model implementation - always returns the same text.

use async_trait::async_trait;
use model_core::{Model, ModelError, ModelRequest, ModelResponse};
use tokio::sync::Mutex;

/// A model that returns a fixed text payload for every request.
///
/// Requests are recorded so tests can assert on the prompt that was sent.
pub struct StaticModel {
    text: String,
    requests: Mutex<Vec<ModelRequest>>,
}

impl StaticModel {
    /// Create a StaticModel returning the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// The requests seen so far, oldest first.
    pub async fn requests(&self) -> Vec<ModelRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl Model for StaticModel {
    async fn generate(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        self.requests.lock().await.push(request);
        Ok(ModelResponse::text(self.text.clone()))
    }

    fn name(&self) -> &str {
        "StaticModel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_text_returned() {
        let model = StaticModel::new("{\"revisedText\": \"Hi.\"}");
        let response = model.generate(ModelRequest::text("rephrase")).await.unwrap();
        assert_eq!(response.text.as_deref(), Some("{\"revisedText\": \"Hi.\"}"));
    }

    #[tokio::test]
    async fn test_requests_recorded() {
        let model = StaticModel::new("ok");
        model.generate(ModelRequest::text("first")).await.unwrap();
        model.generate(ModelRequest::text("second")).await.unwrap();
        assert_eq!(model.requests().await.len(), 2);
    }
}
