//! Failing model implementation - always errors.

use async_trait::async_trait;
use model_core::{Model, ModelError, ModelRequest, ModelResponse};

/// A model that fails every request with a provider error.
///
/// Useful for exercising error classification paths.
#[derive(Debug, Clone)]
pub struct FailingModel {
    message: String,
    status: u16,
}

impl FailingModel {
    /// Create a FailingModel with the given provider message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 500,
        }
    }

    /// Create a FailingModel with an explicit status code.
    pub fn with_status(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

#[async_trait]
impl Model for FailingModel {
    async fn generate(&self, _request: ModelRequest) -> Result<ModelResponse, ModelError> {
        Err(ModelError::Provider {
            status: self.status,
            message: self.message.clone(),
        })
    }

    fn name(&self) -> &str {
        "FailingModel"
    }
}
