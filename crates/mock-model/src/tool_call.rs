//! Tool-call model implementation - returns a fixed function call.

use async_trait::async_trait;
use model_core::{Model, ModelError, ModelRequest, ModelResponse};
use serde_json::{Map, Value};

/// A model that answers every request with one fixed tool invocation.
///
/// An empty invocation name produces a response with no tool calls at
/// all, which is how a model signals it found nothing actionable.
#[derive(Debug, Clone, Default)]
pub struct ToolCallModel {
    name: String,
    args: Map<String, Value>,
}

impl ToolCallModel {
    /// Create a ToolCallModel invoking `name` with `args`.
    ///
    /// Panics if `args` is not a JSON object; construction happens in
    /// tests where that is the bug being caught.
    pub fn new(name: impl Into<String>, args: Value) -> Self {
        Self {
            name: name.into(),
            args: args.as_object().cloned().expect("args must be a JSON object"),
        }
    }

    /// A model that returns no tool invocation at all.
    pub fn silent() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Model for ToolCallModel {
    async fn generate(&self, _request: ModelRequest) -> Result<ModelResponse, ModelError> {
        if self.name.is_empty() {
            return Ok(ModelResponse::default());
        }
        Ok(ModelResponse::tool_call(self.name.clone(), self.args.clone()))
    }

    fn name(&self) -> &str {
        "ToolCallModel"
    }
}
