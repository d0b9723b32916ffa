//! Request types for model backends.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One piece of request content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RequestPart {
    /// Plain prompt text.
    Text(String),
    /// An inline image, base64-encoded.
    InlineImage {
        /// MIME type, e.g. "image/jpeg".
        mime_type: String,
        /// Base64-encoded image bytes.
        data: String,
    },
}

/// A callable-tool declaration offered to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    /// Tool name the model will call.
    pub name: String,
    /// What the tool does, for the model's benefit.
    pub description: String,
    /// JSON-schema description of the arguments.
    pub parameters: Value,
}

/// A safety threshold for one harm category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetySetting {
    /// Harm category identifier.
    pub category: String,
    /// Blocking threshold identifier.
    pub threshold: String,
}

/// A single generation request.
///
/// Backend-neutral: the concrete implementation maps this onto its own
/// wire format.
#[derive(Debug, Clone, Default)]
pub struct ModelRequest {
    /// Model identifier; empty means the backend's configured default.
    pub model: String,
    /// Ordered request content.
    pub parts: Vec<RequestPart>,
    /// Optional system instruction.
    pub system_instruction: Option<String>,
    /// Optional JSON schema constraining the output.
    pub response_schema: Option<Value>,
    /// Optional response MIME type (defaults to JSON when a schema is set).
    pub response_mime_type: Option<String>,
    /// Callable tools offered to the model.
    pub tools: Vec<FunctionDecl>,
    /// Safety thresholds, passed through untouched.
    pub safety: Vec<SafetySetting>,
    /// Optional sampling temperature.
    pub temperature: Option<f32>,
}

impl ModelRequest {
    /// A plain text request.
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            parts: vec![RequestPart::Text(prompt.into())],
            ..Self::default()
        }
    }

    /// Attach a structured-output schema.
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Attach a system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Offer a callable tool.
    pub fn with_tool(mut self, tool: FunctionDecl) -> Self {
        self.tools.push(tool);
        self
    }

    /// Concatenated text parts, for logging and fingerprinting.
    ///
    /// `None` when the request carries no text at all.
    pub fn prompt_text(&self) -> Option<String> {
        let chunks: Vec<&str> = self
            .parts
            .iter()
            .filter_map(|part| match part {
                RequestPart::Text(text) => Some(text.as_str()),
                RequestPart::InlineImage { .. } => None,
            })
            .collect();
        if chunks.is_empty() {
            None
        } else {
            Some(chunks.join("\n"))
        }
    }

    /// Add an inline image part.
    pub fn with_inline_image(
        mut self,
        mime_type: impl Into<String>,
        data: impl Into<String>,
    ) -> Self {
        self.parts.push(RequestPart::InlineImage {
            mime_type: mime_type.into(),
            data: data.into(),
        });
        self
    }
}
