//! GeminiModel implementation dispatching through the secure proxy.

use model_core::{
    async_trait, Model, ModelError, ModelRequest, ModelResponse, RequestPart, ToolInvocation,
};
use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{
    Content, FunctionDeclaration, GenerateRequest, GenerateResponse, GenerationConfig, Part,
    ProxyErrorBody, SafetySetting, Tool,
};
use crate::config::GeminiConfig;

/// A [`Model`] backed by Gemini's `generateContent` API.
///
/// All traffic goes through the secure proxy route, which injects the
/// server-held API key; this client never sees the credential.
pub struct GeminiModel {
    client: Client,
    config: GeminiConfig,
}

impl GeminiModel {
    /// Create a new GeminiModel with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                ModelError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, config })
    }

    /// Create a GeminiModel from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for recognized variables.
    pub fn from_env() -> Result<Self, ModelError> {
        Self::new(GeminiConfig::from_env())
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Map a backend-neutral request onto the wire format.
    fn build_wire_request(&self, request: &ModelRequest) -> GenerateRequest {
        let model = if request.model.is_empty() {
            self.config.model.clone()
        } else {
            request.model.clone()
        };

        let parts = request
            .parts
            .iter()
            .map(|part| match part {
                RequestPart::Text(text) => Part::text(text.clone()),
                RequestPart::InlineImage { mime_type, data } => {
                    Part::inline_image(mime_type.clone(), data.clone())
                }
            })
            .collect();

        // A structured schema implies a JSON response unless the caller
        // asked for something else.
        let response_mime_type = request.response_mime_type.clone().or_else(|| {
            request
                .response_schema
                .as_ref()
                .map(|_| "application/json".to_string())
        });

        let temperature = request.temperature.or(self.config.temperature);
        let generation_config = if response_mime_type.is_some()
            || request.response_schema.is_some()
            || temperature.is_some()
        {
            Some(GenerationConfig {
                response_mime_type,
                response_schema: request.response_schema.clone(),
                temperature,
            })
        } else {
            None
        };

        let tools = if request.tools.is_empty() {
            None
        } else {
            Some(vec![Tool {
                function_declarations: request
                    .tools
                    .iter()
                    .map(|decl| FunctionDeclaration {
                        name: decl.name.clone(),
                        description: decl.description.clone(),
                        parameters: decl.parameters.clone(),
                    })
                    .collect(),
            }])
        };

        let safety_settings = if request.safety.is_empty() {
            None
        } else {
            Some(
                request
                    .safety
                    .iter()
                    .map(|s| SafetySetting {
                        category: s.category.clone(),
                        threshold: s.threshold.clone(),
                    })
                    .collect(),
            )
        };

        GenerateRequest {
            model,
            contents: vec![Content::user(parts)],
            generation_config,
            tools,
            safety_settings,
            system_instruction: request
                .system_instruction
                .as_ref()
                .map(|text| Content::system(text.clone())),
        }
    }
}

/// Fold the first candidate into a backend-neutral response.
fn extract_response(response: GenerateResponse) -> ModelResponse {
    let mut text_chunks: Vec<String> = Vec::new();
    let mut tool_calls = Vec::new();

    if let Some(content) = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
    {
        for part in content.parts {
            if let Some(text) = part.text {
                text_chunks.push(text);
            }
            if let Some(call) = part.function_call {
                tool_calls.push(ToolInvocation {
                    name: call.name,
                    args: call.args.unwrap_or_default(),
                });
            }
        }
    }

    ModelResponse {
        text: if text_chunks.is_empty() {
            None
        } else {
            Some(text_chunks.join(""))
        },
        tool_calls,
    }
}

#[async_trait]
impl Model for GeminiModel {
    async fn generate(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let wire = self.build_wire_request(&request);
        debug!(model = %wire.model, "Sending generateContent request through proxy");

        let response = self
            .client
            .post(&self.config.proxy_url)
            .json(&wire)
            .send()
            .await
            .map_err(|e| {
                ModelError::Network(format!("Failed to call the AI service: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            // The proxy reports failures as {error, details}.
            if let Ok(proxy_error) = serde_json::from_str::<ProxyErrorBody>(&body) {
                let message = match proxy_error.details {
                    Some(details) => format!("{} {}", proxy_error.error, details),
                    None => proxy_error.error,
                };
                return Err(ModelError::Provider {
                    status: status.as_u16(),
                    message,
                });
            }

            return Err(ModelError::Provider {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            ModelError::MalformedResponse(format!("Failed to parse provider response: {}", e))
        })?;

        let extracted = extract_response(parsed);
        if extracted.text.is_none() && extracted.tool_calls.is_empty() {
            warn!("Provider returned neither text nor tool calls");
        }

        Ok(extracted)
    }

    fn name(&self) -> &str {
        "GeminiModel"
    }
}
