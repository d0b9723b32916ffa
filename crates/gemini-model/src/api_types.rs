//! Gemini `generateContent` request and response wire types.
//!
//! Field names follow the provider's camelCase contract exactly; the
//! proxy passes these documents through without rewriting them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A content block: one role plus its ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// "user" or "model"; omitted for system instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered parts of this content block.
    pub parts: Vec<Part>,
}

impl Content {
    /// A user-role content block.
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: Some("user".to_string()),
            parts,
        }
    }

    /// A roleless block, used for system instructions.
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::text(text)],
        }
    }
}

/// One part of a content block. Exactly one field is populated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    /// Plain text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Inline binary data (images).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    /// A function call the model wants executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<FunctionCall>,
}

impl Part {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// An inline image part.
    pub fn inline_image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            ..Self::default()
        }
    }
}

/// Base64-encoded inline data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g. "image/jpeg".
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

/// A function call emitted by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Declared tool name.
    pub name: String,
    /// Arguments object; may be absent on malformed output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Map<String, Value>>,
}

/// Generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Response MIME type, e.g. "application/json".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    /// JSON schema constraining the output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<Value>,
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A callable-tool declaration group.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    /// Function declarations in this group.
    pub function_declarations: Vec<FunctionDeclaration>,
}

/// One declared function.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    /// Tool name.
    pub name: String,
    /// Tool description.
    pub description: String,
    /// JSON-schema parameters object.
    pub parameters: Value,
}

/// A safety threshold entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetySetting {
    /// Harm category identifier.
    pub category: String,
    /// Blocking threshold identifier.
    pub threshold: String,
}

/// The full model-options document sent to the proxy.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Model identifier, consumed by the proxy to build the upstream URL.
    pub model: String,
    /// Request contents.
    pub contents: Vec<Content>,
    /// Generation configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    /// Callable tools.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,
    /// Safety thresholds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub safety_settings: Option<Vec<SafetySetting>>,
    /// System instruction block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

/// Response from `generateContent`, passed through the proxy verbatim.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Response candidates; absent when generation was blocked.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The candidate's content, if any.
    pub content: Option<Content>,
}

/// JSON error body returned by the proxy on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ProxyErrorBody {
    /// Short error message.
    pub error: String,
    /// Optional detail string.
    #[serde(default)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateRequest {
            model: "gemini-2.5-flash".to_string(),
            contents: vec![Content::user(vec![
                Part::text("read this sheet"),
                Part::inline_image("image/png", "aGVsbG8="),
            ])],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(json!({"type": "ARRAY"})),
                temperature: None,
            }),
            tools: Some(vec![Tool {
                function_declarations: vec![FunctionDeclaration {
                    name: "update_attendance".to_string(),
                    description: "Record attendance".to_string(),
                    parameters: json!({"type": "OBJECT"}),
                }],
            }]),
            safety_settings: None,
            system_instruction: Some(Content::system("You extract grades.")),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["generationConfig"]["responseMimeType"], "application/json");
        assert!(value["generationConfig"]["responseSchema"].is_object());
        assert_eq!(
            value["tools"][0]["functionDeclarations"][0]["name"],
            "update_attendance"
        );
        assert_eq!(
            value["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "You extract grades.");
        assert!(value.get("safetySettings").is_none());
    }

    #[test]
    fn test_response_parses_function_call() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{
                        "functionCall": {
                            "name": "update_attendance",
                            "args": {"status": "absent", "student_names": ["Juan Dela Cruz"]}
                        }
                    }]
                }
            }]
        });

        let response: GenerateResponse = serde_json::from_value(raw).unwrap();
        let part = &response.candidates[0].content.as_ref().unwrap().parts[0];
        let call = part.function_call.as_ref().unwrap();
        assert_eq!(call.name, "update_attendance");
        assert_eq!(call.args.as_ref().unwrap()["status"], "absent");
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GenerateResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.candidates.is_empty());
    }
}
