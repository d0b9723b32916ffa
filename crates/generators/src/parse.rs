//! Post-processing of text payloads before JSON parsing.

use model_core::{hash_prompt, Model, ModelRequest, ModelResponse};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::GeneratorError;

/// Strip Markdown code fences and surrounding whitespace.
///
/// Models routinely wrap structured output in Markdown fences even when
/// a schema was supplied.
pub fn clean_json_text(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

/// The text payload of a response, or a malformed-output error.
pub fn require_text(response: ModelResponse) -> Result<String, GeneratorError> {
    response
        .text
        .ok_or_else(|| GeneratorError::Malformed("model returned no text payload".to_string()))
}

/// Clean and parse a text payload into `T`.
pub fn parse_json<T: DeserializeOwned>(raw: &str) -> Result<T, GeneratorError> {
    let cleaned = clean_json_text(raw);
    serde_json::from_str(cleaned)
        .map_err(|e| GeneratorError::Malformed(format!("{} in: {}", e, snippet(cleaned))))
}

/// Dispatch a request and parse the text payload into `T`.
///
/// The shared "call, trim, parse" path every text generator uses. Raw
/// failures are logged with the operation name before they propagate.
pub(crate) async fn generate_parsed<T: DeserializeOwned>(
    model: &dyn Model,
    request: ModelRequest,
    operation: &'static str,
) -> Result<T, GeneratorError> {
    if let Some(prompt) = request.prompt_text() {
        debug!(operation, prompt_sha = %hash_prompt(&prompt), "dispatching generation request");
    }

    let response = model.generate(request).await.map_err(|e| {
        warn!(error = %e, operation, "model call failed");
        GeneratorError::from(e)
    })?;

    let text = require_text(response)?;
    parse_json(&text).map_err(|e| {
        warn!(error = %e, operation, "could not parse model output");
        e
    })
}

/// A short prefix of the offending text for error messages.
fn snippet(text: &str) -> String {
    const MAX: usize = 120;
    if text.chars().count() <= MAX {
        text.to_string()
    } else {
        let prefix: String = text.chars().take(MAX).collect();
        format!("{}…", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        value: String,
    }

    #[test]
    fn test_clean_json_fence() {
        assert_eq!(
            clean_json_text("```json\n{\"value\": \"x\"}\n```"),
            "{\"value\": \"x\"}"
        );
    }

    #[test]
    fn test_clean_bare_fence() {
        assert_eq!(clean_json_text("```\n[1, 2]\n```"), "[1, 2]");
    }

    #[test]
    fn test_clean_plain_text_untouched() {
        assert_eq!(clean_json_text("  {\"value\": \"x\"}  "), "{\"value\": \"x\"}");
    }

    #[test]
    fn test_parse_json_through_fence() {
        let parsed: Sample = parse_json("```json\n{\"value\": \"ok\"}\n```").unwrap();
        assert_eq!(parsed, Sample { value: "ok".to_string() });
    }

    #[test]
    fn test_parse_json_failure_includes_snippet() {
        let err = parse_json::<Sample>("not json at all").unwrap_err();
        match err {
            GeneratorError::Malformed(msg) => assert!(msg.contains("not json at all")),
            _ => panic!("Expected Malformed error"),
        }
    }

    #[tokio::test]
    async fn test_generate_parsed_fingerprints_prompt() {
        let model = mock_model::StaticModel::new(r#"{"value": "ok"}"#);
        let request = ModelRequest::text("fingerprint me");
        let expected = hash_prompt(&request.prompt_text().unwrap());

        let parsed: Sample = generate_parsed(&model, request, "sample_op").await.unwrap();
        assert_eq!(parsed.value, "ok");

        // The fingerprint logged on dispatch is derived from the request's
        // text parts; the recorded request must hash to the same value.
        let recorded = model.requests().await;
        assert_eq!(hash_prompt(&recorded[0].prompt_text().unwrap()), expected);
    }

    #[test]
    fn test_require_text_missing() {
        let err = require_text(ModelResponse::default()).unwrap_err();
        assert!(matches!(err, GeneratorError::Malformed(_)));
    }
}
