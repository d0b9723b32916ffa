//! Error types for generator operations.

use model_core::{classify, ModelError};
use thiserror::Error;

/// Errors that can occur while running a generator.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The model backend failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The model answered, but the payload could not be parsed or is
    /// missing required fields.
    #[error("Malformed model output: {0}")]
    Malformed(String),

    /// The model answered with a structurally valid but empty result.
    #[error("Empty result: {0}")]
    EmptyResult(String),
}

impl GeneratorError {
    /// The single user-facing message for this failure.
    ///
    /// Model failures go through the classifier; malformed and empty
    /// results are wrapped generically through the same path.
    pub fn user_message(&self) -> String {
        match self {
            GeneratorError::Model(err) => classify::user_message(Some(err.raw_message())),
            other => classify::user_message(Some(&other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_classified() {
        let err = GeneratorError::Model(ModelError::Provider {
            status: 429,
            message: "Quota exceeded for gemini-2.5-flash".to_string(),
        });
        assert_eq!(err.user_message(), classify::QUOTA_MESSAGE);
    }

    #[test]
    fn test_invalid_key_classified() {
        let err = GeneratorError::Model(ModelError::Provider {
            status: 400,
            message: "API_KEY_INVALID".to_string(),
        });
        assert_eq!(err.user_message(), classify::CREDENTIAL_MESSAGE);
    }

    #[test]
    fn test_malformed_wrapped_generically() {
        let err = GeneratorError::Malformed("expected value at line 1".to_string());
        assert!(err.user_message().starts_with("An error occurred:"));
    }
}
