//! Error types for model operations.

use thiserror::Error;

/// Errors that can occur when calling a generative model backend.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Missing or invalid configuration (e.g. unset environment variable).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Transport failure reaching the proxy or provider.
    #[error("Network error: {0}")]
    Network(String),

    /// The provider (or the proxy on its behalf) returned a failure status.
    #[error("Provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// The provider answered but the payload could not be understood.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ModelError {
    /// The raw message carried by this error, used by the classifier.
    pub fn raw_message(&self) -> &str {
        match self {
            ModelError::Configuration(msg)
            | ModelError::Network(msg)
            | ModelError::MalformedResponse(msg) => msg,
            ModelError::Provider { message, .. } => message,
        }
    }
}
