//! The Model trait definition.

use async_trait::async_trait;

use crate::error::ModelError;
use crate::request::ModelRequest;
use crate::response::ModelResponse;

/// A generative model backend.
///
/// Implementations send one request and return one response; there is no
/// conversation state at this layer. Calls are independent and safe to
/// issue concurrently.
#[async_trait]
pub trait Model: Send + Sync {
    /// Run one generation request.
    async fn generate(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;

    /// The backend's name, for logging.
    fn name(&self) -> &str;
}
