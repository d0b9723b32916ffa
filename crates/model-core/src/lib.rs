//! Core trait and types for generative model backends.
//!
//! This crate provides the shared interface every generator in the Guro
//! authoring tool programs against. It defines:
//!
//! - [`Model`] - The trait that all model backends must implement
//! - [`ModelRequest`] / [`ModelResponse`] - Request/response types
//! - [`ToolInvocation`] - A structured function call returned by the model
//! - [`ModelError`] - Error types for model operations
//! - [`classify`] - Mapping raw failures to user-facing messages
//!
//! # Example
//!
//! ```rust
//! use model_core::{Model, ModelError, ModelRequest, ModelResponse};
//! use async_trait::async_trait;
//!
//! struct MyModel;
//!
//! #[async_trait]
//! impl Model for MyModel {
//!     async fn generate(&self, _request: ModelRequest) -> Result<ModelResponse, ModelError> {
//!         Ok(ModelResponse::text("Hello!"))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyModel"
//!     }
//! }
//! ```

pub mod classify;
mod error;
mod prompt;
mod request;
mod response;
mod trait_def;

pub use error::ModelError;
pub use prompt::hash_prompt;
pub use request::{FunctionDecl, ModelRequest, RequestPart, SafetySetting};
pub use response::{ModelResponse, ToolInvocation};
pub use trait_def::Model;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
