//! Mock model implementations for generator tests.
//!
//! This crate provides canned implementations of the `Model` trait:
//! - `StaticModel` - Returns a fixed text payload
//! - `ToolCallModel` - Returns a fixed tool invocation
//! - `FailingModel` - Always fails with a given error message
//!
//! For production use, see the `gemini-model` crate instead.

mod failing;
mod static_text;
mod tool_call;

// Re-export model-core types for convenience
pub use model_core::{
    async_trait, Model, ModelError, ModelRequest, ModelResponse, ToolInvocation,
};

pub use failing::FailingModel;
pub use static_text::StaticModel;
pub use tool_call::ToolCallModel;
