//! Gemini-backed [`Model`](model_core::Model) implementation.
//!
//! Requests are dispatched through the secure proxy route rather than
//! directly to the provider; the proxy holds the API key. This crate only
//! knows the `generateContent` wire shapes and how to fold them into the
//! backend-neutral request/response types from `model-core`.

pub mod api_types;
mod config;
mod model;

pub use config::GeminiConfig;
pub use model::GeminiModel;
