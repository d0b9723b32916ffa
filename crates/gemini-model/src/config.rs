//! Configuration for GeminiModel.

use std::env;
use std::time::Duration;

/// Default proxy endpoint.
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8787/api/gemini";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default request timeout in seconds. The upstream contract defines no
/// timeout, so one is set explicitly here.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration for GeminiModel.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// Secure proxy endpoint that holds the API key.
    pub proxy_url: String,

    /// Default model identifier.
    pub model: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Default sampling temperature.
    pub temperature: Option<f32>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: None,
        }
    }
}

impl GeminiConfig {
    /// Create configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `GEMINI_PROXY_URL` - Proxy endpoint (default: http://127.0.0.1:8787/api/gemini)
    /// - `GEMINI_MODEL` - Model identifier (default: gemini-2.5-flash)
    /// - `GEMINI_TIMEOUT_SECS` - Request timeout (default: 60)
    /// - `GEMINI_TEMPERATURE` - Sampling temperature (default: unset)
    ///
    /// The API key is never read here; it lives with the proxy.
    pub fn from_env() -> Self {
        let proxy_url =
            env::var("GEMINI_PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string());
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let timeout_secs = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        let temperature = env::var("GEMINI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            proxy_url,
            model,
            timeout_secs,
            temperature,
        }
    }

    /// Create a new config builder.
    pub fn builder() -> GeminiConfigBuilder {
        GeminiConfigBuilder::default()
    }

    /// The timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Builder for GeminiConfig.
#[derive(Debug, Default)]
pub struct GeminiConfigBuilder {
    config: GeminiConfig,
}

impl GeminiConfigBuilder {
    /// Set the proxy URL.
    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.config.proxy_url = url.into();
        self
    }

    /// Set the model identifier.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Set the sampling temperature.
    pub fn temperature(mut self, temp: f32) -> Self {
        self.config.temperature = Some(temp);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GeminiConfig {
        self.config
    }
}
