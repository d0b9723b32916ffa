//! Response types for model backends.

use serde_json::{Map, Value};

/// A structured function call returned by the model instead of text.
#[derive(Debug, Clone)]
pub struct ToolInvocation {
    /// Name of the declared tool the model invoked.
    pub name: String,
    /// Arguments as a JSON object. Untrusted; may be missing fields.
    pub args: Map<String, Value>,
}

impl ToolInvocation {
    /// Get a string argument by name.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(|v| v.as_str())
    }

    /// Get an argument that is an array of strings.
    ///
    /// Non-string elements are dropped rather than failing the whole call;
    /// the provider output is untrusted.
    pub fn get_str_array(&self, key: &str) -> Option<Vec<String>> {
        let items = self.args.get(key)?.as_array()?;
        Some(
            items
                .iter()
                .filter_map(|v| v.as_str().map(|s| s.to_string()))
                .collect(),
        )
    }
}

/// A single generation response.
#[derive(Debug, Clone, Default)]
pub struct ModelResponse {
    /// Text payload, if the model answered with text.
    pub text: Option<String>,
    /// Tool invocations, if the model answered with function calls.
    pub tool_calls: Vec<ToolInvocation>,
}

impl ModelResponse {
    /// A text-only response.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            tool_calls: Vec::new(),
        }
    }

    /// A response carrying a single tool invocation.
    pub fn tool_call(name: impl Into<String>, args: Map<String, Value>) -> Self {
        Self {
            text: None,
            tool_calls: vec![ToolInvocation {
                name: name.into(),
                args,
            }],
        }
    }

    /// The first tool invocation, if any.
    pub fn first_tool_call(&self) -> Option<&ToolInvocation> {
        self.tool_calls.first()
    }
}
