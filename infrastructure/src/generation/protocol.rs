//! Wire types for the model CLI
//!
//! One request object goes to the child's stdin as a single JSON line;
//! one response object comes back on stdout. Tools are advertised in the
//! request, and whatever the model did with them is already folded into
//! the response content.

use super::error::ModelCliError;
use panel_domain::ToolDefinition;
use serde::{Deserialize, Serialize};

/// Request sent to the model CLI
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    /// Model identifier for this call
    pub model: String,
    /// System prompt for the role
    pub system: String,
    /// User prompt for this turn
    pub prompt: String,
    /// Tool capabilities the model may invoke
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolDefinition>,
}

/// Response read from the model CLI
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// The model's reply text
    #[serde(default)]
    pub content: Option<String>,
    /// Error reported by the CLI instead of content
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Unwrap the response into its content
    pub fn into_content(self) -> Result<String, ModelCliError> {
        if let Some(error) = self.error {
            return Err(ModelCliError::Backend(error));
        }
        match self.content {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => Err(ModelCliError::EmptyResponse),
        }
    }
}
