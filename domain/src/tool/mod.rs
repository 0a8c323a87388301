//! Tool capability types
//!
//! Tools are optional callable capabilities advertised to the generation
//! backend. The debate core never interprets tool results; whatever a
//! role does with a tool comes back folded into its generated turn.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Describes one tool to the generation backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name
    pub name: String,
    /// What the tool does, phrased for the model
    pub description: String,
}

impl ToolDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Errors a tool invocation can produce
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Execution failed: {0}")]
    ExecutionFailed(String),
}

/// A callable capability available to debate roles during generation
#[async_trait]
pub trait ToolCapability: Send + Sync {
    /// The definition advertised to the generation backend
    fn definition(&self) -> ToolDefinition;

    /// Invoke the tool with JSON arguments
    async fn invoke(&self, args: serde_json::Value) -> Result<serde_json::Value, ToolError>;
}
