//! Tool capability implementations and registry
//!
//! The registry is the seam through which callable capabilities reach the
//! generation backend. Only the placeholder tool ships by default; it
//! exists so the tool path is exercised end to end without granting any
//! real capability.

use async_trait::async_trait;
use panel_domain::{ToolCapability, ToolDefinition, ToolError};
use std::sync::Arc;

/// A tool that does nothing
///
/// Advertised to the generation backend like any other capability;
/// invoking it returns a fixed acknowledgement.
pub struct PlaceholderTool;

#[async_trait]
impl ToolCapability for PlaceholderTool {
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(
            "placeholder",
            "A placeholder tool that performs no operation.",
        )
    }

    async fn invoke(&self, _args: serde_json::Value) -> Result<serde_json::Value, ToolError> {
        Ok(serde_json::Value::String(
            "No operation performed.".to_string(),
        ))
    }
}

/// Registry of tool capabilities available to debate roles
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolCapability>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the placeholder tool
    pub fn with_placeholder() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlaceholderTool));
        registry
    }

    /// Register a capability
    pub fn register(&mut self, tool: Arc<dyn ToolCapability>) {
        self.tools.push(tool);
    }

    /// Definitions of every registered tool, for advertising to the backend
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Look up a capability by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ToolCapability>> {
        self.tools
            .iter()
            .find(|t| t.definition().name == name)
            .cloned()
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
