//! Role-based model configuration from TOML (`[models]` section)

use serde::{Deserialize, Serialize};

/// Role-based model configuration
///
/// Each debate role can run on a different model. The `command` is the
/// model CLI the generation adapter spawns; role entries are the model
/// identifiers passed through to it.
///
/// # Example
///
/// ```toml
/// [models]
/// command = "model-cli"
/// proposer = "claude-sonnet-4.5"     # both proposers
/// challenger = "gpt-5.2-codex"       # the challenger
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Model CLI command to spawn for generation calls
    pub command: Option<String>,
    /// Model identifier for proposer turns
    pub proposer: Option<String>,
    /// Model identifier for challenger turns
    pub challenger: Option<String>,
}

impl FileModelsConfig {
    /// Model for proposer turns, falling back to the built-in default
    pub fn proposer_model(&self) -> &str {
        self.proposer.as_deref().unwrap_or(Self::DEFAULT_MODEL)
    }

    /// Model for challenger turns, falling back to the built-in default
    pub fn challenger_model(&self) -> &str {
        self.challenger.as_deref().unwrap_or(Self::DEFAULT_MODEL)
    }

    /// Model used when a role has no explicit configuration
    pub const DEFAULT_MODEL: &'static str = "claude-sonnet-4.5";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_fallbacks() {
        let config = FileModelsConfig::default();
        assert_eq!(config.proposer_model(), FileModelsConfig::DEFAULT_MODEL);
        assert_eq!(config.challenger_model(), FileModelsConfig::DEFAULT_MODEL);
    }

    #[test]
    fn test_explicit_roles() {
        let config: FileModelsConfig = toml::from_str(
            r#"
            proposer = "sonnet"
            challenger = "codex"
            "#,
        )
        .unwrap();
        assert_eq!(config.proposer_model(), "sonnet");
        assert_eq!(config.challenger_model(), "codex");
    }
}
