//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; conversion to application types
//! ([`SessionParams`], role models) happens through the accessor methods.
//!
//! [`SessionParams`]: panel_application::SessionParams

use panel_application::SessionParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub mod instructions;
pub mod models;
pub mod output;
pub mod session;

pub use instructions::FileInstructionsConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use session::FileSessionConfig;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("session.turn_budget cannot be 0")]
    ZeroTurnBudget,

    #[error("session.timeout_seconds cannot be 0")]
    ZeroTimeout,

    #[error("models.{0}: model name cannot be empty")]
    EmptyModelName(&'static str),
}

/// Root configuration structure matching `panel.toml`
///
/// # Example
///
/// ```toml
/// [session]
/// turn_budget = 12
/// max_retries = 2
/// timeout_seconds = 120
///
/// [models]
/// command = "model-cli"
/// proposer = "claude-sonnet-4.5"
/// challenger = "gpt-5.2-codex"
///
/// [instructions]
/// dir = "./instructions"
///
/// [output]
/// color = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub session: FileSessionConfig,
    pub models: FileModelsConfig,
    pub instructions: FileInstructionsConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration, collecting structural problems
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.session.turn_budget == 0 {
            return Err(ConfigValidationError::ZeroTurnBudget);
        }
        if self.session.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::ZeroTimeout);
        }
        if let Some(model) = &self.models.proposer
            && model.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName("proposer"));
        }
        if let Some(model) = &self.models.challenger
            && model.trim().is_empty()
        {
            return Err(ConfigValidationError::EmptyModelName("challenger"));
        }
        Ok(())
    }

    /// Convert the `[session]` section into application-layer parameters
    pub fn session_params(&self) -> SessionParams {
        SessionParams::default()
            .with_turn_budget(self.session.turn_budget)
            .with_max_retries(self.session.max_retries)
            .with_generation_timeout(self.session.timeout_seconds.map(Duration::from_secs))
    }

    /// Instruction directory, if configured
    pub fn instruction_dir(&self) -> Option<PathBuf> {
        self.instructions.dir.as_ref().map(PathBuf::from)
    }
}
