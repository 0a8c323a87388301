//! Infrastructure layer for hiring-panel
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod generation;
pub mod instructions;
pub mod logging;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileInstructionsConfig, FileModelsConfig,
    FileOutputConfig, FileSessionConfig,
};
pub use generation::{
    adapter::{ModelCliGenerationService, RoleModels},
    command::ModelCliClient,
    error::ModelCliError,
};
pub use instructions::FileInstructionRepository;
pub use logging::JsonlTranscriptLogger;
pub use tools::{PlaceholderTool, ToolRegistry};
