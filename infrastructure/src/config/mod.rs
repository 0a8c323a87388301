//! Configuration loading and validation

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileInstructionsConfig, FileModelsConfig, FileOutputConfig,
    FileSessionConfig,
};
pub use loader::ConfigLoader;
