//! Error types for the model CLI adapter

use thiserror::Error;

/// Errors that can occur when talking to the model CLI
#[derive(Error, Debug)]
pub enum ModelCliError {
    #[error("Empty model command")]
    EmptyCommand,

    #[error("Model command not found: {0}")]
    CommandNotFound(String),

    #[error("Failed to run model command: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Model command exited with status {status}: {stderr}")]
    NonZeroExit { status: i32, stderr: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Model returned an error: {0}")]
    Backend(String),

    #[error("Model response carried no content")]
    EmptyResponse,
}
