//! Application layer for hiring-panel
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer: the retry, timeout,
//! and cancellation policy lives here, while everything that touches the
//! outside world (models, files, terminals) is behind a port.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::SessionParams;
pub use ports::{
    generation::{GenerationError, GenerationService, RoleContext},
    instructions::{InstructionError, InstructionRepository},
    progress::{DebateProgress, NoProgress},
    transcript::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
};
pub use use_cases::evaluate::{EvaluateApplicantUseCase, EvaluateError, EvaluateInput};
pub use use_cases::run_session::{RunSessionError, RunSessionInput, RunSessionUseCase};
