//! Generation service adapter
//!
//! Implements the application's generation port on top of a model CLI
//! spawned per call. The adapter owns the whole free-text boundary: it
//! renders role prompts, ships them over a small JSON wire format, and
//! parses the model's reply back into structured findings or a structured
//! review. The debate core never sees raw model text.

pub mod adapter;
pub mod command;
pub mod error;
pub mod parsing;
pub mod protocol;

pub use adapter::{ModelCliGenerationService, RoleModels};
pub use command::ModelCliClient;
pub use error::ModelCliError;
