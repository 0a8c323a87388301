//! Instruction repository port
//!
//! Supplies the domain instruction text injected into proposer prompts
//! (e.g. the company's guidance on personal strengths). The text is opaque
//! to the core; only the (team, dimension) lookup key is structured.

use panel_domain::{ProposerId, TeamKind};
use thiserror::Error;

/// Errors an instruction lookup can produce
#[derive(Error, Debug)]
pub enum InstructionError {
    #[error("No instructions for {team} / {dimension}")]
    NotFound { team: TeamKind, dimension: String },

    #[error("Instructions unreadable: {0}")]
    Unreadable(String),
}

/// Port for looking up domain instruction text
///
/// Implementations (file-backed, embedded defaults, a database) live in
/// the infrastructure layer. Lookups are synchronous: instruction sources
/// are local configuration, not remote services.
pub trait InstructionRepository: Send + Sync {
    /// Instruction text for one proposer dimension of one team
    fn instructions_for(
        &self,
        team: TeamKind,
        dimension: &ProposerId,
    ) -> Result<String, InstructionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = InstructionError::NotFound {
            team: TeamKind::Strengths,
            dimension: "personal".to_string(),
        };
        assert_eq!(err.to_string(), "No instructions for strengths / personal");
    }
}
