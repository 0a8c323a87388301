//! Generation service port
//!
//! Defines the interface for producing one debate turn from a role context.
//! The backend (an LLM, a scripted fake, anything) is opaque to the core:
//! the only contract is that its output parses into [`TurnContent`].

use async_trait::async_trait;
use panel_domain::{
    ApplicantSummary, FindingSet, Objection, ProposerId, Speaker, TeamKind, ToolDefinition,
    TurnContent,
};
use thiserror::Error;

/// Errors a generation call can produce
///
/// Every variant is retryable from the session loop's point of view: the
/// original generation failed or produced something unusable, so the same
/// speaker is re-invoked up to the configured retry limit.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// The backend responded but the output did not parse into the
    /// expected findings / review schema
    #[error("Malformed output: {0}")]
    MalformedOutput(String),

    /// The call exceeded the configured timeout
    #[error("Generation timed out")]
    Timeout,

    /// The backend itself failed (process, transport, protocol)
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Everything a backend needs to produce one turn
///
/// The context is assembled by the session loop from the turn log; the
/// backend never sees the log itself.
#[derive(Debug, Clone)]
pub struct RoleContext {
    /// Which team this turn belongs to
    pub team: TeamKind,
    /// The speaker being invoked
    pub speaker: Speaker,
    /// The applicant summary under evaluation
    pub summary: ApplicantSummary,
    /// Domain instruction text for the speaker (empty for the challenger)
    pub instructions: String,
    /// Latest findings of every proposer that has spoken, in join order
    pub proposals: Vec<(ProposerId, FindingSet)>,
    /// Objections addressed to the speaker, oldest first (empty for the
    /// challenger and for a proposer's first turn)
    pub objections: Vec<Objection>,
    /// Tool capabilities advertised to the backend
    pub tools: Vec<ToolDefinition>,
}

impl RoleContext {
    /// The speaker's own latest findings, if it has spoken before
    pub fn own_findings(&self) -> Option<&FindingSet> {
        let id = self.speaker.proposer()?;
        self.proposals
            .iter()
            .find(|(proposer, _)| proposer == id)
            .map(|(_, findings)| findings)
    }

    /// True when this is a revision turn (the speaker has prior findings)
    pub fn is_revision(&self) -> bool {
        self.own_findings().is_some()
    }
}

/// Port for producing one debate turn
///
/// Implementations (adapters) live in the infrastructure layer. The
/// returned content is validated again by the coordinator; a backend that
/// answers with the wrong content kind for the speaker is a defect, not a
/// retryable failure.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate(&self, context: &RoleContext) -> Result<TurnContent, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::Finding;

    fn context_for(speaker: Speaker) -> RoleContext {
        let mut personal = FindingSet::new();
        personal.insert(Finding::new("Calm", "Stays level."));
        RoleContext {
            team: TeamKind::Strengths,
            speaker,
            summary: ApplicantSummary::new("summary"),
            instructions: String::new(),
            proposals: vec![(ProposerId::new("personal"), personal)],
            objections: vec![],
            tools: vec![],
        }
    }

    #[test]
    fn test_own_findings_for_returning_proposer() {
        let ctx = context_for(Speaker::Proposer("personal".into()));
        assert!(ctx.is_revision());
        assert!(ctx.own_findings().unwrap().get("Calm").is_some());
    }

    #[test]
    fn test_no_own_findings_for_first_turn() {
        let ctx = context_for(Speaker::Proposer("experience".into()));
        assert!(!ctx.is_revision());
    }

    #[test]
    fn test_challenger_has_no_own_findings() {
        let ctx = context_for(Speaker::Challenger);
        assert!(ctx.own_findings().is_none());
        assert!(!ctx.is_revision());
    }
}
