//! Domain layer for hiring-panel
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! An applicant is evaluated by two teams (strengths, weaknesses). Each team
//! runs a debate: two Proposers produce labeled findings for their dimension,
//! a Challenger critiques and accepts or rejects each proposal, and a
//! Coordinator decides who speaks next and when the debate is over.
//!
//! ## Turn log
//!
//! Every contribution is an immutable [`Turn`] appended to a [`TurnLog`].
//! Consensus is never stored: [`ConsensusState`] is derived on demand from
//! the log, so the Coordinator's decisions are reproducible from the record
//! alone and testable without any generation backend.

pub mod core;
pub mod debate;
pub mod prompt;
pub mod tool;

// Re-export commonly used types
pub use core::{error::DomainError, summary::ApplicantSummary};
pub use debate::{
    consensus::{AcceptanceStatus, ConsensusState},
    coordinator::{Coordinator, DebatePhase, NextAction},
    finding::{Finding, FindingSet},
    result::{Completion, EvaluationResult, ProposalOutcome, SessionResult, TeamOutcome},
    team::{ProposerId, ProposerRoster, Speaker, TeamKind},
    turn::{ChallengeReview, Decision, Objection, Turn, TurnContent, TurnLog},
};
pub use prompt::RolePromptTemplate;
pub use tool::{ToolCapability, ToolDefinition, ToolError};
