//! Debate and consensus domain
//!
//! This module contains the core concepts for the debate-based applicant
//! evaluation.
//!
//! # Core Concepts
//!
//! ## Proposal
//! Each proposer covers one evaluation dimension (personal, experience) and
//! produces a set of labeled findings from the applicant summary.
//!
//! ## Challenge
//! The challenger reviews every current proposal, raises objections, and
//! accepts or rejects each proposer independently. A later decision always
//! supersedes an earlier one, so the challenger can change its mind.
//!
//! ## Coordination
//!
//! ```text
//! AwaitingProposers ──▶ AwaitingChallenge ──▶ Negotiating ──▶ Concluded
//!        ▲                      ▲                  │
//!        └── (first findings)   └── (revision) ────┘
//! ```
//!
//! The coordinator evaluates the transition rule after every turn append:
//! a missing first proposal selects that proposer, an unreviewed round
//! selects the challenger, an open (pending or rejected) proposal selects
//! its proposer, and either full acceptance or budget exhaustion concludes
//! the session.

pub mod consensus;
pub mod coordinator;
pub mod finding;
pub mod result;
pub mod team;
pub mod turn;

// Re-export main types
pub use consensus::{AcceptanceStatus, ConsensusState};
pub use coordinator::{Coordinator, DebatePhase, NextAction};
pub use finding::{Finding, FindingSet};
pub use result::{Completion, EvaluationResult, ProposalOutcome, SessionResult, TeamOutcome};
pub use team::{ProposerId, ProposerRoster, Speaker, TeamKind};
pub use turn::{ChallengeReview, Decision, Objection, Turn, TurnContent, TurnLog};
