//! Session and evaluation results - immutable output types
//!
//! These types represent the outputs of a finished debate:
//! - [`ProposalOutcome`] - One proposer's final findings and status
//! - [`SessionResult`] - Merged output of one team's session
//! - [`TeamOutcome`] - A session result or a reported team failure
//! - [`EvaluationResult`] - Both teams' outcomes for one applicant

use super::consensus::AcceptanceStatus;
use super::finding::FindingSet;
use super::team::{ProposerId, TeamKind};
use serde::{Deserialize, Serialize};

/// How a session reached its conclusion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Completion {
    /// Every proposer was accepted by the challenger
    Complete,
    /// The turn budget ran out with at least one proposal still open
    Partial,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        matches!(self, Completion::Complete)
    }
}

impl std::fmt::Display for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completion::Complete => write!(f, "complete"),
            Completion::Partial => write!(f, "partial"),
        }
    }
}

/// One proposer's contribution to the final result
///
/// Carries the latest findings regardless of status: on forced
/// termination a still-open proposal is reported as-is rather than
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalOutcome {
    /// The proposer this outcome belongs to
    pub proposer: ProposerId,
    /// Latest findings; empty if the proposer never got to speak
    pub findings: FindingSet,
    /// Final derived status
    pub status: AcceptanceStatus,
}

impl ProposalOutcome {
    pub fn new(proposer: ProposerId, findings: FindingSet, status: AcceptanceStatus) -> Self {
        Self {
            proposer,
            findings,
            status,
        }
    }
}

/// Final merged output of one team's debate session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    /// Which team this session argued for
    pub team: TeamKind,
    /// Per-proposer outcomes in roster join order
    pub proposals: Vec<ProposalOutcome>,
    /// Whether consensus was reached or the budget forced termination
    pub completion: Completion,
    /// Turns consumed by the session
    pub turns_used: usize,
}

impl SessionResult {
    pub fn new(
        team: TeamKind,
        proposals: Vec<ProposalOutcome>,
        completion: Completion,
        turns_used: usize,
    ) -> Self {
        Self {
            team,
            proposals,
            completion,
            turns_used,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.completion.is_complete()
    }

    /// Findings of one proposer, if present
    pub fn findings_of(&self, proposer: &ProposerId) -> Option<&FindingSet> {
        self.proposals
            .iter()
            .find(|p| &p.proposer == proposer)
            .map(|p| &p.findings)
    }

    /// Total number of findings across all proposers
    pub fn finding_count(&self) -> usize {
        self.proposals.iter().map(|p| p.findings.len()).sum()
    }
}

/// The outcome of one team: a result, or a failure that did not stop the
/// sibling team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "outcome")]
pub enum TeamOutcome {
    Completed(SessionResult),
    Failed {
        team: TeamKind,
        reason: String,
    },
}

impl TeamOutcome {
    /// Create a failure outcome
    pub fn failed(team: TeamKind, reason: impl Into<String>) -> Self {
        TeamOutcome::Failed {
            team,
            reason: reason.into(),
        }
    }

    /// The session result, if the team completed
    pub fn result(&self) -> Option<&SessionResult> {
        match self {
            TeamOutcome::Completed(result) => Some(result),
            TeamOutcome::Failed { .. } => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, TeamOutcome::Failed { .. })
    }

    /// Which team this outcome belongs to
    pub fn team(&self) -> TeamKind {
        match self {
            TeamOutcome::Completed(result) => result.team,
            TeamOutcome::Failed { team, .. } => *team,
        }
    }
}

/// The full applicant evaluation: both teams' outcomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub strengths: TeamOutcome,
    pub weaknesses: TeamOutcome,
}

impl EvaluationResult {
    pub fn new(strengths: TeamOutcome, weaknesses: TeamOutcome) -> Self {
        Self {
            strengths,
            weaknesses,
        }
    }

    /// Outcome of one team by kind
    pub fn outcome(&self, team: TeamKind) -> &TeamOutcome {
        match team {
            TeamKind::Strengths => &self.strengths,
            TeamKind::Weaknesses => &self.weaknesses,
        }
    }

    /// True when both teams produced a `Complete` session result
    pub fn is_fully_complete(&self) -> bool {
        TeamKind::both().iter().all(|team| {
            self.outcome(*team)
                .result()
                .map(|r| r.is_complete())
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::finding::Finding;

    fn sample_result(team: TeamKind, completion: Completion) -> SessionResult {
        let mut findings = FindingSet::new();
        findings.insert(Finding::new("Label", "Description"));
        SessionResult::new(
            team,
            vec![ProposalOutcome::new(
                ProposerId::new("personal"),
                findings,
                AcceptanceStatus::Accepted,
            )],
            completion,
            3,
        )
    }

    #[test]
    fn test_completion_display() {
        assert_eq!(Completion::Complete.to_string(), "complete");
        assert_eq!(Completion::Partial.to_string(), "partial");
    }

    #[test]
    fn test_findings_lookup() {
        let result = sample_result(TeamKind::Strengths, Completion::Complete);
        let personal = ProposerId::new("personal");

        assert!(result.findings_of(&personal).is_some());
        assert!(result.findings_of(&ProposerId::new("missing")).is_none());
        assert_eq!(result.finding_count(), 1);
    }

    #[test]
    fn test_team_outcome_accessors() {
        let completed = TeamOutcome::Completed(sample_result(
            TeamKind::Strengths,
            Completion::Complete,
        ));
        assert!(completed.result().is_some());
        assert!(!completed.is_failed());
        assert_eq!(completed.team(), TeamKind::Strengths);

        let failed = TeamOutcome::failed(TeamKind::Weaknesses, "challenger unavailable");
        assert!(failed.result().is_none());
        assert!(failed.is_failed());
        assert_eq!(failed.team(), TeamKind::Weaknesses);
    }

    #[test]
    fn test_fully_complete_requires_both_teams() {
        let both = EvaluationResult::new(
            TeamOutcome::Completed(sample_result(TeamKind::Strengths, Completion::Complete)),
            TeamOutcome::Completed(sample_result(TeamKind::Weaknesses, Completion::Complete)),
        );
        assert!(both.is_fully_complete());

        let partial = EvaluationResult::new(
            TeamOutcome::Completed(sample_result(TeamKind::Strengths, Completion::Partial)),
            TeamOutcome::Completed(sample_result(TeamKind::Weaknesses, Completion::Complete)),
        );
        assert!(!partial.is_fully_complete());

        let failed = EvaluationResult::new(
            TeamOutcome::Completed(sample_result(TeamKind::Strengths, Completion::Complete)),
            TeamOutcome::failed(TeamKind::Weaknesses, "boom"),
        );
        assert!(!failed.is_fully_complete());
    }
}
