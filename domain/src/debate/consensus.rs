//! Derived consensus state
//!
//! Consensus is never stored. [`ConsensusState::derive`] folds the turn log
//! into a per-proposer acceptance status, so any point-in-time view of the
//! debate can be reconstructed from the record alone.

use super::team::{ProposerId, ProposerRoster};
use super::turn::{Decision, TurnLog};
use serde::{Deserialize, Serialize};

/// Acceptance status of one proposal, as last decided by the challenger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcceptanceStatus {
    /// Not yet decided by any challenger turn
    Pending,
    /// Most recent decision referencing the proposer was an accept
    Accepted,
    /// Most recent decision referencing the proposer was a reject;
    /// the proposer must speak again
    Rejected,
}

impl AcceptanceStatus {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AcceptanceStatus::Accepted)
    }

    /// Pending and Rejected both leave the proposal open: the proposer
    /// still owes the debate a (first or revised) findings turn.
    pub fn is_open(&self) -> bool {
        !self.is_accepted()
    }
}

impl std::fmt::Display for AcceptanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcceptanceStatus::Pending => write!(f, "pending"),
            AcceptanceStatus::Accepted => write!(f, "accepted"),
            AcceptanceStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Point-in-time consensus view over a turn log
///
/// For each roster member this holds the decision carried by the most
/// recent challenger turn referencing it. Later decisions supersede
/// earlier ones: re-accepting is a no-op, and a reject after an accept
/// reopens the proposal.
///
/// # Example
///
/// ```
/// use panel_domain::{
///     AcceptanceStatus, ChallengeReview, ConsensusState, FindingSet, ProposerRoster,
///     Speaker, TurnContent, TurnLog,
/// };
///
/// let roster = ProposerRoster::personal_and_experience();
/// let mut log = TurnLog::new();
/// log.append(Speaker::Proposer("personal".into()), TurnContent::Findings(FindingSet::new()));
/// log.append(
///     Speaker::Challenger,
///     TurnContent::Review(ChallengeReview::new().accept("personal")),
/// );
///
/// let state = ConsensusState::derive(&log, &roster);
/// assert!(state.status_of_str("personal").is_accepted());
/// assert_eq!(state.status_of_str("experience"), AcceptanceStatus::Pending);
/// assert!(!state.all_accepted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsensusState {
    statuses: Vec<(ProposerId, AcceptanceStatus)>,
}

impl ConsensusState {
    /// Derive the current consensus from a turn log
    ///
    /// Decisions referencing identities outside the roster are ignored;
    /// the coordinator rejects such turns before they reach the log.
    pub fn derive(log: &TurnLog, roster: &ProposerRoster) -> Self {
        let mut statuses: Vec<(ProposerId, AcceptanceStatus)> = roster
            .iter()
            .map(|id| (id.clone(), AcceptanceStatus::Pending))
            .collect();

        for turn in log.turns() {
            let Some(review) = turn.content.as_review() else {
                continue;
            };
            for (proposer, decision) in review.decisions() {
                if let Some(entry) = statuses.iter_mut().find(|(id, _)| id == proposer) {
                    entry.1 = match decision {
                        Decision::Accept => AcceptanceStatus::Accepted,
                        Decision::Reject => AcceptanceStatus::Rejected,
                    };
                }
            }
        }

        Self { statuses }
    }

    /// Status of one proposer; `Pending` for identities never referenced
    pub fn status_of(&self, proposer: &ProposerId) -> AcceptanceStatus {
        self.statuses
            .iter()
            .find(|(id, _)| id == proposer)
            .map(|(_, status)| *status)
            .unwrap_or(AcceptanceStatus::Pending)
    }

    /// Convenience lookup by string identity
    pub fn status_of_str(&self, proposer: &str) -> AcceptanceStatus {
        self.statuses
            .iter()
            .find(|(id, _)| id.as_str() == proposer)
            .map(|(_, status)| *status)
            .unwrap_or(AcceptanceStatus::Pending)
    }

    /// True once every roster member is accepted
    pub fn all_accepted(&self) -> bool {
        self.statuses.iter().all(|(_, s)| s.is_accepted())
    }

    /// Number of accepted proposals
    pub fn accepted_count(&self) -> usize {
        self.statuses.iter().filter(|(_, s)| s.is_accepted()).count()
    }

    /// Statuses in roster join order
    pub fn iter(&self) -> impl Iterator<Item = (&ProposerId, AcceptanceStatus)> {
        self.statuses.iter().map(|(id, s)| (id, *s))
    }

    /// First open (pending or rejected) proposer in join order, if any
    pub fn first_open(&self) -> Option<&ProposerId> {
        self.statuses
            .iter()
            .find(|(_, s)| s.is_open())
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::team::Speaker;
    use crate::debate::turn::{ChallengeReview, TurnContent};
    use crate::debate::finding::FindingSet;

    fn roster() -> ProposerRoster {
        ProposerRoster::personal_and_experience()
    }

    fn empty_findings() -> TurnContent {
        TurnContent::Findings(FindingSet::new())
    }

    fn review(review: ChallengeReview) -> TurnContent {
        TurnContent::Review(review)
    }

    #[test]
    fn test_empty_log_is_all_pending() {
        let log = TurnLog::new();
        let state = ConsensusState::derive(&log, &roster());

        assert_eq!(state.status_of_str("personal"), AcceptanceStatus::Pending);
        assert_eq!(state.status_of_str("experience"), AcceptanceStatus::Pending);
        assert!(!state.all_accepted());
        assert_eq!(state.accepted_count(), 0);
    }

    #[test]
    fn test_most_recent_decision_wins() {
        let mut log = TurnLog::new();
        log.append(Speaker::Proposer("personal".into()), empty_findings());
        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().reject("personal")),
        );
        log.append(Speaker::Proposer("personal".into()), empty_findings());
        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().accept("personal")),
        );

        let state = ConsensusState::derive(&log, &roster());
        assert_eq!(state.status_of_str("personal"), AcceptanceStatus::Accepted);
    }

    #[test]
    fn test_re_acceptance_is_idempotent() {
        let mut log = TurnLog::new();
        log.append(Speaker::Proposer("personal".into()), empty_findings());
        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().accept("personal")),
        );
        let once = ConsensusState::derive(&log, &roster());

        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().accept("personal")),
        );
        let twice = ConsensusState::derive(&log, &roster());

        assert_eq!(
            once.status_of_str("personal"),
            twice.status_of_str("personal")
        );
    }

    #[test]
    fn test_reject_after_accept_reopens() {
        let mut log = TurnLog::new();
        log.append(Speaker::Proposer("personal".into()), empty_findings());
        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().accept("personal")),
        );
        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().reject("personal")),
        );

        let state = ConsensusState::derive(&log, &roster());
        assert_eq!(state.status_of_str("personal"), AcceptanceStatus::Rejected);
        assert!(state.status_of_str("personal").is_open());
    }

    #[test]
    fn test_all_accepted() {
        let mut log = TurnLog::new();
        log.append(Speaker::Proposer("personal".into()), empty_findings());
        log.append(Speaker::Proposer("experience".into()), empty_findings());
        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().accept("personal").accept("experience")),
        );

        let state = ConsensusState::derive(&log, &roster());
        assert!(state.all_accepted());
        assert_eq!(state.accepted_count(), 2);
        assert!(state.first_open().is_none());
    }

    #[test]
    fn test_first_open_follows_join_order() {
        let mut log = TurnLog::new();
        log.append(Speaker::Proposer("personal".into()), empty_findings());
        log.append(Speaker::Proposer("experience".into()), empty_findings());
        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().reject("personal").reject("experience")),
        );

        let state = ConsensusState::derive(&log, &roster());
        assert_eq!(state.first_open().unwrap().as_str(), "personal");
    }

    #[test]
    fn test_unknown_identity_ignored() {
        let mut log = TurnLog::new();
        log.append(Speaker::Proposer("personal".into()), empty_findings());
        log.append(
            Speaker::Challenger,
            review(ChallengeReview::new().accept("intruder")),
        );

        let state = ConsensusState::derive(&log, &roster());
        assert_eq!(state.status_of_str("personal"), AcceptanceStatus::Pending);
        assert_eq!(state.status_of_str("intruder"), AcceptanceStatus::Pending);
    }
}
