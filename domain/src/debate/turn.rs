//! Turns and the append-only turn log

use super::finding::FindingSet;
use super::team::{ProposerId, Speaker};
use serde::{Deserialize, Serialize};

/// The challenger's decision about one proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    pub fn is_accept(&self) -> bool {
        matches!(self, Decision::Accept)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Accept => write!(f, "accept"),
            Decision::Reject => write!(f, "reject"),
        }
    }
}

/// A challenger critique aimed at one proposer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objection {
    /// The proposer this objection targets
    pub proposer: ProposerId,
    /// Free-text critique
    pub content: String,
}

impl Objection {
    pub fn new(proposer: impl Into<ProposerId>, content: impl Into<String>) -> Self {
        Self {
            proposer: proposer.into(),
            content: content.into(),
        }
    }
}

/// One challenger turn: objections plus an explicit decision per proposer
///
/// Decisions within a single review are unique per proposer; deciding the
/// same proposer again replaces the earlier decision. A review may legally
/// carry no decisions at all (pure objection round); referenced proposers
/// simply keep their previous status.
///
/// # Example
///
/// ```
/// use panel_domain::{ChallengeReview, Decision};
///
/// let review = ChallengeReview::new()
///     .with_objection("personal", "Resilience is asserted, not evidenced.")
///     .accept("experience")
///     .reject("personal");
///
/// assert_eq!(review.decision_for_str("personal"), Some(Decision::Reject));
/// assert_eq!(review.decision_for_str("experience"), Some(Decision::Accept));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeReview {
    /// Critiques raised this round
    pub objections: Vec<Objection>,
    /// Accept/reject decisions, one entry per referenced proposer
    decisions: Vec<(ProposerId, Decision)>,
}

impl ChallengeReview {
    /// Create an empty review
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an objection targeting a proposer
    pub fn with_objection(
        mut self,
        proposer: impl Into<ProposerId>,
        content: impl Into<String>,
    ) -> Self {
        self.objections.push(Objection {
            proposer: proposer.into(),
            content: content.into(),
        });
        self
    }

    /// Record an accept decision for a proposer
    pub fn accept(self, proposer: impl Into<ProposerId>) -> Self {
        self.decide(proposer, Decision::Accept)
    }

    /// Record a reject decision for a proposer
    pub fn reject(self, proposer: impl Into<ProposerId>) -> Self {
        self.decide(proposer, Decision::Reject)
    }

    /// Record a decision, replacing any earlier decision for the same proposer
    pub fn decide(mut self, proposer: impl Into<ProposerId>, decision: Decision) -> Self {
        let proposer = proposer.into();
        if let Some(entry) = self.decisions.iter_mut().find(|(id, _)| *id == proposer) {
            entry.1 = decision;
        } else {
            self.decisions.push((proposer, decision));
        }
        self
    }

    /// The decision this review carries for a proposer, if any
    pub fn decision_for(&self, proposer: &ProposerId) -> Option<Decision> {
        self.decisions
            .iter()
            .find(|(id, _)| id == proposer)
            .map(|(_, d)| *d)
    }

    /// Convenience lookup by string identity
    pub fn decision_for_str(&self, proposer: &str) -> Option<Decision> {
        self.decisions
            .iter()
            .find(|(id, _)| id.as_str() == proposer)
            .map(|(_, d)| *d)
    }

    /// All decisions in the order they were recorded
    pub fn decisions(&self) -> impl Iterator<Item = (&ProposerId, Decision)> {
        self.decisions.iter().map(|(id, d)| (id, *d))
    }

    /// Objections addressed to one proposer
    pub fn objections_for(&self, proposer: &ProposerId) -> impl Iterator<Item = &Objection> {
        self.objections.iter().filter(move |o| &o.proposer == proposer)
    }

    /// True when the review carries neither objections nor decisions
    pub fn is_empty(&self) -> bool {
        self.objections.is_empty() && self.decisions.is_empty()
    }
}

/// What a turn contributed to the debate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "body")]
pub enum TurnContent {
    /// A proposer's (initial or revised) findings
    Findings(FindingSet),
    /// The challenger's objections and decisions
    Review(ChallengeReview),
}

impl TurnContent {
    /// Short kind label used in logs and transcripts
    pub fn kind(&self) -> &'static str {
        match self {
            TurnContent::Findings(_) => "findings",
            TurnContent::Review(_) => "review",
        }
    }

    pub fn as_findings(&self) -> Option<&FindingSet> {
        match self {
            TurnContent::Findings(set) => Some(set),
            TurnContent::Review(_) => None,
        }
    }

    pub fn as_review(&self) -> Option<&ChallengeReview> {
        match self {
            TurnContent::Review(review) => Some(review),
            TurnContent::Findings(_) => None,
        }
    }
}

/// One immutable entry in the conversation record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Position in the log, 1-indexed
    pub seq: u64,
    /// Who spoke
    pub speaker: Speaker,
    /// What they contributed
    pub content: TurnContent,
}

/// The ordered conversation record of one debate session
///
/// Strictly append-only: turns are never mutated, removed, or reordered,
/// and sequence numbers are assigned by the log itself. Everything the
/// coordinator decides is derivable from this record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct TurnLog {
    turns: Vec<Turn>,
}

impl TurnLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn, assigning the next sequence number
    pub fn append(&mut self, speaker: Speaker, content: TurnContent) -> &Turn {
        let seq = self.turns.len() as u64 + 1;
        self.turns.push(Turn {
            seq,
            speaker,
            content,
        });
        self.turns.last().expect("just pushed")
    }

    /// Number of turns recorded so far
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// All turns in sequence order
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The most recent turn, if any
    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Whether a proposer has produced at least one findings turn
    pub fn has_spoken(&self, proposer: &ProposerId) -> bool {
        self.turns
            .iter()
            .any(|t| t.speaker.proposer() == Some(proposer))
    }

    /// The latest findings produced by a proposer, if any
    pub fn latest_findings_of(&self, proposer: &ProposerId) -> Option<&FindingSet> {
        self.turns
            .iter()
            .rev()
            .filter(|t| t.speaker.proposer() == Some(proposer))
            .find_map(|t| t.content.as_findings())
    }

    /// Objections the challenger has raised against a proposer, oldest first
    pub fn objections_against<'a>(
        &'a self,
        proposer: &'a ProposerId,
    ) -> impl Iterator<Item = &'a Objection> {
        self.turns
            .iter()
            .filter_map(|t| t.content.as_review())
            .flat_map(move |review| review.objections_for(proposer))
    }

    /// Sequence number of the most recent proposer turn
    pub fn last_proposer_seq(&self) -> Option<u64> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.speaker.proposer().is_some())
            .map(|t| t.seq)
    }

    /// Sequence number of the most recent challenger turn
    pub fn last_challenger_seq(&self) -> Option<u64> {
        self.turns
            .iter()
            .rev()
            .find(|t| t.speaker.is_challenger())
            .map(|t| t.seq)
    }
}
