//! Team and role identities (Value Objects)

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Which side of the evaluation a debate team argues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamKind {
    /// Findings in favor of the applicant
    Strengths,
    /// Findings against the applicant
    Weaknesses,
}

impl TeamKind {
    /// Get the string identifier for this team
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamKind::Strengths => "strengths",
            TeamKind::Weaknesses => "weaknesses",
        }
    }

    /// Singular noun used when talking about one finding of this team
    pub fn finding_noun(&self) -> &'static str {
        match self {
            TeamKind::Strengths => "strength",
            TeamKind::Weaknesses => "weakness",
        }
    }

    /// Both teams, in the order they are reported
    pub fn both() -> [TeamKind; 2] {
        [TeamKind::Strengths, TeamKind::Weaknesses]
    }
}

impl std::fmt::Display for TeamKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of one proposer within a team (Value Object)
///
/// Proposer identities double as the evaluation dimension they cover
/// (e.g. "personal", "experience") and must be unique within a roster.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposerId(String);

impl ProposerId {
    /// Create a new proposer identity
    ///
    /// # Panics
    /// Panics if the identity is empty or only whitespace
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        assert!(!id.trim().is_empty(), "Proposer identity cannot be empty");
        Self(id)
    }

    /// Get the identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProposerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProposerId {
    fn from(s: &str) -> Self {
        ProposerId::new(s)
    }
}

/// A speaker in the debate: one of the proposers, or the challenger
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "role", content = "id")]
pub enum Speaker {
    Proposer(ProposerId),
    Challenger,
}

impl Speaker {
    /// Get the proposer identity if this speaker is a proposer
    pub fn proposer(&self) -> Option<&ProposerId> {
        match self {
            Speaker::Proposer(id) => Some(id),
            Speaker::Challenger => None,
        }
    }

    /// Check if this speaker is the challenger
    pub fn is_challenger(&self) -> bool {
        matches!(self, Speaker::Challenger)
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speaker::Proposer(id) => write!(f, "proposer:{}", id),
            Speaker::Challenger => write!(f, "challenger"),
        }
    }
}

/// The proposers of one team, in join order
///
/// Join order matters: it is the tie-break used by the coordinator when
/// several proposers are waiting to speak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposerRoster {
    members: Vec<ProposerId>,
}

impl ProposerRoster {
    /// Create a roster from proposer identities in join order
    ///
    /// Fails on an empty roster or a duplicate identity.
    pub fn new(members: Vec<ProposerId>) -> Result<Self, DomainError> {
        if members.is_empty() {
            return Err(DomainError::EmptyRoster);
        }
        for (i, id) in members.iter().enumerate() {
            if members[..i].contains(id) {
                return Err(DomainError::DuplicateProposer(id.to_string()));
            }
        }
        Ok(Self { members })
    }

    /// The standard two-dimension roster used for applicant evaluation
    pub fn personal_and_experience() -> Self {
        Self {
            members: vec![ProposerId::new("personal"), ProposerId::new("experience")],
        }
    }

    /// Members in join order
    pub fn members(&self) -> &[ProposerId] {
        &self.members
    }

    /// Number of proposers on the roster
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// A roster is never empty, but clippy wants the pair
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Check whether an identity belongs to this roster
    pub fn contains(&self, id: &ProposerId) -> bool {
        self.members.contains(id)
    }

    /// Iterate members in join order
    pub fn iter(&self) -> impl Iterator<Item = &ProposerId> {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_kind_as_str() {
        assert_eq!(TeamKind::Strengths.as_str(), "strengths");
        assert_eq!(TeamKind::Weaknesses.finding_noun(), "weakness");
    }

    #[test]
    fn test_proposer_id_display() {
        let id = ProposerId::new("personal");
        assert_eq!(id.to_string(), "personal");
        assert_eq!(id.as_str(), "personal");
    }

    #[test]
    #[should_panic]
    fn test_empty_proposer_id_panics() {
        ProposerId::new("  ");
    }

    #[test]
    fn test_speaker_accessors() {
        let p = Speaker::Proposer(ProposerId::new("experience"));
        assert_eq!(p.proposer().unwrap().as_str(), "experience");
        assert!(!p.is_challenger());
        assert!(Speaker::Challenger.is_challenger());
    }

    #[test]
    fn test_roster_join_order() {
        let roster = ProposerRoster::personal_and_experience();
        let names: Vec<_> = roster.iter().map(|id| id.as_str()).collect();
        assert_eq!(names, vec!["personal", "experience"]);
    }

    #[test]
    fn test_roster_rejects_empty() {
        assert!(matches!(
            ProposerRoster::new(vec![]),
            Err(DomainError::EmptyRoster)
        ));
    }

    #[test]
    fn test_roster_rejects_duplicates() {
        let result = ProposerRoster::new(vec![
            ProposerId::new("personal"),
            ProposerId::new("personal"),
        ]);
        assert!(matches!(result, Err(DomainError::DuplicateProposer(_))));
    }

    #[test]
    fn test_speaker_serialization() {
        let speaker = Speaker::Proposer(ProposerId::new("personal"));
        let json = serde_json::to_string(&speaker).unwrap();
        assert_eq!(json, r#"{"role":"proposer","id":"personal"}"#);

        let challenger = serde_json::to_string(&Speaker::Challenger).unwrap();
        assert_eq!(challenger, r#"{"role":"challenger"}"#);
    }
}
