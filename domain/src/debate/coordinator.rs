//! The coordinator state machine
//!
//! Drives turn-taking for one debate session. The coordinator owns the turn
//! log, validates every append, and derives the next speaker (or the
//! decision to conclude) from the record alone. There is no hidden state.

use super::consensus::ConsensusState;
use super::result::{Completion, ProposalOutcome, SessionResult};
use super::team::{ProposerId, ProposerRoster, Speaker, TeamKind};
use super::turn::{Turn, TurnContent, TurnLog};
use crate::core::error::DomainError;

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebatePhase {
    /// Not every proposer has produced a first findings turn
    AwaitingProposers,
    /// All proposers have spoken but the challenger has not reviewed the
    /// latest round
    AwaitingChallenge,
    /// The challenger has reviewed and at least one proposal is still open
    Negotiating,
    /// Terminal: consensus reached or the turn budget ran out
    Concluded,
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebatePhase::AwaitingProposers => write!(f, "awaiting-proposers"),
            DebatePhase::AwaitingChallenge => write!(f, "awaiting-challenge"),
            DebatePhase::Negotiating => write!(f, "negotiating"),
            DebatePhase::Concluded => write!(f, "concluded"),
        }
    }
}

/// What the coordinator wants to happen next
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextAction {
    /// Invoke this speaker and record its turn
    Speak(Speaker),
    /// The session is over; build the result with this completion flag
    Conclude(Completion),
}

/// State machine deciding next speaker and termination for one session
///
/// The transition rule is evaluated against the log after every append,
/// in priority order:
///
/// 1. Turn count reached the budget → conclude (forced).
/// 2. A proposer has never spoken → that proposer speaks (join order).
/// 3. The challenger has not spoken since the latest proposer turn → the
///    challenger speaks.
/// 4. Every proposal is accepted → conclude.
/// 5. Otherwise → the first open proposer (join order) speaks.
///
/// An accepted proposer is never selected again; the total turn count is
/// bounded by the budget and, under a cooperative challenger, by
/// `2 * proposer_count + challenge_rounds`.
///
/// # Example
///
/// ```
/// use panel_domain::{
///     Coordinator, FindingSet, NextAction, ProposerRoster, Speaker, TurnContent,
/// };
///
/// let mut coordinator = Coordinator::new(ProposerRoster::personal_and_experience(), 12);
///
/// // Join order decides who opens the debate.
/// let NextAction::Speak(first) = coordinator.next_action() else {
///     panic!("fresh session cannot conclude");
/// };
/// assert_eq!(first, Speaker::Proposer("personal".into()));
///
/// coordinator
///     .record(first, TurnContent::Findings(FindingSet::new()))
///     .unwrap();
/// assert_eq!(
///     coordinator.next_action(),
///     NextAction::Speak(Speaker::Proposer("experience".into()))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Coordinator {
    roster: ProposerRoster,
    budget: usize,
    log: TurnLog,
}

impl Coordinator {
    /// Create a coordinator for one session
    ///
    /// `budget` is the hard cap on total turns; a zero budget is clamped to
    /// one so the session can always conclude through the normal path.
    pub fn new(roster: ProposerRoster, budget: usize) -> Self {
        Self {
            roster,
            budget: budget.max(1),
            log: TurnLog::new(),
        }
    }

    /// The conversation record so far
    pub fn log(&self) -> &TurnLog {
        &self.log
    }

    /// The proposers of this session, in join order
    pub fn roster(&self) -> &ProposerRoster {
        &self.roster
    }

    /// The configured turn budget
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Derive the current consensus view from the log
    pub fn consensus(&self) -> ConsensusState {
        ConsensusState::derive(&self.log, &self.roster)
    }

    /// The current phase, derived from the log
    pub fn phase(&self) -> DebatePhase {
        if self.log.len() >= self.budget {
            return DebatePhase::Concluded;
        }
        if self.first_silent_proposer().is_some() {
            return DebatePhase::AwaitingProposers;
        }
        if self.challenge_pending() {
            return DebatePhase::AwaitingChallenge;
        }
        if self.consensus().all_accepted() {
            DebatePhase::Concluded
        } else {
            DebatePhase::Negotiating
        }
    }

    /// The next speaker, or the decision to conclude
    pub fn next_action(&self) -> NextAction {
        match self.phase() {
            DebatePhase::Concluded => NextAction::Conclude(self.completion()),
            DebatePhase::AwaitingProposers => {
                let proposer = self
                    .first_silent_proposer()
                    .expect("phase implies a silent proposer")
                    .clone();
                NextAction::Speak(Speaker::Proposer(proposer))
            }
            DebatePhase::AwaitingChallenge => NextAction::Speak(Speaker::Challenger),
            DebatePhase::Negotiating => {
                let proposer = self
                    .consensus()
                    .first_open()
                    .expect("phase implies an open proposal")
                    .clone();
                NextAction::Speak(Speaker::Proposer(proposer))
            }
        }
    }

    /// Whether the session has reached its terminal phase
    pub fn is_concluded(&self) -> bool {
        self.phase() == DebatePhase::Concluded
    }

    /// Validate and append one turn
    ///
    /// The speaker must be exactly the one selected by [`next_action`],
    /// the content kind must match the speaker, and review decisions may
    /// only reference roster members. Anything else is an
    /// [`DomainError::InvalidTransition`]: a defect in the caller, since
    /// the coordinator itself chose the speaker.
    ///
    /// [`next_action`]: Coordinator::next_action
    pub fn record(&mut self, speaker: Speaker, content: TurnContent) -> Result<&Turn, DomainError> {
        let expected = match self.next_action() {
            NextAction::Speak(expected) => expected,
            NextAction::Conclude(_) => {
                return Err(DomainError::InvalidTransition(
                    "session already concluded".to_string(),
                ));
            }
        };
        if speaker != expected {
            return Err(DomainError::InvalidTransition(format!(
                "expected {} to speak, got {}",
                expected, speaker
            )));
        }

        match (&speaker, &content) {
            (Speaker::Proposer(_), TurnContent::Findings(_)) => {}
            (Speaker::Challenger, TurnContent::Review(review)) => {
                for (proposer, _) in review.decisions() {
                    if !self.roster.contains(proposer) {
                        return Err(DomainError::InvalidTransition(format!(
                            "decision references unknown proposer {}",
                            proposer
                        )));
                    }
                }
                for objection in &review.objections {
                    if !self.roster.contains(&objection.proposer) {
                        return Err(DomainError::InvalidTransition(format!(
                            "objection references unknown proposer {}",
                            objection.proposer
                        )));
                    }
                }
            }
            (speaker, content) => {
                return Err(DomainError::InvalidTransition(format!(
                    "{} cannot produce {} content",
                    speaker,
                    content.kind()
                )));
            }
        }

        Ok(self.log.append(speaker, content))
    }

    /// Build the session result once the session has concluded
    ///
    /// Returns `None` while the session is still running. Latest findings
    /// are included for every proposer regardless of final status; a
    /// proposer that never spoke contributes an empty set.
    pub fn result(&self, team: TeamKind) -> Option<SessionResult> {
        if !self.is_concluded() {
            return None;
        }

        let consensus = self.consensus();
        let proposals = self
            .roster
            .iter()
            .map(|id| {
                ProposalOutcome::new(
                    id.clone(),
                    self.log.latest_findings_of(id).cloned().unwrap_or_default(),
                    consensus.status_of(id),
                )
            })
            .collect();

        Some(SessionResult::new(
            team,
            proposals,
            self.completion(),
            self.log.len(),
        ))
    }

    fn completion(&self) -> Completion {
        if self.consensus().all_accepted() {
            Completion::Complete
        } else {
            Completion::Partial
        }
    }

    fn first_silent_proposer(&self) -> Option<&ProposerId> {
        self.roster.iter().find(|id| !self.log.has_spoken(id))
    }

    /// True when the latest proposer turn has not yet been reviewed
    fn challenge_pending(&self) -> bool {
        let Some(proposer_seq) = self.log.last_proposer_seq() else {
            return false;
        };
        match self.log.last_challenger_seq() {
            Some(challenger_seq) => challenger_seq < proposer_seq,
            None => true,
        }
    }
}
