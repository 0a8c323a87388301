//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate session.

use panel_domain::{SessionResult, Speaker, TeamKind, Turn};

/// Callback for progress updates during debate execution
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, structured logs, etc.)
pub trait DebateProgress: Send + Sync {
    /// Called when a team session starts
    fn on_session_start(&self, team: TeamKind, budget: usize);

    /// Called before a speaker is invoked for turn `seq`
    fn on_turn_start(&self, team: TeamKind, speaker: &Speaker, seq: usize);

    /// Called after a turn was appended to the log
    fn on_turn_complete(&self, team: TeamKind, turn: &Turn);

    /// Called when a generation attempt failed and will be retried
    fn on_retry(&self, team: TeamKind, speaker: &Speaker, attempt: usize, error: &str) {
        let _ = (team, speaker, attempt, error);
    }

    /// Called when a team session produced its result
    fn on_session_complete(&self, result: &SessionResult);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgress for NoProgress {
    fn on_session_start(&self, _team: TeamKind, _budget: usize) {}
    fn on_turn_start(&self, _team: TeamKind, _speaker: &Speaker, _seq: usize) {}
    fn on_turn_complete(&self, _team: TeamKind, _turn: &Turn) {}
    fn on_session_complete(&self, _result: &SessionResult) {}
}
