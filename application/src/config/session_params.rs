//! Session parameters - debate loop control
//!
//! [`SessionParams`] groups the static parameters that control the debate
//! loop in [`RunSessionUseCase`](crate::use_cases::run_session::RunSessionUseCase).
//! These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Debate loop control parameters
///
/// The turn budget is the hard cap on turns per team session; retries and
/// the generation timeout govern how patient the loop is with a single
/// speaker before giving up on the whole team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionParams {
    /// Maximum turns in one team session (forced termination after this)
    pub turn_budget: usize,
    /// Retries per turn after a malformed or timed-out generation
    pub max_retries: usize,
    /// Timeout for a single generation call; `None` waits indefinitely
    pub generation_timeout: Option<Duration>,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            turn_budget: 12,
            max_retries: 2,
            generation_timeout: Some(Duration::from_secs(120)),
        }
    }
}

impl SessionParams {
    // ==================== Builder Methods ====================

    pub fn with_turn_budget(mut self, budget: usize) -> Self {
        self.turn_budget = budget;
        self
    }

    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn with_generation_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.generation_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = SessionParams::default();
        assert_eq!(params.turn_budget, 12);
        assert_eq!(params.max_retries, 2);
        assert!(params.generation_timeout.is_some());
    }

    #[test]
    fn test_builder() {
        let params = SessionParams::default()
            .with_turn_budget(3)
            .with_max_retries(0)
            .with_generation_timeout(None);

        assert_eq!(params.turn_budget, 3);
        assert_eq!(params.max_retries, 0);
        assert!(params.generation_timeout.is_none());
    }
}
