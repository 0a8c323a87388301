//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    /// A role produced a turn that is not valid for the current state of the
    /// debate: wrong speaker, content kind not matching the speaker, a
    /// decision referencing an unknown proposer, or an append after the
    /// session concluded. Always a defect in the caller, never recoverable.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("A debate needs at least one proposer")]
    EmptyRoster,

    #[error("Duplicate proposer identity: {0}")]
    DuplicateProposer(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }

    /// Check if this error is an internal invariant violation
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, DomainError::InvalidTransition(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_transition_display() {
        let error = DomainError::InvalidTransition("challenger spoke first".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid transition: challenger spoke first"
        );
    }

    #[test]
    fn test_is_cancelled_check() {
        assert!(DomainError::Cancelled.is_cancelled());
        assert!(!DomainError::EmptyRoster.is_cancelled());
        assert!(!DomainError::InvalidTransition("x".to_string()).is_cancelled());
    }

    #[test]
    fn test_is_invalid_transition_check() {
        assert!(DomainError::InvalidTransition("x".to_string()).is_invalid_transition());
        assert!(!DomainError::Cancelled.is_invalid_transition());
    }
}
