//! Applicant summary value object

use serde::{Deserialize, Serialize};

/// The applicant summary under evaluation (Value Object)
///
/// Every role in a debate receives the same summary; proposers extract
/// findings from it and the challenger tests those findings against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantSummary {
    content: String,
}

impl ApplicantSummary {
    /// Create a new summary
    ///
    /// # Panics
    /// Panics if the content is empty or only whitespace
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        assert!(
            !content.trim().is_empty(),
            "Applicant summary cannot be empty"
        );
        Self { content }
    }

    /// Try to create a new summary, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the summary content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for ApplicantSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl From<&str> for ApplicantSummary {
    fn from(s: &str) -> Self {
        ApplicantSummary::new(s)
    }
}

impl From<String> for ApplicantSummary {
    fn from(s: String) -> Self {
        ApplicantSummary::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_creation() {
        let s = ApplicantSummary::new("Ten years as sous-chef in a bistro.");
        assert_eq!(s.content(), "Ten years as sous-chef in a bistro.");
    }

    #[test]
    fn test_summary_from_str() {
        let s: ApplicantSummary = "Line cook, 3 years".into();
        assert_eq!(s.content(), "Line cook, 3 years");
    }

    #[test]
    #[should_panic]
    fn test_empty_summary_panics() {
        ApplicantSummary::new("   ");
    }

    #[test]
    fn test_try_new() {
        assert!(ApplicantSummary::try_new("").is_none());
        assert!(ApplicantSummary::try_new("chef").is_some());
    }
}
