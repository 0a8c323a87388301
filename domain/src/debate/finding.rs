//! Findings produced by proposers

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One labeled finding about the applicant
///
/// # Example
///
/// ```
/// use panel_domain::Finding;
///
/// let f = Finding::new("Leadership", "Ran a brigade of twelve for four years.");
/// assert_eq!(f.label(), "Leadership");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    label: String,
    description: String,
}

impl Finding {
    /// Create a new finding
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }

    /// The label identifying this finding within one proposer's output
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The free-text description
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A proposer's current set of findings, keyed by label
///
/// Labels are unique within one set; inserting a finding with an existing
/// label replaces the previous description. Order is irrelevant, and the
/// set serializes as a plain JSON object, the same shape proposers are
/// asked to produce.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FindingSet {
    entries: BTreeMap<String, String>,
}

impl FindingSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a finding, replacing any previous finding with the same label
    ///
    /// Returns the replaced description, if any.
    pub fn insert(&mut self, finding: Finding) -> Option<String> {
        self.entries.insert(finding.label, finding.description)
    }

    /// Look up a description by label
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    /// Number of findings in the set
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (label, description) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(label, desc)| (label.as_str(), desc.as_str()))
    }

    /// Labels currently in the set
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl FromIterator<Finding> for FindingSet {
    fn from_iter<I: IntoIterator<Item = Finding>>(iter: I) -> Self {
        let mut set = FindingSet::new();
        for finding in iter {
            set.insert(finding);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut set = FindingSet::new();
        set.insert(Finding::new("Creativity", "Invents seasonal menus."));

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("Creativity"), Some("Invents seasonal menus."));
        assert_eq!(set.get("Missing"), None);
    }

    #[test]
    fn test_insert_replaces_same_label() {
        let mut set = FindingSet::new();
        set.insert(Finding::new("Stamina", "Long shifts."));
        let replaced = set.insert(Finding::new("Stamina", "Handles double shifts."));

        assert_eq!(replaced.as_deref(), Some("Long shifts."));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("Stamina"), Some("Handles double shifts."));
    }

    #[test]
    fn test_from_iterator() {
        let set: FindingSet = vec![
            Finding::new("A", "first"),
            Finding::new("B", "second"),
        ]
        .into_iter()
        .collect();

        let labels: Vec<_> = set.labels().collect();
        assert_eq!(labels, vec!["A", "B"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut set = FindingSet::new();
        set.insert(Finding::new("Knife skills", "Classically trained."));

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"Knife skills":"Classically trained."}"#);
    }

    #[test]
    fn test_deserializes_from_object() {
        let set: FindingSet =
            serde_json::from_str(r#"{"Pace": "Slow plating", "Temper": "Short fuse"}"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Temper"), Some("Short fuse"));
    }
}
