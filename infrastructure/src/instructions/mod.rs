//! Instruction repository adapters
//!
//! Supplies the company's evaluation instruction text per (team, dimension)
//! pair. Text files under the configured directory win; pairs without a
//! file fall back to the built-in chef evaluation defaults.

use panel_application::{InstructionError, InstructionRepository};
use panel_domain::{ProposerId, TeamKind};
use std::path::PathBuf;
use tracing::debug;

/// Built-in instruction text for chef applicant evaluation
///
/// Used whenever no instruction file is configured for a pair. Keyed by
/// the standard roster dimensions ("personal", "experience").
fn builtin(team: TeamKind, dimension: &str) -> Option<&'static str> {
    match (team, dimension) {
        (TeamKind::Strengths, "personal") => Some(
            "Look for personal qualities that hold up during service: calm under \
             pressure, communication with the brigade, reliability, appetite to \
             learn. Cite the part of the summary each quality comes from.",
        ),
        (TeamKind::Strengths, "experience") => Some(
            "Look for professional experience that transfers to this kitchen: \
             years on the line, cuisines and stations covered, leadership of a \
             team, supplier and menu responsibility. Prefer verifiable facts \
             over self-description.",
        ),
        (TeamKind::Weaknesses, "personal") => Some(
            "Look for personal risks for a kitchen role: signs of friction with \
             colleagues, inflexibility about schedules, overclaiming, gaps the \
             summary glosses over. Only raise what the summary supports.",
        ),
        (TeamKind::Weaknesses, "experience") => Some(
            "Look for experience gaps relevant to this kitchen: missing \
             stations, short tenures, no volume service, no menu or cost \
             responsibility. Distinguish missing evidence from evidence of \
             absence.",
        ),
        _ => None,
    }
}

/// File-backed instruction repository with built-in defaults
///
/// When a directory is configured, a pair's text is read from
/// `<dir>/<team>_<dimension>.txt`; otherwise the built-in chef defaults
/// apply. A dimension with neither source is an error, since a proposer
/// cannot debate without instructions.
pub struct FileInstructionRepository {
    dir: Option<PathBuf>,
}

impl FileInstructionRepository {
    /// Repository using only the built-in defaults
    pub fn builtin_only() -> Self {
        Self { dir: None }
    }

    /// Repository reading overrides from a directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// Construct from an optional configured directory
    pub fn from_config(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }

    fn file_path(&self, team: TeamKind, dimension: &ProposerId) -> Option<PathBuf> {
        self.dir
            .as_ref()
            .map(|dir| dir.join(format!("{}_{}.txt", team, dimension)))
    }
}

impl InstructionRepository for FileInstructionRepository {
    fn instructions_for(
        &self,
        team: TeamKind,
        dimension: &ProposerId,
    ) -> Result<String, InstructionError> {
        if let Some(path) = self.file_path(team, dimension)
            && path.exists()
        {
            debug!("Loading instructions from {}", path.display());
            return std::fs::read_to_string(&path)
                .map(|text| text.trim().to_string())
                .map_err(|e| {
                    InstructionError::Unreadable(format!("{}: {}", path.display(), e))
                });
        }

        builtin(team, dimension.as_str())
            .map(str::to_string)
            .ok_or_else(|| InstructionError::NotFound {
                team,
                dimension: dimension.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_all_standard_pairs() {
        let repo = FileInstructionRepository::builtin_only();
        for team in TeamKind::both() {
            for dimension in ["personal", "experience"] {
                let text = repo
                    .instructions_for(team, &ProposerId::new(dimension))
                    .unwrap();
                assert!(!text.is_empty(), "{team}/{dimension} missing");
            }
        }
    }

    #[test]
    fn test_unknown_dimension_is_not_found() {
        let repo = FileInstructionRepository::builtin_only();
        let err = repo
            .instructions_for(TeamKind::Strengths, &ProposerId::new("astrology"))
            .unwrap_err();
        assert!(matches!(err, InstructionError::NotFound { .. }));
    }

    #[test]
    fn test_file_override_wins_over_builtin() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("strengths_personal.txt"),
            "Custom personal guidance.\n",
        )
        .unwrap();

        let repo = FileInstructionRepository::with_dir(dir.path());
        let text = repo
            .instructions_for(TeamKind::Strengths, &ProposerId::new("personal"))
            .unwrap();
        assert_eq!(text, "Custom personal guidance.");

        // Pairs without a file still fall back to the defaults.
        let fallback = repo
            .instructions_for(TeamKind::Weaknesses, &ProposerId::new("personal"))
            .unwrap();
        assert!(fallback.contains("kitchen"));
    }
}
