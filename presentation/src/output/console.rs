//! Console output formatter for evaluation results

use colored::Colorize;
use panel_domain::{AcceptanceStatus, EvaluationResult, SessionResult, TeamKind, TeamOutcome};

/// Formats evaluation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete evaluation result
    pub fn format(result: &EvaluationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n",
            "=== Applicant Evaluation ===".cyan().bold()
        ));

        for team in TeamKind::both() {
            output.push('\n');
            output.push_str(&Self::format_team(result.outcome(team)));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Overall:".cyan().bold(),
            if result.is_fully_complete() {
                "complete".green().to_string()
            } else {
                "partial".yellow().to_string()
            }
        ));

        output
    }

    /// Format one team's outcome
    fn format_team(outcome: &TeamOutcome) -> String {
        let mut output = String::new();
        let title = format!("── {} ──", outcome.team());

        match outcome {
            TeamOutcome::Completed(session) => {
                output.push_str(&format!(
                    "{}  {}\n",
                    title.yellow().bold(),
                    Self::completion_tag(session)
                ));
                for proposal in &session.proposals {
                    output.push_str(&format!(
                        "\n  {} {} ({})\n",
                        Self::status_marker(proposal.status),
                        proposal.proposer.to_string().bold(),
                        proposal.status
                    ));
                    if proposal.findings.is_empty() {
                        output.push_str("    (no findings)\n");
                    }
                    for (label, description) in proposal.findings.iter() {
                        output.push_str(&format!("    {}: {}\n", label.bold(), description));
                    }
                }
            }
            TeamOutcome::Failed { reason, .. } => {
                output.push_str(&format!(
                    "{}  {}\n    {}\n",
                    title.red().bold(),
                    "failed".red(),
                    reason
                ));
            }
        }

        output
    }

    /// Per-team one-line summary
    pub fn format_summary(result: &EvaluationResult) -> String {
        let mut output = String::new();
        for team in TeamKind::both() {
            let line = match result.outcome(team) {
                TeamOutcome::Completed(session) => format!(
                    "{}: {} findings, {} turns, {}",
                    team,
                    session.finding_count(),
                    session.turns_used,
                    session.completion
                ),
                TeamOutcome::Failed { reason, .. } => format!("{}: failed ({})", team, reason),
            };
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    /// Format as JSON
    pub fn format_json(result: &EvaluationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn completion_tag(session: &SessionResult) -> String {
        if session.is_complete() {
            format!("{} in {} turns", "complete".green(), session.turns_used)
        } else {
            format!("{} at {} turns", "partial".yellow(), session.turns_used)
        }
    }

    fn status_marker(status: AcceptanceStatus) -> String {
        match status {
            AcceptanceStatus::Accepted => "●".green().to_string(),
            AcceptanceStatus::Rejected => "○".red().to_string(),
            AcceptanceStatus::Pending => "○".yellow().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_domain::{
        Completion, Finding, FindingSet, ProposalOutcome, ProposerId, SessionResult,
    };

    fn session(team: TeamKind) -> SessionResult {
        let mut findings = FindingSet::new();
        findings.insert(Finding::new("Calm", "Stays level during rush."));
        SessionResult::new(
            team,
            vec![ProposalOutcome::new(
                ProposerId::new("personal"),
                findings,
                AcceptanceStatus::Accepted,
            )],
            Completion::Complete,
            3,
        )
    }

    fn evaluation() -> EvaluationResult {
        EvaluationResult::new(
            TeamOutcome::Completed(session(TeamKind::Strengths)),
            TeamOutcome::failed(TeamKind::Weaknesses, "challenger unavailable"),
        )
    }

    #[test]
    fn test_full_format_mentions_both_teams() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&evaluation());

        assert!(text.contains("strengths"));
        assert!(text.contains("weaknesses"));
        assert!(text.contains("Calm"));
        assert!(text.contains("challenger unavailable"));
    }

    #[test]
    fn test_summary_is_one_line_per_team() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_summary(&evaluation());

        assert_eq!(text.trim().lines().count(), 2);
        assert!(text.contains("1 findings"));
        assert!(text.contains("failed"));
    }

    #[test]
    fn test_json_is_parseable() {
        let text = ConsoleFormatter::format_json(&evaluation());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["strengths"]["outcome"], "completed");
    }
}
