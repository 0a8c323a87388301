//! Prompt templates for the debate flow
//!
//! The wording mirrors the evaluation workflow: proposers extract labeled
//! findings for their dimension, the challenger argues against them and
//! hands down explicit per-proposer verdicts. The structured-output
//! contract at the end of each prompt is what the generation adapter
//! parses; the core never sees the raw text.

use crate::debate::finding::FindingSet;
use crate::debate::team::{ProposerId, TeamKind};
use crate::debate::turn::Objection;

/// Templates for generating prompts at each debate turn
pub struct RolePromptTemplate;

impl RolePromptTemplate {
    /// System prompt for a proposer, parameterized by the team, the
    /// dimension the proposer covers, and the company's instruction text
    pub fn proposer_system(team: TeamKind, dimension: &ProposerId, instructions: &str) -> String {
        format!(
            r#"You are an agent evaluating the {dimension} {plural} of a job applicant.
Use the company's instructions for {dimension} {plural}:

{instructions}

Identify {dimension} {plural} based only on the applicant summary you are given.
Be concrete: every {noun} must be traceable to the summary."#,
            dimension = dimension,
            plural = team.as_str(),
            noun = team.finding_noun(),
            instructions = instructions,
        )
    }

    /// User prompt for a proposer's first findings turn
    pub fn proposer_query(team: TeamKind, summary: &str) -> String {
        format!(
            r#"Applicant Summary:
{summary}

Identify the {plural} for your dimension.

Output only a JSON object mapping a short label to a one-sentence description:
{{
    "Label 1": "Description",
    "Label 2": "Description"
}}

Do not include any text outside the JSON object."#,
            summary = summary,
            plural = team.as_str(),
        )
    }

    /// User prompt for a proposer revising after objections
    ///
    /// Carries the proposer's previous findings and every objection the
    /// challenger has addressed to it, oldest first.
    pub fn proposer_revision(
        team: TeamKind,
        summary: &str,
        previous: &FindingSet,
        objections: &[&Objection],
    ) -> String {
        let mut prompt = format!(
            r#"Applicant Summary:
{summary}

Your previous {plural}:
{previous}

The challenger raised these objections against your {plural}:
"#,
            summary = summary,
            plural = team.as_str(),
            previous = serde_json::to_string_pretty(previous).unwrap_or_default(),
        );

        for objection in objections {
            prompt.push_str(&format!("- {}\n", objection.content));
        }

        prompt.push_str(&format!(
            r#"
Revise your {plural} to address the objections: drop what you cannot
defend, sharpen what you can.

Output only the revised JSON object, same shape as before."#,
            plural = team.as_str(),
        ));

        prompt
    }

    /// System prompt for the challenger
    pub fn challenger_system(team: TeamKind) -> String {
        format!(
            r#"You are an agent responsible for critically evaluating the proposed
{plural} of a job applicant. Argue against the {plural} provided,
pointing out anything unsupported by the applicant summary. Be
constructive and aim for a thorough evaluation, but do not accept a
proposal you still have objections to."#,
            plural = team.as_str(),
        )
    }

    /// User prompt for a challenger review turn
    pub fn challenger_query(
        team: TeamKind,
        summary: &str,
        proposals: &[(ProposerId, FindingSet)],
    ) -> String {
        let mut prompt = format!(
            r#"Applicant Summary:
{summary}

Current {noun} proposals:
"#,
            summary = summary,
            noun = team.finding_noun(),
        );

        for (proposer, findings) in proposals {
            prompt.push_str(&format!(
                "\n--- {} ---\n{}\n",
                proposer,
                serde_json::to_string_pretty(findings).unwrap_or_default()
            ));
        }

        prompt.push_str(
            r#"
For each proposer, decide independently whether you accept its proposal.

Output only a JSON object of this shape:
{
    "objections": {
        "<proposer>": "Your argument against that proposer's findings"
    },
    "decisions": {
        "<proposer>": "accept" | "reject"
    }
}

Include a decision for every proposer listed above. Omit a proposer from
"objections" if you have nothing to argue. Do not include any text
outside the JSON object."#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::finding::Finding;

    #[test]
    fn test_proposer_system_mentions_dimension_and_instructions() {
        let prompt = RolePromptTemplate::proposer_system(
            TeamKind::Strengths,
            &ProposerId::new("personal"),
            "Value calm under pressure.",
        );
        assert!(prompt.contains("personal strengths"));
        assert!(prompt.contains("Value calm under pressure."));
    }

    #[test]
    fn test_proposer_query_demands_json_only() {
        let prompt = RolePromptTemplate::proposer_query(TeamKind::Weaknesses, "Summary text");
        assert!(prompt.contains("Summary text"));
        assert!(prompt.contains("weakness"));
        assert!(prompt.contains("JSON object"));
    }

    #[test]
    fn test_revision_includes_objections_in_order() {
        let mut previous = FindingSet::new();
        previous.insert(Finding::new("Grit", "Keeps calm."));
        let first = Objection::new("personal", "No evidence of calm.");
        let second = Objection::new("personal", "Still asserted.");

        let prompt = RolePromptTemplate::proposer_revision(
            TeamKind::Strengths,
            "Summary",
            &previous,
            &[&first, &second],
        );

        let first_at = prompt.find("No evidence of calm.").unwrap();
        let second_at = prompt.find("Still asserted.").unwrap();
        assert!(first_at < second_at);
        assert!(prompt.contains("Grit"));
    }

    #[test]
    fn test_challenger_query_lists_every_proposal() {
        let mut personal = FindingSet::new();
        personal.insert(Finding::new("Calm", "Stays level."));
        let mut experience = FindingSet::new();
        experience.insert(Finding::new("Tenure", "Ten years."));

        let prompt = RolePromptTemplate::challenger_query(
            TeamKind::Strengths,
            "Summary",
            &[
                (ProposerId::new("personal"), personal),
                (ProposerId::new("experience"), experience),
            ],
        );

        assert!(prompt.contains("--- personal ---"));
        assert!(prompt.contains("--- experience ---"));
        assert!(prompt.contains("\"decisions\""));
    }
}
