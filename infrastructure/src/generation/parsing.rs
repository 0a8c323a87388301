//! Model response parsing for debate turns.
//!
//! These functions extract structured findings and review decisions from
//! free-form model responses. They are pure text processing: no I/O, no
//! process management.
//!
//! Two response styles are understood:
//!
//! 1. **JSON** (what the prompts ask for): a findings object, or a review
//!    object with `objections` and `decisions` maps.
//! 2. **Keyword convention** (review fallback): `OKAY <proposer>` accepts
//!    and `REJECT <proposer>` rejects, anywhere in the text.
//!
//! Anything ambiguous is a parse failure, never a guess: the session
//! loop retries a failed parse, and a wrong guess would poison the log.

use panel_domain::{ChallengeReview, Decision, Finding, FindingSet, ProposerId};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Extract the outermost JSON object from a response, tolerating prose
/// and markdown fences around it.
pub fn extract_json_object(response: &str) -> Option<&str> {
    let start = response.find('{')?;
    let end = response.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&response[start..=end])
}

/// Parse a proposer response into a findings set.
///
/// Expects a JSON object mapping labels to descriptions, as requested by
/// the proposer prompts. Non-string descriptions are an error.
pub fn parse_findings(response: &str) -> Result<FindingSet, String> {
    let json_str =
        extract_json_object(response).ok_or_else(|| "no JSON object in response".to_string())?;

    let entries: BTreeMap<String, String> = serde_json::from_str(json_str)
        .map_err(|e| format!("findings object malformed: {e}"))?;

    Ok(entries
        .into_iter()
        .map(|(label, description)| Finding::new(label, description))
        .collect())
}

/// Raw JSON shape of a challenger review
#[derive(Debug, Deserialize)]
struct RawReview {
    #[serde(default)]
    objections: BTreeMap<String, String>,
    #[serde(default)]
    decisions: BTreeMap<String, String>,
}

/// Parse a challenger response into a review.
///
/// Tries the JSON shape first; responses without a parsable JSON object
/// fall back to the `OKAY <proposer>` / `REJECT <proposer>` keyword
/// convention. Decisions referencing identities outside `known` are a
/// parse failure so the turn is retried rather than recorded.
pub fn parse_review(response: &str, known: &[ProposerId]) -> Result<ChallengeReview, String> {
    if let Some(json_str) = extract_json_object(response)
        && let Ok(raw) = serde_json::from_str::<RawReview>(json_str)
    {
        return structured_review(raw, known);
    }

    keyword_review(response, known)
}

fn structured_review(raw: RawReview, known: &[ProposerId]) -> Result<ChallengeReview, String> {
    if raw.objections.is_empty() && raw.decisions.is_empty() {
        return Err("review carries neither objections nor decisions".to_string());
    }

    let mut review = ChallengeReview::new();

    for (name, content) in raw.objections {
        let proposer = lookup(&name, known)
            .ok_or_else(|| format!("objection references unknown proposer '{name}'"))?;
        review = review.with_objection(proposer.clone(), content);
    }

    for (name, word) in raw.decisions {
        let proposer = lookup(&name, known)
            .ok_or_else(|| format!("decision references unknown proposer '{name}'"))?;
        let decision = parse_decision_word(&word)
            .ok_or_else(|| format!("unrecognized decision '{word}' for '{name}'"))?;
        review = review.decide(proposer.clone(), decision);
    }

    Ok(review)
}

/// Find a known proposer by name, ignoring case and surrounding whitespace.
fn lookup<'a>(name: &str, known: &'a [ProposerId]) -> Option<&'a ProposerId> {
    let name = name.trim();
    known
        .iter()
        .find(|id| id.as_str().eq_ignore_ascii_case(name))
}

/// Map a decision word to the structured signal.
///
/// Conservative: anything outside the known accept/reject vocabulary is
/// `None`, which surfaces as a parse failure.
fn parse_decision_word(word: &str) -> Option<Decision> {
    match word.trim().to_lowercase().as_str() {
        "accept" | "accepted" | "approve" | "approved" | "ok" | "okay" => Some(Decision::Accept),
        "reject" | "rejected" | "revise" | "deny" | "denied" => Some(Decision::Reject),
        _ => None,
    }
}

/// Keyword fallback for the `OKAY <proposer>` convention.
///
/// The most recent mention wins when a response both accepts and rejects
/// the same proposer.
fn keyword_review(response: &str, known: &[ProposerId]) -> Result<ChallengeReview, String> {
    let upper = response.to_uppercase();
    let mut review = ChallengeReview::new();
    let mut decided = false;

    for proposer in known {
        let name = proposer.as_str().to_uppercase();
        let accept_at = upper.rfind(&format!("OKAY {name}"));
        let reject_at = upper.rfind(&format!("REJECT {name}"));

        let decision = match (accept_at, reject_at) {
            (Some(a), Some(r)) => {
                if a > r {
                    Decision::Accept
                } else {
                    Decision::Reject
                }
            }
            (Some(_), None) => Decision::Accept,
            (None, Some(_)) => Decision::Reject,
            (None, None) => continue,
        };

        review = review.decide(proposer.clone(), decision);
        decided = true;
    }

    if !decided {
        return Err("no parsable decision in response".to_string());
    }
    Ok(review)
}
