//! Evaluate Applicant use case
//!
//! Runs the strengths and weaknesses debates for one applicant and merges
//! both outcomes into the final evaluation. The two teams are independent:
//! they run on separate tasks, share no mutable state, and one team's
//! failure never aborts the other.

use crate::config::SessionParams;
use crate::ports::generation::GenerationService;
use crate::ports::instructions::InstructionRepository;
use crate::ports::progress::{DebateProgress, NoProgress};
use crate::ports::transcript::{NoTranscriptLogger, TranscriptLogger};
use crate::use_cases::run_session::{
    RunSessionError, RunSessionInput, RunSessionUseCase,
};
use panel_domain::{
    ApplicantSummary, EvaluationResult, ProposerRoster, SessionResult, TeamKind, TeamOutcome,
    ToolDefinition,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that abort the whole evaluation
///
/// Per-team failures are not errors here; they are reported inside
/// [`EvaluationResult`] so the sibling team's outcome survives.
#[derive(Error, Debug)]
pub enum EvaluateError {
    #[error("Operation cancelled")]
    Cancelled,
}

/// Input for the EvaluateApplicant use case
#[derive(Debug, Clone)]
pub struct EvaluateInput {
    /// The applicant under evaluation
    pub summary: ApplicantSummary,
    /// Proposers used by both teams, in join order
    pub roster: ProposerRoster,
}

impl EvaluateInput {
    pub fn new(summary: impl Into<ApplicantSummary>) -> Self {
        Self {
            summary: summary.into(),
            roster: ProposerRoster::personal_and_experience(),
        }
    }

    pub fn with_roster(mut self, roster: ProposerRoster) -> Self {
        self.roster = roster;
        self
    }
}

/// Use case for evaluating one applicant with both debate teams
pub struct EvaluateApplicantUseCase<G: GenerationService + 'static> {
    generation: Arc<G>,
    instructions: Arc<dyn InstructionRepository>,
    params: SessionParams,
    tools: Vec<ToolDefinition>,
    progress: Arc<dyn DebateProgress>,
    transcript: Arc<dyn TranscriptLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: GenerationService + 'static> EvaluateApplicantUseCase<G> {
    pub fn new(generation: Arc<G>, instructions: Arc<dyn InstructionRepository>) -> Self {
        Self {
            generation,
            instructions,
            params: SessionParams::default(),
            tools: Vec::new(),
            progress: Arc::new(NoProgress),
            transcript: Arc::new(NoTranscriptLogger),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: SessionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn DebateProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = transcript;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the full evaluation: both teams concurrently, outcomes merged
    pub async fn execute(&self, input: EvaluateInput) -> Result<EvaluationResult, EvaluateError> {
        info!("Evaluating applicant with both teams");

        let strengths = self.spawn_team(TeamKind::Strengths, &input);
        let weaknesses = self.spawn_team(TeamKind::Weaknesses, &input);

        let (strengths, weaknesses) = tokio::join!(strengths, weaknesses);

        let strengths = Self::team_outcome(TeamKind::Strengths, strengths)?;
        let weaknesses = Self::team_outcome(TeamKind::Weaknesses, weaknesses)?;

        Ok(EvaluationResult::new(strengths, weaknesses))
    }

    /// Spawn one team's session on its own task
    fn spawn_team(
        &self,
        team: TeamKind,
        input: &EvaluateInput,
    ) -> JoinHandle<Result<SessionResult, RunSessionError>> {
        let mut use_case =
            RunSessionUseCase::new(Arc::clone(&self.generation), Arc::clone(&self.instructions))
                .with_params(self.params.clone())
                .with_tools(self.tools.clone());
        if let Some(token) = &self.cancellation_token {
            use_case = use_case.with_cancellation(token.clone());
        }

        let progress = Arc::clone(&self.progress);
        let transcript = Arc::clone(&self.transcript);
        let run_input = RunSessionInput::new(team, input.roster.clone(), input.summary.clone());

        tokio::spawn(async move {
            use_case
                .execute_with_observers(run_input, progress.as_ref(), transcript.as_ref())
                .await
        })
    }

    /// Fold one team's task result into a reported outcome
    fn team_outcome(
        team: TeamKind,
        joined: Result<Result<SessionResult, RunSessionError>, tokio::task::JoinError>,
    ) -> Result<TeamOutcome, EvaluateError> {
        match joined {
            Ok(Ok(result)) => Ok(TeamOutcome::Completed(result)),
            Ok(Err(error)) if error.is_cancelled() => Err(EvaluateError::Cancelled),
            Ok(Err(error)) => {
                warn!("{} team failed: {}", team, error);
                Ok(TeamOutcome::failed(team, error.to_string()))
            }
            Err(join_error) => {
                warn!("{} team task aborted: {}", team, join_error);
                Ok(TeamOutcome::failed(
                    team,
                    format!("team task aborted: {join_error}"),
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::generation::{GenerationError, RoleContext};
    use crate::ports::instructions::InstructionError;
    use async_trait::async_trait;
    use panel_domain::{ChallengeReview, Finding, FindingSet, ProposerId, Speaker, TurnContent};

    struct StaticInstructions;

    impl InstructionRepository for StaticInstructions {
        fn instructions_for(
            &self,
            _team: TeamKind,
            dimension: &ProposerId,
        ) -> Result<String, InstructionError> {
            Ok(format!("Evaluate the {} dimension.", dimension))
        }
    }

    /// Backend that proposes one finding per dimension and accepts
    /// everything on review; optionally fails one whole team.
    struct AgreeableGeneration {
        failing_team: Option<TeamKind>,
    }

    #[async_trait]
    impl GenerationService for AgreeableGeneration {
        async fn generate(&self, context: &RoleContext) -> Result<TurnContent, GenerationError> {
            if Some(context.team) == self.failing_team {
                return Err(GenerationError::Backend("team backend down".to_string()));
            }
            match &context.speaker {
                Speaker::Proposer(id) => {
                    let mut set = FindingSet::new();
                    set.insert(Finding::new(
                        format!("{} finding", id),
                        format!("Derived from: {}", context.summary.content()),
                    ));
                    Ok(TurnContent::Findings(set))
                }
                Speaker::Challenger => {
                    let mut review = ChallengeReview::new();
                    for (id, _) in &context.proposals {
                        review = review.accept(id.clone());
                    }
                    Ok(TurnContent::Review(review))
                }
            }
        }
    }

    fn use_case(
        failing_team: Option<TeamKind>,
    ) -> EvaluateApplicantUseCase<AgreeableGeneration> {
        EvaluateApplicantUseCase::new(
            Arc::new(AgreeableGeneration { failing_team }),
            Arc::new(StaticInstructions),
        )
        .with_params(SessionParams::default().with_max_retries(0))
    }

    #[tokio::test]
    async fn test_both_teams_complete() {
        let result = use_case(None)
            .execute(EvaluateInput::new("Chef with ten years on the line."))
            .await
            .unwrap();

        assert!(result.is_fully_complete());
        for team in TeamKind::both() {
            let session = result.outcome(team).result().unwrap();
            assert_eq!(session.turns_used, 3);
            assert_eq!(session.finding_count(), 2);
        }
    }

    #[tokio::test]
    async fn test_one_team_failure_spares_the_sibling() {
        let result = use_case(Some(TeamKind::Weaknesses))
            .execute(EvaluateInput::new("Chef with ten years on the line."))
            .await
            .unwrap();

        assert!(result.strengths.result().unwrap().is_complete());
        assert!(result.weaknesses.is_failed());
        assert!(!result.is_fully_complete());
    }

    #[tokio::test]
    async fn test_cancellation_aborts_the_evaluation() {
        let token = CancellationToken::new();
        token.cancel();

        let error = use_case(None)
            .with_cancellation(token)
            .execute(EvaluateInput::new("Chef."))
            .await
            .unwrap_err();

        assert!(matches!(error, EvaluateError::Cancelled));
    }
}
