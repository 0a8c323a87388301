//! Run Session use case
//!
//! Drives one team's debate from the first proposal to the session result.
//! The coordinator decides who speaks; this loop invokes the generation
//! backend for that speaker, applies the retry and timeout policy, and
//! appends the validated turn.

use crate::config::SessionParams;
use crate::ports::generation::{GenerationError, GenerationService, RoleContext};
use crate::ports::instructions::{InstructionError, InstructionRepository};
use crate::ports::progress::{DebateProgress, NoProgress};
use crate::ports::transcript::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
use crate::use_cases::shared::check_cancelled;
use panel_domain::{
    ApplicantSummary, Coordinator, DomainError, NextAction, ProposerId, ProposerRoster,
    SessionResult, Speaker, TeamKind, ToolDefinition, TurnContent,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while running one team session
#[derive(Error, Debug)]
pub enum RunSessionError {
    #[error("Proposer {proposer} unavailable after {attempts} attempts: {last_error}")]
    ProposerUnavailable {
        proposer: ProposerId,
        attempts: usize,
        last_error: String,
    },

    #[error("Challenger unavailable after {attempts} attempts: {last_error}")]
    ChallengerUnavailable {
        attempts: usize,
        last_error: String,
    },

    #[error("Instruction error: {0}")]
    Instructions(#[from] InstructionError),

    /// An invariant violation inside the debate itself: a defect,
    /// not a runtime condition to retry
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Operation cancelled")]
    Cancelled,
}

impl RunSessionError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, RunSessionError::Cancelled)
    }
}

/// Input for the RunSession use case
#[derive(Debug, Clone)]
pub struct RunSessionInput {
    /// Which team this session argues for
    pub team: TeamKind,
    /// The proposers, in join order
    pub roster: ProposerRoster,
    /// The applicant under evaluation
    pub summary: ApplicantSummary,
}

impl RunSessionInput {
    pub fn new(team: TeamKind, roster: ProposerRoster, summary: impl Into<ApplicantSummary>) -> Self {
        Self {
            team,
            roster,
            summary: summary.into(),
        }
    }
}

/// Use case for running one team's debate session
pub struct RunSessionUseCase<G: GenerationService + 'static> {
    generation: Arc<G>,
    instructions: Arc<dyn InstructionRepository>,
    params: SessionParams,
    tools: Vec<ToolDefinition>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: GenerationService + 'static> RunSessionUseCase<G> {
    pub fn new(generation: Arc<G>, instructions: Arc<dyn InstructionRepository>) -> Self {
        Self {
            generation,
            instructions,
            params: SessionParams::default(),
            tools: Vec::new(),
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

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) observers
    pub async fn execute(&self, input: RunSessionInput) -> Result<SessionResult, RunSessionError> {
        self.execute_with_observers(input, &NoProgress, &NoTranscriptLogger)
            .await
    }

    /// Execute the use case with progress callbacks and a transcript
    pub async fn execute_with_observers(
        &self,
        input: RunSessionInput,
        progress: &dyn DebateProgress,
        transcript: &dyn TranscriptLogger,
    ) -> Result<SessionResult, RunSessionError> {
        let mut coordinator = Coordinator::new(input.roster.clone(), self.params.turn_budget);

        info!(
            "Starting {} session: {} proposers, budget {}",
            input.team,
            coordinator.roster().len(),
            coordinator.budget()
        );
        progress.on_session_start(input.team, coordinator.budget());

        let result = loop {
            check_cancelled(&self.cancellation_token)?;

            let speaker = match coordinator.next_action() {
                NextAction::Conclude(completion) => {
                    debug!("{} session concluding as {}", input.team, completion);
                    break coordinator
                        .result(input.team)
                        .expect("a concluding session always yields a result");
                }
                NextAction::Speak(speaker) => speaker,
            };

            let seq = coordinator.log().len() + 1;
            progress.on_turn_start(input.team, &speaker, seq);

            let context = self.build_context(&input, &coordinator, &speaker)?;
            let content = self
                .generate_with_retries(&context, progress)
                .await?;

            // A cancel that lands mid-generation must not leave a
            // partially-applied turn: the append is the atomic unit.
            check_cancelled(&self.cancellation_token)?;

            let turn = coordinator.record(speaker, content)?;
            transcript.log(TranscriptEvent::new(
                "turn",
                json!({
                    "team": input.team,
                    "seq": turn.seq,
                    "speaker": turn.speaker,
                    "content_kind": turn.content.kind(),
                    "content": turn.content,
                }),
            ));
            progress.on_turn_complete(input.team, turn);
        };

        info!(
            "{} session concluded: {} in {} turns",
            input.team, result.completion, result.turns_used
        );
        transcript.log(TranscriptEvent::new(
            "session_result",
            json!({
                "team": result.team,
                "completion": result.completion,
                "turns_used": result.turns_used,
                "proposals": result.proposals,
            }),
        ));
        progress.on_session_complete(&result);

        Ok(result)
    }

    /// Assemble the context for one speaker from the turn log
    fn build_context(
        &self,
        input: &RunSessionInput,
        coordinator: &Coordinator,
        speaker: &Speaker,
    ) -> Result<RoleContext, RunSessionError> {
        let proposals = coordinator
            .roster()
            .iter()
            .filter_map(|id| {
                coordinator
                    .log()
                    .latest_findings_of(id)
                    .map(|findings| (id.clone(), findings.clone()))
            })
            .collect();

        let (instructions, objections) = match speaker {
            Speaker::Proposer(id) => (
                self.instructions.instructions_for(input.team, id)?,
                coordinator.log().objections_against(id).cloned().collect(),
            ),
            Speaker::Challenger => (String::new(), Vec::new()),
        };

        Ok(RoleContext {
            team: input.team,
            speaker: speaker.clone(),
            summary: input.summary.clone(),
            instructions,
            proposals,
            objections,
            tools: self.tools.clone(),
        })
    }

    /// Invoke the backend for one turn, retrying malformed output and
    /// timeouts up to the configured limit
    async fn generate_with_retries(
        &self,
        context: &RoleContext,
        progress: &dyn DebateProgress,
    ) -> Result<TurnContent, RunSessionError> {
        let attempts = self.params.max_retries + 1;
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            check_cancelled(&self.cancellation_token)?;

            let outcome = match self.params.generation_timeout {
                Some(limit) => {
                    match tokio::time::timeout(limit, self.generation.generate(context)).await {
                        Ok(result) => result,
                        Err(_) => Err(GenerationError::Timeout),
                    }
                }
                None => self.generation.generate(context).await,
            };

            match outcome {
                Ok(content) => return Ok(content),
                Err(error) => {
                    warn!(
                        "{} generation attempt {}/{} failed: {}",
                        context.speaker, attempt, attempts, error
                    );
                    last_error = error.to_string();
                    if attempt < attempts {
                        progress.on_retry(context.team, &context.speaker, attempt, &last_error);
                    }
                }
            }
        }

        Err(match &context.speaker {
            Speaker::Proposer(id) => RunSessionError::ProposerUnavailable {
                proposer: id.clone(),
                attempts,
                last_error,
            },
            Speaker::Challenger => RunSessionError::ChallengerUnavailable {
                attempts,
                last_error,
            },
        })
    }
}
