//! Generation service implementation over the model CLI

use super::command::ModelCliClient;
use super::error::ModelCliError;
use super::parsing::{parse_findings, parse_review};
use super::protocol::GenerateRequest;
use crate::config::FileModelsConfig;
use async_trait::async_trait;
use panel_application::{GenerationError, GenerationService, RoleContext};
use panel_domain::{Objection, RolePromptTemplate, Speaker, TurnContent};
use tracing::debug;

/// Model identifiers per debate role
#[derive(Debug, Clone)]
pub struct RoleModels {
    /// Model for proposer turns
    pub proposer: String,
    /// Model for challenger turns
    pub challenger: String,
}

impl RoleModels {
    pub fn new(proposer: impl Into<String>, challenger: impl Into<String>) -> Self {
        Self {
            proposer: proposer.into(),
            challenger: challenger.into(),
        }
    }

    /// Build from the `[models]` config section
    pub fn from_config(models: &FileModelsConfig) -> Self {
        Self::new(models.proposer_model(), models.challenger_model())
    }
}

/// Generation service backed by a model CLI subprocess
///
/// Renders the role prompt, runs one CLI call, and parses the reply into
/// the structured turn content the coordinator expects. The free-text to
/// decision mapping (including the `OKAY <proposer>` convention) lives
/// entirely here; the core only ever sees [`TurnContent`].
pub struct ModelCliGenerationService {
    client: ModelCliClient,
    models: RoleModels,
}

impl ModelCliGenerationService {
    pub fn new(client: ModelCliClient, models: RoleModels) -> Self {
        Self { client, models }
    }

    /// Render the (model, system, prompt) triple for one context
    fn render(&self, context: &RoleContext) -> (String, String, String) {
        match &context.speaker {
            Speaker::Proposer(id) => {
                let system =
                    RolePromptTemplate::proposer_system(context.team, id, &context.instructions);
                let prompt = match context.own_findings() {
                    Some(previous) => {
                        let objections: Vec<&Objection> = context.objections.iter().collect();
                        RolePromptTemplate::proposer_revision(
                            context.team,
                            context.summary.content(),
                            previous,
                            &objections,
                        )
                    }
                    None => {
                        RolePromptTemplate::proposer_query(context.team, context.summary.content())
                    }
                };
                (self.models.proposer.clone(), system, prompt)
            }
            Speaker::Challenger => (
                self.models.challenger.clone(),
                RolePromptTemplate::challenger_system(context.team),
                RolePromptTemplate::challenger_query(
                    context.team,
                    context.summary.content(),
                    &context.proposals,
                ),
            ),
        }
    }

    fn map_client_error(error: ModelCliError) -> GenerationError {
        match error {
            ModelCliError::ParseError { .. } | ModelCliError::EmptyResponse => {
                GenerationError::MalformedOutput(error.to_string())
            }
            other => GenerationError::Backend(other.to_string()),
        }
    }
}

#[async_trait]
impl GenerationService for ModelCliGenerationService {
    async fn generate(&self, context: &RoleContext) -> Result<TurnContent, GenerationError> {
        let (model, system, prompt) = self.render(context);
        debug!("Generating {} turn with model {}", context.speaker, model);

        let request = GenerateRequest {
            model,
            system,
            prompt,
            tools: context.tools.clone(),
        };

        let raw = self
            .client
            .complete(&request)
            .await
            .map_err(Self::map_client_error)?;

        match &context.speaker {
            Speaker::Proposer(_) => parse_findings(&raw)
                .map(TurnContent::Findings)
                .map_err(GenerationError::MalformedOutput),
            Speaker::Challenger => {
                let known: Vec<_> = context
                    .proposals
                    .iter()
                    .map(|(id, _)| id.clone())
                    .collect();
                parse_review(&raw, &known)
                    .map(TurnContent::Review)
                    .map_err(GenerationError::MalformedOutput)
            }
        }
    }
}
