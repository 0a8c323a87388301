//! CLI entrypoint for hiring-panel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use panel_application::{
    DebateProgress, EvaluateApplicantUseCase, EvaluateInput, NoTranscriptLogger, TranscriptLogger,
};
use panel_domain::ApplicantSummary;
use panel_infrastructure::{
    ConfigLoader, FileConfig, FileInstructionRepository, JsonlTranscriptLogger, ModelCliClient,
    ModelCliGenerationService, RoleModels, ToolRegistry,
};
use panel_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fallback model command when neither the CLI nor the config names one
const DEFAULT_MODEL_COMMAND: &str = "model-cli";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let summary = read_summary(&cli)?;
    info!("Starting hiring-panel evaluation");

    // Session parameters: config file, then CLI overrides
    let mut params = config.session_params();
    if let Some(budget) = cli.budget {
        params = params.with_turn_budget(budget);
    }
    if let Some(retries) = cli.max_retries {
        params = params.with_max_retries(retries);
    }
    if let Some(secs) = cli.timeout_secs {
        params = params.with_generation_timeout(Some(std::time::Duration::from_secs(secs)));
    }

    // === Dependency Injection ===
    let generation = Arc::new(build_generation_service(&cli, &config)?);
    let instructions = Arc::new(FileInstructionRepository::from_config(
        config.instruction_dir(),
    ));
    let tools = ToolRegistry::with_placeholder();

    let transcript: Arc<dyn TranscriptLogger> = match &config.output.transcript_file {
        Some(path) => match JsonlTranscriptLogger::new(path) {
            Some(logger) => {
                info!("Writing transcript to {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoTranscriptLogger),
        },
        None => Arc::new(NoTranscriptLogger),
    };

    // Ctrl-C cancels both teams before their next turn is applied
    let cancellation = CancellationToken::new();
    tokio::spawn({
        let cancellation = cancellation.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancellation.cancel();
            }
        }
    });

    let mut use_case = EvaluateApplicantUseCase::new(generation, instructions)
        .with_params(params)
        .with_tools(tools.definitions())
        .with_transcript(transcript)
        .with_cancellation(cancellation);
    if !cli.quiet {
        let progress: Arc<dyn DebateProgress> = Arc::new(ProgressReporter::new());
        use_case = use_case.with_progress(progress);
    }

    let result = use_case.execute(EvaluateInput::new(summary)).await?;

    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };
    println!("{}", output);

    Ok(())
}

/// Resolve the applicant summary from the positional argument or a file
fn read_summary(cli: &Cli) -> Result<ApplicantSummary> {
    let text = match (&cli.summary, &cli.summary_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read summary file {}", path.display()))?,
        (None, None) => bail!("An applicant summary is required (argument or --summary-file)."),
    };

    ApplicantSummary::try_new(text).context("applicant summary is empty")
}

/// Build the model CLI generation adapter from config and CLI overrides
fn build_generation_service(cli: &Cli, config: &FileConfig) -> Result<ModelCliGenerationService> {
    let command = cli
        .model_command
        .as_deref()
        .or(config.models.command.as_deref())
        .unwrap_or(DEFAULT_MODEL_COMMAND);

    let client = ModelCliClient::resolve(command)
        .with_context(|| format!("model command '{command}' is not usable"))?;

    Ok(ModelCliGenerationService::new(
        client,
        RoleModels::from_config(&config.models),
    ))
}
