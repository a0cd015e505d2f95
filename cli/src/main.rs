//! CLI entrypoint for planqr
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use planqr_application::{
    BuildArtifactUseCase, CheckVerificationUseCase, GenerateQrInput,
    GenerateVerificationQrUseCase, NoProgress, PipelineError, PlacementNotifier, PlanQuerySource,
    QuerySourceError, RunLogger, RunProgressNotifier,
};
use planqr_domain::{OutputFormat, Severity};
use planqr_infrastructure::{
    CockpitClient, ConfigLoader, FileConfig, JsonlRunLogger, PngArtifactStore, QrCodeEncoder,
};
use planqr_presentation::{
    ArgsQuerySource, Cli, ConsoleFormatter, ConsolePlacementNotifier, ConsolePromptSource,
    JsonFormatter, JsonPlacementNotifier, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Exit status after Ctrl-C, as a shell reports SIGINT.
const EXIT_CANCELLED: u8 = 130;

#[tokio::main]
async fn main() -> Result<ExitCode> {
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
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_deref()) {
            println!("{}", line);
        }
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    apply_cli_overrides(&mut config, &cli);

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Warning => warn!("{}", issue.message),
            Severity::Error => eprintln!("config error: {}", issue.message),
        }
    }
    if issues.iter().any(|i| i.is_error()) {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = config.output.format.unwrap_or_default();
    let formatter: Box<dyn OutputFormatter> = match format {
        OutputFormat::Text => Box::new(ConsoleFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };

    info!("Starting planqr against {}", config.service.base_url);

    // === Dependency Injection ===
    let endpoints = config.service.to_service_endpoints();
    let client = Arc::new(CockpitClient::new(endpoints.clone())?);

    // Verification status check
    if let Some(version_id) = &cli.check {
        let use_case = CheckVerificationUseCase::new(client);
        return match use_case.execute(version_id).await {
            Ok(report) => {
                print!("{}", with_newline(formatter.format_report(&report)));
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                print_error(format, formatter.format_check_error(&e));
                Ok(ExitCode::FAILURE)
            }
        };
    }

    // The query is read before Ctrl-C is intercepted, so an interrupt at
    // the prompt ends the process the usual way.
    let source: Box<dyn PlanQuerySource> = match cli.query_args() {
        Some((project_number, plan_title)) => {
            Box::new(ArgsQuerySource::new(project_number, plan_title))
        }
        None => Box::new(ConsolePromptSource::stdio()),
    };
    let query = match source.fetch() {
        Ok(query) => query,
        Err(QuerySourceError::Aborted) => {
            eprintln!("Aborted.");
            return Ok(ExitCode::from(EXIT_CANCELLED));
        }
        Err(QuerySourceError::Invalid(e)) => {
            print_error(format, formatter.format_error(&PipelineError::from(e)));
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("Could not read the plan query"),
    };

    let cancel = CancellationToken::new();
    tokio::spawn({
        let cancel = cancel.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        }
    });

    let (artifact_config, _) = config.qr.to_artifact_config();
    let builder = BuildArtifactUseCase::new(
        endpoints.verify_base_url(),
        artifact_config,
        Arc::new(QrCodeEncoder::new()),
        Arc::new(PngArtifactStore::new(config.output.directory_or_default())),
    );

    let placement: Arc<dyn PlacementNotifier> = match format {
        OutputFormat::Text => Arc::new(ConsolePlacementNotifier::stdout()),
        OutputFormat::Json => Arc::new(JsonPlacementNotifier::stdout()),
    };

    let mut use_case = GenerateVerificationQrUseCase::new(client, builder)
        .with_placement(placement)
        .with_cancellation(cancel);
    if let Some(path) = config.logging.run_log_path()
        && let Some(logger) = JsonlRunLogger::open(&path)
    {
        info!("Run log: {}", logger.path().display());
        use_case = use_case.with_run_logger(Arc::new(logger) as Arc<dyn RunLogger>);
    }

    let progress: Box<dyn RunProgressNotifier> =
        if cli.quiet || format == OutputFormat::Json {
            Box::new(NoProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

    let mut input = GenerateQrInput::new(query);
    if let Some(layout) = &cli.layout {
        input = input.with_layout_hint(layout);
    }

    match use_case.execute(input, progress.as_ref()).await {
        Ok(output) => {
            if format == OutputFormat::Text && !cli.quiet {
                print!("{}", ConsoleFormatter::format_success(&output));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_cancelled() => {
            print_error(format, formatter.format_error(&e));
            Ok(ExitCode::from(EXIT_CANCELLED))
        }
        Err(e) => {
            print_error(format, formatter.format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Command-line flags take precedence over every configuration source.
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
    }
    if let Some(timeout) = cli.timeout {
        config.service.timeout_seconds = timeout;
    }
    if let Some(dir) = &cli.output_dir {
        config.output.directory = Some(dir.clone());
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
}

fn with_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// JSON documents go to stdout for the calling script; text goes to stderr.
fn print_error(format: OutputFormat, text: String) {
    match format {
        OutputFormat::Json => print!("{}", with_newline(text)),
        OutputFormat::Text => eprint!("{}", with_newline(text)),
    }
}
