//! Generate Verification QR use case.
//!
//! Runs the whole pipeline for one plan query:
//!
//! 1. Validate the [`PlanQuery`]
//! 2. Resolve the latest [`PlanVersion`] (the only network wait, and the
//!    only point where cancellation is honoured)
//! 3. Build the [`VerificationArtifact`]
//! 4. Hand it to the [`PlacementNotifier`]
//!
//! Every failure is terminal. There is no retry and no partial artifact.

use crate::ports::placement::{NoPlacement, PlacementNotifier};
use crate::ports::progress::RunProgressNotifier;
use crate::ports::run_logger::{NoRunLogger, RunEvent, RunLogger};
use crate::ports::version_resolver::{PlanVersionResolver, ResolutionError};
use crate::use_cases::build_artifact::{BuildArtifactUseCase, BuildError};
use crate::use_cases::shared::{RunTracker, is_cancelled};
use planqr_domain::{
    InputError, PlanQuery, PlanVersion, RunState, VerificationArtifact, VersionNumber,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Errors that end a run.
///
/// Each variant carries the query so the message can say what was being
/// looked up, what failed and why.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Could not resolve {query}: {source}")]
    Resolution {
        query: PlanQuery,
        source: ResolutionError,
    },

    #[error("Could not build QR code for {query} (version {version_number}): {source}")]
    Build {
        query: PlanQuery,
        version_number: VersionNumber,
        source: BuildError,
    },

    #[error("Cancelled run for {query} ({})", state.as_str())]
    Cancelled { query: PlanQuery, state: RunState },
}

impl PipelineError {
    /// The terminal state the run ended in.
    ///
    /// Input errors and cancellation before the lookup never leave `Idle`.
    pub fn final_state(&self) -> RunState {
        match self {
            PipelineError::InvalidInput(_) => RunState::Idle,
            PipelineError::Resolution { .. } => RunState::ResolutionFailed,
            PipelineError::Cancelled { state, .. } => *state,
            PipelineError::Build { .. } => RunState::BuildFailed,
        }
    }

    /// The service reported the plan as unknown: a matter of input, not an outage.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PipelineError::Resolution { source, .. } if source.is_not_found())
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, PipelineError::Cancelled { .. })
    }
}

/// Input for the [`GenerateVerificationQrUseCase`].
#[derive(Debug, Clone)]
pub struct GenerateQrInput {
    pub query: PlanQuery,
    /// Layout the QR code should be placed on, forwarded to placement.
    pub target_layout_hint: Option<String>,
}

impl GenerateQrInput {
    pub fn new(query: PlanQuery) -> Self {
        Self {
            query,
            target_layout_hint: None,
        }
    }

    pub fn with_layout_hint(mut self, hint: impl Into<String>) -> Self {
        self.target_layout_hint = Some(hint.into());
        self
    }
}

/// Output of a successful run.
#[derive(Debug, Clone)]
pub struct GenerateQrOutput {
    pub query: PlanQuery,
    pub version: PlanVersion,
    pub artifact: VerificationArtifact,
    pub state: RunState,
}

/// Use case for producing the verification QR code of one plan.
pub struct GenerateVerificationQrUseCase {
    resolver: Arc<dyn PlanVersionResolver>,
    builder: BuildArtifactUseCase,
    placement: Arc<dyn PlacementNotifier>,
    run_logger: Arc<dyn RunLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl GenerateVerificationQrUseCase {
    pub fn new(resolver: Arc<dyn PlanVersionResolver>, builder: BuildArtifactUseCase) -> Self {
        Self {
            resolver,
            builder,
            placement: Arc::new(NoPlacement),
            run_logger: Arc::new(NoRunLogger),
            cancellation_token: None,
        }
    }

    pub fn with_placement(mut self, placement: Arc<dyn PlacementNotifier>) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_run_logger(mut self, logger: Arc<dyn RunLogger>) -> Self {
        self.run_logger = logger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute one run with progress callbacks.
    pub async fn execute(
        &self,
        input: GenerateQrInput,
        progress: &dyn RunProgressNotifier,
    ) -> Result<GenerateQrOutput, PipelineError> {
        let query = input.query;
        query.validate()?;

        if is_cancelled(&self.cancellation_token) {
            return Err(PipelineError::Cancelled {
                query,
                state: RunState::Idle,
            });
        }

        info!("Starting run for {}", query);
        self.run_logger.log(RunEvent::new(
            "run_started",
            json!({
                "projectNumber": query.project_number(),
                "planTitle": query.plan_title(),
            }),
        ));

        let mut run = RunTracker::new(&query, progress);

        // Resolving
        run.advance(RunState::Resolving);
        let version = match self.resolve(&query).await {
            Ok(version) => version,
            Err(error) => {
                run.advance(RunState::ResolutionFailed);
                self.log_failure(&error, run.state());
                return Err(error);
            }
        };
        run.advance(RunState::Resolved);
        progress.on_version_resolved(&version);
        self.run_logger.log(RunEvent::new(
            "version_resolved",
            json!({
                "projectNumber": query.project_number(),
                "planTitle": query.plan_title(),
                "versionId": version.version_id.as_str(),
                "versionNumber": &version.version_number,
            }),
        ));

        // Building
        run.advance(RunState::Building);
        let artifact = match self.builder.build_artifact(&version, &query) {
            Ok(artifact) => artifact,
            Err(source) => {
                run.advance(RunState::BuildFailed);
                let error = PipelineError::Build {
                    query: query.clone(),
                    version_number: version.version_number.clone(),
                    source,
                };
                self.log_failure(&error, run.state());
                return Err(error);
            }
        };
        run.advance(RunState::Built);
        progress.on_artifact_built(&artifact);
        self.run_logger.log(RunEvent::new(
            "artifact_built",
            json!({
                "versionId": version.version_id.as_str(),
                "verificationUrl": &artifact.verification_url,
                "imagePath": artifact.image_path.display().to_string(),
            }),
        ));

        self.placement
            .notify_artifact_ready(&artifact, input.target_layout_hint.as_deref());
        run.advance(RunState::Done);

        let state = run.state();
        Ok(GenerateQrOutput {
            query,
            version,
            artifact,
            state,
        })
    }

    /// Resolve the latest version, aborting the wait on cancellation.
    async fn resolve(&self, query: &PlanQuery) -> Result<PlanVersion, PipelineError> {
        let lookup = self.resolver.resolve_latest_version(query);

        let result = match &self.cancellation_token {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    return Err(PipelineError::Cancelled {
                        query: query.clone(),
                        state: RunState::ResolutionFailed,
                    });
                }
                result = lookup => result,
            },
            None => lookup.await,
        };

        result.map_err(|source| PipelineError::Resolution {
            query: query.clone(),
            source,
        })
    }

    fn log_failure(&self, error: &PipelineError, state: RunState) {
        warn!("Run ended in {}: {}", state.as_str(), error);
        self.run_logger.log(RunEvent::new(
            "run_failed",
            json!({
                "state": state.as_str(),
                "error": error.to_string(),
            }),
        ));
    }
}
