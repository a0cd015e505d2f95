//! Application layer for planqr
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ArtifactConfig, ServiceEndpoints};
pub use ports::{
    artifact_store::{ArtifactStore, StoreError},
    clock::{Clock, SystemClock},
    placement::{NoPlacement, PlacementNotifier},
    progress::{NoProgress, RunProgressNotifier},
    qr_encoder::{EncodeError, QrEncoder},
    query_source::{PlanQuerySource, QuerySourceError},
    run_logger::{NoRunLogger, RunEvent, RunLogger},
    verification_checker::VerificationChecker,
    version_resolver::{PlanVersionResolver, ResolutionError},
};
pub use use_cases::build_artifact::{BuildArtifactUseCase, BuildError};
pub use use_cases::check_verification::{CheckVerificationError, CheckVerificationUseCase};
pub use use_cases::generate_qr::{
    GenerateQrInput, GenerateQrOutput, GenerateVerificationQrUseCase, PipelineError,
};
