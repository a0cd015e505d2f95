//! Check Verification use case.
//!
//! Answers the question a scanned QR code raises: is this plan version
//! still the latest one? The version id is validated locally first, so a
//! mistyped id never reaches the service.

use crate::ports::verification_checker::VerificationChecker;
use crate::ports::version_resolver::ResolutionError;
use planqr_domain::{InputError, VerificationReport, VersionId};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum CheckVerificationError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Could not verify version {version_id}: {source}")]
    Service {
        version_id: VersionId,
        source: ResolutionError,
    },
}

impl CheckVerificationError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CheckVerificationError::Service { source, .. } if source.is_not_found())
    }
}

/// Use case for checking the verification status of a version id.
pub struct CheckVerificationUseCase {
    checker: Arc<dyn VerificationChecker>,
}

impl CheckVerificationUseCase {
    pub fn new(checker: Arc<dyn VerificationChecker>) -> Self {
        Self { checker }
    }

    pub async fn execute(
        &self,
        version_id: &str,
    ) -> Result<VerificationReport, CheckVerificationError> {
        let version_id = VersionId::parse(version_id.trim()).map_err(InputError::from)?;
        info!("Checking verification status of {}", version_id);

        self.checker
            .check_verification(&version_id)
            .await
            .map_err(|source| CheckVerificationError::Service { version_id, source })
    }
}
