//! Verification checker port

use super::version_resolver::ResolutionError;
use async_trait::async_trait;
use planqr_domain::{VerificationReport, VersionId};

/// Asks the service whether a (scanned) version is still the latest.
///
/// Shares [`ResolutionError`] with the resolver: both talk to the same
/// service and fail the same ways.
#[async_trait]
pub trait VerificationChecker: Send + Sync {
    async fn check_verification(
        &self,
        version_id: &VersionId,
    ) -> Result<VerificationReport, ResolutionError>;
}
