//! Build Artifact use case.
//!
//! Turns a resolved [`PlanVersion`] into a [`VerificationArtifact`]:
//! 1. Derive the verification URL from the version id
//! 2. Encode the URL as a QR raster
//! 3. Persist the raster under a collision-free file name
//!
//! Either the artifact is complete on disk or nothing was written.

use crate::config::ArtifactConfig;
use crate::ports::artifact_store::{ArtifactStore, StoreError};
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::qr_encoder::{EncodeError, QrEncoder};
use planqr_domain::{ArtifactName, PlanQuery, PlanVersion, VerificationArtifact, VerifyBaseUrl};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while building the artifact
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("QR encoding failed: {cause}")]
    EncodingFailed { cause: String },

    #[error("Failed to write {}: {cause}", .path.display())]
    WriteFailed { path: PathBuf, cause: String },
}

impl From<EncodeError> for BuildError {
    fn from(error: EncodeError) -> Self {
        BuildError::EncodingFailed {
            cause: error.to_string(),
        }
    }
}

impl From<StoreError> for BuildError {
    fn from(error: StoreError) -> Self {
        BuildError::WriteFailed {
            path: error.path,
            cause: error.cause,
        }
    }
}

/// Use case for building the verification artifact of one plan version.
pub struct BuildArtifactUseCase {
    verify_base: VerifyBaseUrl,
    config: ArtifactConfig,
    encoder: Arc<dyn QrEncoder>,
    store: Arc<dyn ArtifactStore>,
    clock: Arc<dyn Clock>,
}

impl BuildArtifactUseCase {
    pub fn new(
        verify_base: VerifyBaseUrl,
        config: ArtifactConfig,
        encoder: Arc<dyn QrEncoder>,
        store: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            verify_base,
            config,
            encoder,
            store,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock (tests pin the timestamp with this).
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The verification URL for `version`. Depends on the version id only.
    pub fn verification_url(&self, version: &PlanVersion) -> String {
        self.verify_base.url_for(&version.version_id)
    }

    pub fn build_artifact(
        &self,
        version: &PlanVersion,
        query: &PlanQuery,
    ) -> Result<VerificationArtifact, BuildError> {
        let verification_url = self.verification_url(version);
        debug!(
            "Encoding {} with {} error correction",
            verification_url, self.config.render.error_correction
        );

        let image = self.encoder.encode(&verification_url, &self.config.render)?;

        let created_at = self.clock.now();
        let name = ArtifactName::new(
            query,
            &version.version_number,
            &created_at,
            self.store.extension(),
        );
        let image_path = self.store.persist(&name, &image)?;

        info!(
            "Wrote QR code for {} (version {}) to {}",
            query,
            version.version_number,
            image_path.display()
        );

        Ok(VerificationArtifact {
            verification_url,
            image_path,
            version_number: version.version_number.clone(),
            created_at,
        })
    }
}
