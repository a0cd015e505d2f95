//! Placement notifier port
//!
//! The CAD host places the QR image into a layout. That step is owned by
//! the host, so this is a one-way notification with no result.

use planqr_domain::VerificationArtifact;

pub trait PlacementNotifier: Send + Sync {
    /// Hand a finished artifact to the placement collaborator.
    ///
    /// `target_layout_hint` names the layout the user asked for, if any.
    fn notify_artifact_ready(
        &self,
        artifact: &VerificationArtifact,
        target_layout_hint: Option<&str>,
    );
}

/// Placement notifier that does nothing
pub struct NoPlacement;

impl PlacementNotifier for NoPlacement {
    fn notify_artifact_ready(
        &self,
        _artifact: &VerificationArtifact,
        _target_layout_hint: Option<&str>,
    ) {
    }
}
