//! Progress notification port
//!
//! Defines the interface for reporting progress during a run.

use planqr_domain::{PlanQuery, PlanVersion, RunState, VerificationArtifact};

/// Callback for progress updates during a run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait RunProgressNotifier: Send + Sync {
    /// Called on every state transition of the run.
    fn on_state_change(&self, from: RunState, to: RunState, query: &PlanQuery);

    /// Called once the latest version is known.
    fn on_version_resolved(&self, _version: &PlanVersion) {}

    /// Called once the image has been written.
    fn on_artifact_built(&self, _artifact: &VerificationArtifact) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RunProgressNotifier for NoProgress {
    fn on_state_change(&self, _from: RunState, _to: RunState, _query: &PlanQuery) {}
}
