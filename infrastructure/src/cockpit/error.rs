//! Error types for the cockpit adapter

use thiserror::Error;

/// Errors that can occur while setting up the cockpit client.
///
/// Request-time failures are reported as
/// [`ResolutionError`](planqr_application::ResolutionError) instead.
#[derive(Error, Debug)]
pub enum CockpitError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[from] reqwest::Error),

    #[error("Invalid service URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
