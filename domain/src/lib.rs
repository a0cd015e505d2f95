//! Domain layer for planqr
//!
//! This crate contains the value objects and rules of the verification
//! pipeline. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Plan lookup
//!
//! - [`PlanQuery`]: project number + plan title, as entered by the user
//! - [`PlanVersion`]: the latest version the cockpit service knows for that plan
//!
//! ## Verification artifact
//!
//! - [`VerifyBaseUrl`]: derives the verification URL, a pure function of the version id
//! - [`ArtifactName`]: collision-free `QR_<project>_<title>_V<version>_<timestamp>.png` names
//! - [`VerificationArtifact`]: URL + image path produced by one run
//!
//! ## Run lifecycle
//!
//! - [`RunState`]: `Idle -> Resolving -> Resolved -> Building -> Built -> Done`

pub mod artifact;
pub mod config;
pub mod core;
pub mod plan;
pub mod run;
pub mod verification;

// Re-export commonly used types
pub use artifact::{
    ArtifactName, ErrorCorrection, QrRenderOptions, RasterImage, VerificationArtifact,
    VerifyBaseUrl,
};
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::{InputError, TokenError},
    string::{is_token_char, sanitize_file_segment},
};
pub use plan::{PlanQuery, PlanVersion, VersionId, VersionNumber};
pub use run::RunState;
pub use verification::{ProjectSummary, VerificationReport, VerificationStatus};
