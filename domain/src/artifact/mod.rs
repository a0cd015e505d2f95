//! Verification artifact: URL derivation, QR raster and file naming.

mod naming;
mod qr;
mod url;

pub use naming::{ArtifactName, TIMESTAMP_FORMAT};
pub use qr::{ErrorCorrection, QrRenderOptions, RasterImage};
pub use url::VerifyBaseUrl;

use crate::plan::VersionNumber;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The output of one successful run (Entity)
///
/// The image at `image_path` is a terminal output. It is never read back or
/// reused by the pipeline, and it stays on disk after the process exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationArtifact {
    pub verification_url: String,
    pub image_path: PathBuf,
    pub version_number: VersionNumber,
    pub created_at: DateTime<Local>,
}

impl VerificationArtifact {
    /// File name component of the image path, for display.
    pub fn file_name(&self) -> String {
        self.image_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
