//! Verification URL derivation

use crate::plan::VersionId;
use serde::{Deserialize, Serialize};

/// Base of all verification URLs, e.g. `https://portal.example.at/verify`.
///
/// [`VerifyBaseUrl::url_for`] is a pure function of the version id: the same
/// id always yields a byte-identical URL, and with it an identical QR payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyBaseUrl(String);

impl VerifyBaseUrl {
    /// Join the service base URL and the verification path.
    ///
    /// Redundant slashes at the seam are removed, so `"https://x/"` and
    /// `"/verify"` give `"https://x/verify"`.
    pub fn new(base_url: &str, verify_path: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        let path = verify_path.trim_matches('/');
        if path.is_empty() {
            Self(base.to_string())
        } else {
            Self(format!("{}/{}", base, path))
        }
    }

    /// The verification URL for one version.
    pub fn url_for(&self, version_id: &VersionId) -> String {
        format!("{}/{}", self.0, version_id.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VerifyBaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
