//! Cockpit service endpoints.

use planqr_domain::{VerifyBaseUrl, VersionId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default base URL of the cockpit portal.
pub const DEFAULT_BASE_URL: &str = "https://portal.marcelgladbach.at";
/// Lookup endpoint for the latest version of a plan.
pub const DEFAULT_LOOKUP_PATH: &str = "/api/public/get-latest-plan-version-id";
/// Path prefix of the human-facing verification page.
pub const DEFAULT_VERIFY_PATH: &str = "/verify";
/// Path prefix of the machine-readable verification endpoint.
pub const DEFAULT_VERIFY_API_PATH: &str = "/api/public/verify";
/// Bounded wait for a single service request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Endpoints and timeout of the cockpit plan-management service.
///
/// These are fixed per deployment. Keeping them here instead of in the
/// resolver lets tests point the pipeline at a mock server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    pub base_url: String,
    pub lookup_path: String,
    pub verify_path: String,
    pub verify_api_path: String,
    pub timeout: Duration,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lookup_path: DEFAULT_LOOKUP_PATH.to_string(),
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
            verify_api_path: DEFAULT_VERIFY_API_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ServiceEndpoints {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the lookup endpoint (without query string).
    pub fn lookup_url(&self) -> String {
        join_url(&self.base_url, &self.lookup_path)
    }

    /// Full URL of the verification API for one version.
    pub fn verify_api_url(&self, version_id: &VersionId) -> String {
        format!(
            "{}/{}",
            join_url(&self.base_url, &self.verify_api_path),
            version_id
        )
    }

    /// Base of the verification URLs encoded into QR codes.
    pub fn verify_base_url(&self) -> VerifyBaseUrl {
        VerifyBaseUrl::new(&self.base_url, &self.verify_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let endpoints = ServiceEndpoints::default();
        assert_eq!(endpoints.timeout, Duration::from_secs(10));
        assert_eq!(
            endpoints.lookup_url(),
            "https://portal.marcelgladbach.at/api/public/get-latest-plan-version-id"
        );
        assert_eq!(
            endpoints.verify_base_url().as_str(),
            "https://portal.marcelgladbach.at/verify"
        );
    }

    #[test]
    fn test_builder_and_trailing_slash() {
        let endpoints = ServiceEndpoints::default()
            .with_base_url("http://127.0.0.1:8080/")
            .with_timeout(Duration::from_millis(250));

        assert_eq!(
            endpoints.lookup_url(),
            "http://127.0.0.1:8080/api/public/get-latest-plan-version-id"
        );
        let id = VersionId::parse("abc123").unwrap();
        assert_eq!(
            endpoints.verify_api_url(&id),
            "http://127.0.0.1:8080/api/public/verify/abc123"
        );
        assert_eq!(endpoints.timeout, Duration::from_millis(250));
    }
}
