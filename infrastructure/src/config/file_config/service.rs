//! Service configuration from TOML (`[service]` section)

use planqr_application::ServiceEndpoints;
use planqr_application::config::service::{
    DEFAULT_BASE_URL, DEFAULT_LOOKUP_PATH, DEFAULT_TIMEOUT, DEFAULT_VERIFY_API_PATH,
    DEFAULT_VERIFY_PATH,
};
use planqr_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the cockpit portal
    pub base_url: String,
    /// Path of the latest-version lookup endpoint
    pub lookup_path: String,
    /// Path prefix encoded into QR codes
    pub verify_path: String,
    /// Path prefix of the verification API
    pub verify_api_path: String,
    /// Bounded wait per request
    pub timeout_seconds: u64,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            lookup_path: DEFAULT_LOOKUP_PATH.to_string(),
            verify_path: DEFAULT_VERIFY_PATH.to_string(),
            verify_api_path: DEFAULT_VERIFY_API_PATH.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl FileServiceConfig {
    pub fn to_service_endpoints(&self) -> ServiceEndpoints {
        ServiceEndpoints {
            base_url: self.base_url.trim().to_string(),
            lookup_path: self.lookup_path.clone(),
            verify_path: self.verify_path.clone(),
            verify_api_path: self.verify_api_path.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let base_url = self.base_url.trim();

        if base_url.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "service.base_url".to_string(),
                },
                "service.base_url must not be empty",
            ));
        } else if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::UnsupportedScheme {
                    field: "service.base_url".to_string(),
                    value: base_url.to_string(),
                },
                format!(
                    "service.base_url: '{}' is not an http:// or https:// URL",
                    base_url
                ),
            ));
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "service.timeout_seconds".to_string(),
                },
                "service.timeout_seconds must be at least 1",
            ));
        }

        issues
    }
}
