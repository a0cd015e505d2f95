//! Verification status of a scanned plan version.
//!
//! The verification URL printed on a plan sheet points at the cockpit,
//! which compares the scanned version against the latest one. The same
//! check is available from the command line.

use crate::plan::{VersionId, VersionNumber};
use serde::{Deserialize, Serialize};

/// Project a plan belongs to, as far as the verify endpoint reveals it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub project_number: String,
    pub name: Option<String>,
}

/// Whether a scanned version is still the authoritative one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "status",
    rename_all = "snake_case",
    rename_all_fields = "camelCase"
)]
pub enum VerificationStatus {
    /// The scanned version is the latest.
    Current { plan_version: VersionNumber },
    /// A newer version has been published since.
    Outdated {
        scanned_version: VersionNumber,
        current_version: VersionNumber,
        current_version_id: VersionId,
    },
}

/// Result of checking one version id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub version_id: VersionId,
    pub plan_title: Option<String>,
    pub project: Option<ProjectSummary>,
    #[serde(flatten)]
    pub status: VerificationStatus,
}

impl VerificationReport {
    pub fn is_current(&self) -> bool {
        matches!(self.status, VerificationStatus::Current { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_outdated_report_serializes_with_status_tag() {
        let report = VerificationReport {
            version_id: VersionId::parse("old1").unwrap(),
            plan_title: Some("Grundriss Erdgeschoss".to_string()),
            project: None,
            status: VerificationStatus::Outdated {
                scanned_version: VersionNumber::Numeric(6),
                current_version: VersionNumber::Numeric(7),
                current_version_id: VersionId::parse("abc123").unwrap(),
            },
        };
        assert!(!report.is_current());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["status"], "outdated");
        assert_eq!(value["scannedVersion"], 6);
        assert_eq!(value["currentVersion"], 7);
        assert_eq!(value["currentVersionId"], "abc123");
        assert_eq!(value["versionId"], json!("old1"));
        assert!(value.get("current_version_id").is_none());
    }

    #[test]
    fn test_current_report_round_trips_camel_case() {
        let value = json!({
            "versionId": "abc123",
            "planTitle": null,
            "project": null,
            "status": "current",
            "planVersion": "B",
        });

        let report: VerificationReport = serde_json::from_value(value).unwrap();

        assert!(report.is_current());
        assert_eq!(
            report.status,
            VerificationStatus::Current {
                plan_version: VersionNumber::Text("B".to_string()),
            }
        );
    }
}
