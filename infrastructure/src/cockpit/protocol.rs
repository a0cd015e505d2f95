//! Wire format of the cockpit public API and response classification.
//!
//! Classification is kept free of I/O so every status/body combination can
//! be tested without a server.

use planqr_application::ResolutionError;
use planqr_application::ports::version_resolver::DEFAULT_NOT_FOUND_MESSAGE;
use planqr_domain::{
    PlanVersion, ProjectSummary, TokenError, VerificationReport, VerificationStatus, VersionId,
    VersionNumber,
};
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Status value of a verify response for the latest version.
pub const STATUS_CURRENT: &str = "AKTUELL";
/// Status value of a verify response for a superseded version.
pub const STATUS_OUTDATED: &str = "VERALTET";

/// `200` body of the lookup endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestVersionResponse {
    pub version_id: String,
    pub version_number: Value,
}

impl LatestVersionResponse {
    pub fn into_plan_version(self) -> Result<PlanVersion, TokenError> {
        let version_id = VersionId::parse(self.version_id)?;
        let version_number = VersionNumber::from_json(&self.version_number)?;
        Ok(PlanVersion::new(version_id, version_number))
    }
}

/// Error body shared by all endpoints: `{ "error": "..." }`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Best-effort parse; a non-JSON body yields no message.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDto {
    pub project_number: Option<String>,
    pub name: Option<String>,
}

/// `200` body of the verify endpoint.
///
/// Current versions carry `planVersion`; outdated ones carry
/// `scannedVersion`, `currentVersion` and `currentVersionId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub status: String,
    pub plan_title: Option<String>,
    pub plan_version: Option<Value>,
    pub scanned_version: Option<Value>,
    pub current_version: Option<Value>,
    pub current_version_id: Option<String>,
    pub project: Option<ProjectDto>,
}

impl VerifyResponse {
    pub fn into_report(self, version_id: VersionId) -> Result<VerificationReport, TokenError> {
        let status = match self.status.as_str() {
            STATUS_CURRENT => VerificationStatus::Current {
                plan_version: version_field("planVersion", self.plan_version.as_ref())?,
            },
            STATUS_OUTDATED => VerificationStatus::Outdated {
                scanned_version: version_field("scannedVersion", self.scanned_version.as_ref())?,
                current_version: version_field("currentVersion", self.current_version.as_ref())?,
                current_version_id: VersionId::parse(
                    self.current_version_id.unwrap_or_default(),
                )?,
            },
            other => {
                return Err(TokenError::Unrecognized {
                    kind: "status",
                    value: other.to_string(),
                });
            }
        };

        let project = self.project.and_then(|p| {
            p.project_number.map(|project_number| ProjectSummary {
                project_number,
                name: p.name,
            })
        });

        Ok(VerificationReport {
            version_id,
            plan_title: self.plan_title,
            project,
            status,
        })
    }
}

fn version_field(kind: &'static str, value: Option<&Value>) -> Result<VersionNumber, TokenError> {
    match value {
        Some(v) => VersionNumber::from_json(v),
        None => Err(TokenError::Empty { kind }),
    }
}

/// Map a lookup response to a [`PlanVersion`] or a [`ResolutionError`].
pub fn classify_lookup(status: StatusCode, body: &str) -> Result<PlanVersion, ResolutionError> {
    match status {
        StatusCode::OK => {
            let response: LatestVersionResponse = serde_json::from_str(body)
                .map_err(|e| ResolutionError::transport(format!("malformed response body: {e}")))?;
            response
                .into_plan_version()
                .map_err(ResolutionError::malformed)
        }
        other => Err(classify_failure(other, body)),
    }
}

/// Map a verify response to a [`VerificationReport`] or a [`ResolutionError`].
pub fn classify_verify(
    status: StatusCode,
    body: &str,
    version_id: &VersionId,
) -> Result<VerificationReport, ResolutionError> {
    match status {
        StatusCode::OK => {
            let response: VerifyResponse = serde_json::from_str(body)
                .map_err(|e| ResolutionError::transport(format!("malformed response body: {e}")))?;
            response
                .into_report(version_id.clone())
                .map_err(ResolutionError::malformed)
        }
        other => Err(classify_failure(other, body)),
    }
}

/// Non-200 answers: 404 is an expected "not found", everything else is a
/// service error.
fn classify_failure(status: StatusCode, body: &str) -> ResolutionError {
    let message = ErrorResponse::parse(body).error;
    if status == StatusCode::NOT_FOUND {
        return ResolutionError::not_found(
            message.unwrap_or_else(|| DEFAULT_NOT_FOUND_MESSAGE.to_string()),
        );
    }
    ResolutionError::ServiceError {
        status_code: status.as_u16(),
        reason: message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown status")
                .to_string()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id(s: &str) -> VersionId {
        VersionId::parse(s).unwrap()
    }

    #[test]
    fn test_lookup_ok() {
        let body = json!({"versionId": "abc123", "versionNumber": 7}).to_string();
        let version = classify_lookup(StatusCode::OK, &body).unwrap();
        assert_eq!(version.version_id.as_str(), "abc123");
        assert_eq!(version.version_number, VersionNumber::Numeric(7));
    }

    #[test]
    fn test_lookup_ok_with_string_version_number() {
        let body = json!({"versionId": "abc123", "versionNumber": "7"}).to_string();
        let version = classify_lookup(StatusCode::OK, &body).unwrap();
        assert_eq!(version.version_number, VersionNumber::Text("7".to_string()));
    }

    #[test]
    fn test_lookup_not_found_uses_service_message() {
        let body = json!({"error": "Plantyp nicht gefunden"}).to_string();
        let error = classify_lookup(StatusCode::NOT_FOUND, &body).unwrap_err();
        assert_eq!(error, ResolutionError::not_found("Plantyp nicht gefunden"));
    }

    #[test]
    fn test_lookup_not_found_without_body() {
        let error = classify_lookup(StatusCode::NOT_FOUND, "").unwrap_err();
        assert_eq!(error, ResolutionError::not_found(DEFAULT_NOT_FOUND_MESSAGE));
    }

    #[test]
    fn test_lookup_bad_request_is_service_error() {
        let body =
            json!({"error": "Projektnummer und Plantitel sind erforderlich"}).to_string();
        let error = classify_lookup(StatusCode::BAD_REQUEST, &body).unwrap_err();
        assert_eq!(
            error,
            ResolutionError::ServiceError {
                status_code: 400,
                reason: "Projektnummer und Plantitel sind erforderlich".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_server_error_without_body() {
        let error = classify_lookup(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert_eq!(
            error,
            ResolutionError::ServiceError {
                status_code: 502,
                reason: "Bad Gateway".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_malformed_body_is_transport_error() {
        let error = classify_lookup(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(error, ResolutionError::TransportError { .. }));

        let error = classify_lookup(StatusCode::OK, r#"{"versionNumber": 1}"#).unwrap_err();
        assert!(matches!(error, ResolutionError::TransportError { .. }));
    }

    #[test]
    fn test_lookup_unsafe_tokens_are_service_errors() {
        for body in [
            json!({"versionId": "../../etc", "versionNumber": 1}),
            json!({"versionId": "", "versionNumber": 1}),
            json!({"versionId": "abc", "versionNumber": "7/8"}),
            json!({"versionId": "abc", "versionNumber": 1.5}),
            json!({"versionId": "abc", "versionNumber": null}),
        ] {
            let error = classify_lookup(StatusCode::OK, &body.to_string()).unwrap_err();
            assert!(
                matches!(
                    error,
                    ResolutionError::ServiceError {
                        status_code: 200,
                        ..
                    }
                ),
                "{body} -> {error:?}"
            );
        }
    }

    #[test]
    fn test_verify_current() {
        let body = json!({
            "status": "AKTUELL",
            "planTitle": "Grundriss Erdgeschoss",
            "planVersion": 7,
            "project": {"id": "p1", "projectNumber": "25-001", "name": "Haus am See"},
            "createdAt": "2025-03-14T09:26:53.000Z"
        })
        .to_string();

        let report = classify_verify(StatusCode::OK, &body, &id("abc123")).unwrap();

        assert!(report.is_current());
        assert_eq!(report.plan_title.as_deref(), Some("Grundriss Erdgeschoss"));
        let project = report.project.unwrap();
        assert_eq!(project.project_number, "25-001");
        assert_eq!(project.name.as_deref(), Some("Haus am See"));
    }

    #[test]
    fn test_verify_outdated() {
        let body = json!({
            "status": "VERALTET",
            "planTitle": "Grundriss Erdgeschoss",
            "scannedVersion": 6,
            "currentVersion": 7,
            "currentVersionId": "abc123"
        })
        .to_string();

        let report = classify_verify(StatusCode::OK, &body, &id("old99")).unwrap();

        assert_eq!(
            report.status,
            VerificationStatus::Outdated {
                scanned_version: VersionNumber::Numeric(6),
                current_version: VersionNumber::Numeric(7),
                current_version_id: id("abc123"),
            }
        );
        assert!(report.project.is_none());
    }

    #[test]
    fn test_verify_unknown_status() {
        let body = json!({"status": "GESPERRT"}).to_string();
        let error = classify_verify(StatusCode::OK, &body, &id("x")).unwrap_err();
        assert!(matches!(
            error,
            ResolutionError::ServiceError {
                status_code: 200,
                ..
            }
        ));
    }

    #[test]
    fn test_verify_not_found() {
        let body = json!({"error": "Plan-Version nicht gefunden"}).to_string();
        let error = classify_verify(StatusCode::NOT_FOUND, &body, &id("x")).unwrap_err();
        assert_eq!(error, ResolutionError::not_found("Plan-Version nicht gefunden"));
    }
}
