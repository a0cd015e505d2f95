//! reqwest-based cockpit client
//!
//! Implements [`PlanVersionResolver`] and [`VerificationChecker`]. Every call
//! is a single `GET` bounded by the configured timeout: no retries, no
//! caching.

use super::error::CockpitError;
use super::protocol::{classify_lookup, classify_verify};
use async_trait::async_trait;
use planqr_application::{
    PlanVersionResolver, ResolutionError, ServiceEndpoints, VerificationChecker,
};
use planqr_domain::{PlanQuery, PlanVersion, VerificationReport, VersionId};
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("planqr/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the cockpit public API.
pub struct CockpitClient {
    client: reqwest::Client,
    endpoints: ServiceEndpoints,
}

impl CockpitClient {
    pub fn new(endpoints: ServiceEndpoints) -> Result<Self, CockpitError> {
        let base = endpoints.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(CockpitError::InvalidUrl {
                url: endpoints.base_url.clone(),
                reason: "expected an http:// or https:// URL".to_string(),
            });
        }

        let client = reqwest::Client::builder()
            .timeout(endpoints.timeout)
            .connect_timeout(endpoints.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, endpoints })
    }

    /// Issue one GET and return status and body text.
    async fn get(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<(StatusCode, String), ResolutionError> {
        debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(url)
            .query(query)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| transport_error(e, self.endpoints.timeout))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| transport_error(e, self.endpoints.timeout))?;

        debug!("GET {} -> {} ({} bytes)", url, status.as_u16(), body.len());
        Ok((status, body))
    }
}

fn transport_error(error: reqwest::Error, timeout: Duration) -> ResolutionError {
    if error.is_timeout() {
        ResolutionError::transport(format!(
            "no response within {}s ({})",
            timeout.as_secs_f32(),
            error
        ))
    } else if error.is_connect() {
        ResolutionError::transport(format!("connection failed ({})", error))
    } else {
        ResolutionError::transport(error)
    }
}

#[async_trait]
impl PlanVersionResolver for CockpitClient {
    async fn resolve_latest_version(
        &self,
        query: &PlanQuery,
    ) -> Result<PlanVersion, ResolutionError> {
        let url = self.endpoints.lookup_url();
        let (status, body) = self
            .get(
                &url,
                &[
                    ("projectNumber", query.project_number()),
                    ("planTitle", query.plan_title()),
                ],
            )
            .await?;
        classify_lookup(status, &body)
    }
}

#[async_trait]
impl VerificationChecker for CockpitClient {
    async fn check_verification(
        &self,
        version_id: &VersionId,
    ) -> Result<VerificationReport, ResolutionError> {
        let url = self.endpoints.verify_api_url(version_id);
        let (status, body) = self.get(&url, &[]).await?;
        classify_verify(status, &body, version_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planqr_domain::VersionNumber;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const LOOKUP: &str = "/api/public/get-latest-plan-version-id";

    fn client_for(server: &MockServer) -> CockpitClient {
        CockpitClient::new(
            ServiceEndpoints::default()
                .with_base_url(server.uri())
                .with_timeout(Duration::from_secs(5)),
        )
        .unwrap()
    }

    fn grundriss() -> PlanQuery {
        PlanQuery::try_new("25-001", "Grundriss Erdgeschoss").unwrap()
    }

    #[tokio::test]
    async fn test_resolve_latest_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LOOKUP))
            .and(query_param("projectNumber", "25-001"))
            .and(query_param("planTitle", "Grundriss Erdgeschoss"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"versionId": "abc123", "versionNumber": 7})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let version = client_for(&server)
            .resolve_latest_version(&grundriss())
            .await
            .unwrap();

        assert_eq!(version.version_id.as_str(), "abc123");
        assert_eq!(version.version_number, VersionNumber::Numeric(7));
    }

    #[tokio::test]
    async fn test_every_call_queries_the_service() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LOOKUP))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"versionId": "abc123", "versionNumber": 7})),
            )
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.resolve_latest_version(&grundriss()).await.unwrap();
        client.resolve_latest_version(&grundriss()).await.unwrap();
    }

    #[tokio::test]
    async fn test_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LOOKUP))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"error": "Plan nicht gefunden"})),
            )
            .mount(&server)
            .await;

        let error = client_for(&server)
            .resolve_latest_version(&grundriss())
            .await
            .unwrap_err();

        assert_eq!(error, ResolutionError::not_found("Plan nicht gefunden"));
    }

    #[tokio::test]
    async fn test_empty_query_is_passed_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LOOKUP))
            .and(query_param("projectNumber", ""))
            .respond_with(ResponseTemplate::new(400).set_body_json(
                json!({"error": "Projektnummer und Plantitel sind erforderlich"}),
            ))
            .mount(&server)
            .await;

        let error = client_for(&server)
            .resolve_latest_version(&PlanQuery::new("", ""))
            .await
            .unwrap_err();

        assert!(matches!(
            error,
            ResolutionError::ServiceError {
                status_code: 400,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LOOKUP))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"versionId": "abc123", "versionNumber": 7}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = CockpitClient::new(
            ServiceEndpoints::default()
                .with_base_url(server.uri())
                .with_timeout(Duration::from_millis(200)),
        )
        .unwrap();

        let error = client
            .resolve_latest_version(&grundriss())
            .await
            .unwrap_err();

        assert!(matches!(error, ResolutionError::TransportError { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        // Port 9 (discard) is closed on test machines; the connection is refused
        let client = CockpitClient::new(
            ServiceEndpoints::default()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(Duration::from_secs(2)),
        )
        .unwrap();

        let error = client
            .resolve_latest_version(&grundriss())
            .await
            .unwrap_err();

        assert!(matches!(error, ResolutionError::TransportError { .. }));
    }

    #[tokio::test]
    async fn test_check_verification_outdated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/public/verify/old42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "VERALTET",
                "planTitle": "Grundriss Erdgeschoss",
                "scannedVersion": 6,
                "currentVersion": 7,
                "currentVersionId": "abc123",
                "project": {"id": "p1", "projectNumber": "25-001", "name": "Haus am See"}
            })))
            .mount(&server)
            .await;

        let report = client_for(&server)
            .check_verification(&VersionId::parse("old42").unwrap())
            .await
            .unwrap();

        assert!(!report.is_current());
        assert_eq!(report.version_id.as_str(), "old42");
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let result =
            CockpitClient::new(ServiceEndpoints::default().with_base_url("ftp://example.at"));
        assert!(matches!(result, Err(CockpitError::InvalidUrl { .. })));
    }
}
