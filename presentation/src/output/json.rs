//! JSON output for host automation scripts
//!
//! Every document carries a `status` field so a script can branch on it
//! without parsing messages.

use crate::output::formatter::OutputFormatter;
use planqr_application::{CheckVerificationError, PipelineError, ResolutionError};
use planqr_domain::VerificationReport;
use serde_json::{Value, json};

/// Formats results as single-line JSON documents
pub struct JsonFormatter;

impl JsonFormatter {
    /// Machine-readable failure category.
    pub fn error_kind(error: &PipelineError) -> &'static str {
        match error {
            PipelineError::InvalidInput(_) => "invalid_input",
            PipelineError::Resolution { source, .. } => Self::resolution_kind(source),
            PipelineError::Build { .. } => "build_failed",
            PipelineError::Cancelled { .. } => "cancelled",
        }
    }

    fn resolution_kind(error: &ResolutionError) -> &'static str {
        match error {
            ResolutionError::NotFound { .. } => "not_found",
            ResolutionError::ServiceError { .. } => "service_error",
            ResolutionError::TransportError { .. } => "transport_error",
        }
    }

    pub fn error_value(error: &PipelineError) -> Value {
        let mut value = json!({
            "status": "failed",
            "state": error.final_state().as_str(),
            "kind": Self::error_kind(error),
            "message": error.to_string(),
        });
        let query = match error {
            PipelineError::Resolution { query, .. }
            | PipelineError::Build { query, .. }
            | PipelineError::Cancelled { query, .. } => Some(query),
            PipelineError::InvalidInput(_) => None,
        };
        if let Some(query) = query {
            value["projectNumber"] = json!(query.project_number());
            value["planTitle"] = json!(query.plan_title());
        }
        value
    }

    pub fn report_value(report: &VerificationReport) -> Value {
        serde_json::to_value(report).unwrap_or(Value::Null)
    }

    pub fn check_error_value(error: &CheckVerificationError) -> Value {
        let kind = match error {
            CheckVerificationError::InvalidInput(_) => "invalid_input",
            CheckVerificationError::Service { source, .. } => Self::resolution_kind(source),
        };
        json!({
            "status": "failed",
            "kind": kind,
            "message": error.to_string(),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_error(&self, error: &PipelineError) -> String {
        Self::error_value(error).to_string()
    }

    fn format_report(&self, report: &VerificationReport) -> String {
        Self::report_value(report).to_string()
    }

    fn format_check_error(&self, error: &CheckVerificationError) -> String {
        Self::check_error_value(error).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planqr_domain::{PlanQuery, VerificationStatus, VersionId, VersionNumber};

    #[test]
    fn test_not_found_document() {
        let error = PipelineError::Resolution {
            query: PlanQuery::try_new("25-001", "Grundriss Erdgeschoss").unwrap(),
            source: ResolutionError::not_found("Plan nicht gefunden"),
        };

        let doc: Value = serde_json::from_str(&JsonFormatter.format_error(&error)).unwrap();

        assert_eq!(doc["status"], "failed");
        assert_eq!(doc["kind"], "not_found");
        assert_eq!(doc["state"], error.final_state().as_str());
        assert_eq!(doc["projectNumber"], "25-001");
        assert!(doc["message"].as_str().unwrap().contains("Plan nicht gefunden"));
    }

    #[test]
    fn test_cancel_before_start_reports_idle() {
        let error = PipelineError::Cancelled {
            query: PlanQuery::try_new("25-001", "Grundriss Erdgeschoss").unwrap(),
            state: planqr_domain::RunState::Idle,
        };

        let doc = JsonFormatter::error_value(&error);

        assert_eq!(doc["kind"], "cancelled");
        assert_eq!(doc["state"], "idle");
        assert_eq!(doc["planTitle"], "Grundriss Erdgeschoss");
    }

    #[test]
    fn test_report_document() {
        let report = VerificationReport {
            version_id: VersionId::parse("abc123").unwrap(),
            plan_title: Some("Schnitt A-A".to_string()),
            project: None,
            status: VerificationStatus::Current {
                plan_version: VersionNumber::Numeric(3),
            },
        };

        let doc: Value = serde_json::from_str(&JsonFormatter.format_report(&report)).unwrap();

        assert_eq!(doc["status"], "current");
        assert_eq!(doc["versionId"], "abc123");
        assert_eq!(doc["planVersion"], 3);
    }

    #[test]
    fn test_invalid_check_input() {
        let error = CheckVerificationError::InvalidInput(planqr_domain::InputError::EmptyPlanTitle);
        let doc = JsonFormatter::check_error_value(&error);
        assert_eq!(doc["kind"], "invalid_input");
    }
}
