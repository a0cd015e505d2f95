//! Console output formatter for run results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use planqr_application::{
    CheckVerificationError, GenerateQrOutput, PipelineError, ResolutionError,
};
use planqr_domain::{VerificationReport, VerificationStatus};

/// Formats run results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Closing summary of a finished run
    pub fn format_success(output: &GenerateQrOutput) -> String {
        format!(
            "{} {} (version {})\n",
            "Done:".green().bold(),
            output.artifact.file_name(),
            output.version.version_number
        )
    }

    /// Failure message: says what was looked up, what failed and what to do
    pub fn format_error(error: &PipelineError) -> String {
        let mut output = format!("{} {}\n", "Error:".red().bold(), error);
        if let Some(hint) = Self::hint(error) {
            output.push_str(&format!("{}\n", hint.dimmed()));
        }
        output
    }

    fn hint(error: &PipelineError) -> Option<&'static str> {
        match error {
            PipelineError::InvalidInput(_) => {
                Some("Both project number and plan title are required.")
            }
            PipelineError::Resolution { source, .. } => Some(Self::resolution_hint(source)),
            PipelineError::Build { .. } => Some("No QR code was written."),
            PipelineError::Cancelled { .. } => None,
        }
    }

    fn resolution_hint(error: &ResolutionError) -> &'static str {
        match error {
            ResolutionError::NotFound { .. } => {
                "Check your input: project number and plan title must match the cockpit exactly."
            }
            ResolutionError::ServiceError { .. } | ResolutionError::TransportError { .. } => {
                "The service is unavailable. Try again later."
            }
        }
    }

    pub fn format_report(report: &VerificationReport) -> String {
        let mut output = String::new();

        let title = report.plan_title.as_deref().unwrap_or("(untitled plan)");
        output.push_str(&format!("{} {}\n", "Plan:".cyan().bold(), title));
        if let Some(project) = &report.project {
            let name = project
                .name
                .as_deref()
                .map(|n| format!(" ({})", n))
                .unwrap_or_default();
            output.push_str(&format!(
                "{} {}{}\n",
                "Project:".cyan().bold(),
                project.project_number,
                name
            ));
        }

        match &report.status {
            VerificationStatus::Current { plan_version } => {
                output.push_str(&format!(
                    "{} version {} is the latest version\n",
                    "CURRENT".green().bold(),
                    plan_version
                ));
            }
            VerificationStatus::Outdated {
                scanned_version,
                current_version,
                current_version_id,
            } => {
                output.push_str(&format!(
                    "{} version {} has been superseded by version {} ({})\n",
                    "OUTDATED".yellow().bold(),
                    scanned_version,
                    current_version,
                    current_version_id
                ));
            }
        }

        output
    }

    pub fn format_check_error(error: &CheckVerificationError) -> String {
        let mut output = format!("{} {}\n", "Error:".red().bold(), error);
        if let CheckVerificationError::Service { source, .. } = error {
            output.push_str(&format!("{}\n", Self::resolution_hint(source).dimmed()));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_error(&self, error: &PipelineError) -> String {
        Self::format_error(error)
    }

    fn format_report(&self, report: &VerificationReport) -> String {
        Self::format_report(report)
    }

    fn format_check_error(&self, error: &CheckVerificationError) -> String {
        Self::format_check_error(error)
    }
}
