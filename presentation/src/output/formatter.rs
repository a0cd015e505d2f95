//! Output formatter trait

use planqr_application::{CheckVerificationError, PipelineError};
use planqr_domain::VerificationReport;

/// Trait for formatting run failures and verification checks
///
/// Successful runs are reported by the placement notifier, which knows
/// where the image went.
pub trait OutputFormatter {
    /// Format a failed run
    fn format_error(&self, error: &PipelineError) -> String;

    /// Format a verification status check
    fn format_report(&self, report: &VerificationReport) -> String;

    /// Format a failed verification status check
    fn format_check_error(&self, error: &CheckVerificationError) -> String;
}
