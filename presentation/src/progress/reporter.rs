//! Progress reporting for a run

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use planqr_application::ports::progress::RunProgressNotifier;
use planqr_domain::{PlanQuery, PlanVersion, RunState, VerificationArtifact};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn message(to: RunState, query: &PlanQuery) -> String {
        match to {
            RunState::Resolving => format!("Looking up {}", query),
            _ => to.display_name().to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunProgressNotifier for ProgressReporter {
    fn on_state_change(&self, _from: RunState, to: RunState, query: &PlanQuery) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };

        if to == RunState::Resolving {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.set_prefix("planqr");
            pb.enable_steady_tick(Duration::from_millis(100));
            *slot = Some(pb);
        }

        if to.is_terminal() {
            if let Some(pb) = slot.take() {
                if to.is_failure() {
                    pb.abandon_with_message(format!("{}", to.display_name().red()));
                } else {
                    pb.finish_and_clear();
                }
            }
        } else if let Some(pb) = slot.as_ref() {
            pb.set_message(Self::message(to, query));
        }
    }

    fn on_version_resolved(&self, version: &PlanVersion) {
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.println(format!(
                "{} Found version {}",
                "v".green(),
                version.version_number
            ));
        }
    }

    /// Placement writes to stdout next, so the spinner must be gone by now.
    fn on_artifact_built(&self, artifact: &VerificationArtifact) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            pb.println(format!("{} Wrote {}", "v".green(), artifact.file_name()));
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl RunProgressNotifier for SimpleProgress {
    fn on_state_change(&self, _from: RunState, to: RunState, query: &PlanQuery) {
        match to {
            RunState::Resolving => eprintln!("{} Looking up {}", "->".cyan(), query),
            RunState::Building => eprintln!("{} {}", "->".cyan(), to.display_name()),
            RunState::ResolutionFailed | RunState::BuildFailed => {
                eprintln!("  {} {}", "x".red(), to.display_name())
            }
            _ => {}
        }
    }

    fn on_version_resolved(&self, version: &PlanVersion) {
        eprintln!("  {} Found version {}", "v".green(), version.version_number);
    }

    fn on_artifact_built(&self, artifact: &VerificationArtifact) {
        eprintln!("  {} Wrote {}", "v".green(), artifact.file_name());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use planqr_domain::VersionNumber;
    use std::path::PathBuf;

    fn query() -> PlanQuery {
        PlanQuery::try_new("25-001", "Grundriss Erdgeschoss").unwrap()
    }

    fn artifact() -> VerificationArtifact {
        VerificationArtifact {
            verification_url: "https://portal.marcelgladbach.at/verify/abc123".to_string(),
            image_path: PathBuf::from("/tmp/QR_25-001_Grundriss_Erdgeschoss_V7_20250314092653.png"),
            version_number: VersionNumber::Numeric(7),
            created_at: Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).single().unwrap(),
        }
    }

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        let q = query();

        reporter.on_state_change(RunState::Idle, RunState::Resolving, &q);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_state_change(RunState::Resolving, RunState::Resolved, &q);
        reporter.on_state_change(RunState::Resolved, RunState::Building, &q);
        reporter.on_state_change(RunState::Building, RunState::Built, &q);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_artifact_built(&artifact());
        assert!(reporter.spinner.lock().unwrap().is_none());

        reporter.on_state_change(RunState::Built, RunState::Done, &q);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_failure_clears_spinner() {
        let reporter = ProgressReporter::new();
        let q = query();

        reporter.on_state_change(RunState::Idle, RunState::Resolving, &q);
        reporter.on_state_change(RunState::Resolving, RunState::ResolutionFailed, &q);

        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_resolving_message_names_the_plan() {
        let message = ProgressReporter::message(RunState::Resolving, &query());
        assert!(message.contains("Grundriss Erdgeschoss"));
        assert!(message.contains("25-001"));
    }
}
