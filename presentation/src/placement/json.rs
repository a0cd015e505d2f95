//! JSON handoff for host automation scripts

use planqr_application::PlacementNotifier;
use planqr_domain::VerificationArtifact;
use serde::Serialize;
use std::io::{self, Stdout, Write};
use std::path::Path;
use std::sync::Mutex;
use tracing::warn;

/// One line of JSON a host script reads to place the image.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementHandoff<'a> {
    pub status: &'static str,
    pub image_path: &'a Path,
    pub file_name: String,
    pub verification_url: &'a str,
    pub version_number: &'a planqr_domain::VersionNumber,
    pub created_at: String,
    pub target_layout: Option<&'a str>,
}

impl<'a> PlacementHandoff<'a> {
    pub fn new(artifact: &'a VerificationArtifact, target_layout_hint: Option<&'a str>) -> Self {
        Self {
            status: "ready",
            image_path: &artifact.image_path,
            file_name: artifact.file_name(),
            verification_url: &artifact.verification_url,
            version_number: &artifact.version_number,
            created_at: artifact.created_at.to_rfc3339(),
            target_layout: target_layout_hint,
        }
    }
}

/// Writes a [`PlacementHandoff`] document per artifact.
pub struct JsonPlacementNotifier<W> {
    output: Mutex<W>,
}

impl JsonPlacementNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> JsonPlacementNotifier<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }
}

impl<W: Write + Send> PlacementNotifier for JsonPlacementNotifier<W> {
    fn notify_artifact_ready(
        &self,
        artifact: &VerificationArtifact,
        target_layout_hint: Option<&str>,
    ) {
        let handoff = PlacementHandoff::new(artifact, target_layout_hint);
        let line = match serde_json::to_string(&handoff) {
            Ok(line) => line,
            Err(e) => {
                warn!("Could not serialize placement handoff: {}", e);
                return;
            }
        };
        if let Ok(mut output) = self.output.lock()
            && let Err(e) = writeln!(output, "{}", line).and_then(|_| output.flush())
        {
            warn!("Could not write placement handoff: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use planqr_domain::VersionNumber;
    use serde_json::Value;
    use std::path::PathBuf;

    #[test]
    fn test_handoff_document() {
        let artifact = VerificationArtifact {
            verification_url: "https://portal.marcelgladbach.at/verify/abc123".to_string(),
            image_path: PathBuf::from("/tmp/QR_25-001_Grundriss_Erdgeschoss_V7_20250314092653.png"),
            version_number: VersionNumber::Numeric(7),
            created_at: Local.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).single().unwrap(),
        };
        let notifier = JsonPlacementNotifier::new(Vec::new());

        notifier.notify_artifact_ready(&artifact, Some("A3 Plankopf"));

        let out = String::from_utf8(notifier.output.lock().unwrap().clone()).unwrap();
        assert_eq!(out.lines().count(), 1);
        let doc: Value = serde_json::from_str(out.trim()).unwrap();
        assert_eq!(doc["status"], "ready");
        assert_eq!(
            doc["fileName"],
            "QR_25-001_Grundriss_Erdgeschoss_V7_20250314092653.png"
        );
        assert_eq!(doc["versionNumber"], 7);
        assert_eq!(doc["targetLayout"], "A3 Plankopf");
        assert_eq!(
            doc["verificationUrl"],
            "https://portal.marcelgladbach.at/verify/abc123"
        );
    }
}
