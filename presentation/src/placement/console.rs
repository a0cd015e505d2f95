//! Manual placement instructions

use colored::Colorize;
use planqr_application::PlacementNotifier;
use planqr_domain::VerificationArtifact;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;
use tracing::warn;

/// Prints the artifact and step-by-step placement instructions.
pub struct ConsolePlacementNotifier<W> {
    output: Mutex<W>,
}

impl ConsolePlacementNotifier<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsolePlacementNotifier<W> {
    pub fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    pub fn render(artifact: &VerificationArtifact, target_layout_hint: Option<&str>) -> String {
        let mut text = String::new();

        text.push_str(&format!("\n{}\n", "QR code created".green().bold()));
        text.push_str(&format!(
            "  {} {}\n",
            "File:   ".cyan(),
            artifact.image_path.display()
        ));
        text.push_str(&format!(
            "  {} {}\n",
            "URL:    ".cyan(),
            artifact.verification_url
        ));
        text.push_str(&format!(
            "  {} {}\n",
            "Version:".cyan(),
            artifact.version_number
        ));

        let layout = match target_layout_hint {
            Some(hint) => format!("Open the layout '{}'", hint),
            None => "Open the target layout".to_string(),
        };
        text.push_str(&format!("\n{}\n", "Placement".bold()));
        text.push_str(&format!("  1. {}\n", layout));
        text.push_str("  2. Place an external drawing (File > External Content > Place Drawing)\n");
        text.push_str(&format!(
            "  3. Select the file {}\n",
            artifact.file_name().bold()
        ));
        text.push_str("  4. Position the QR code in the title block\n");
        text
    }
}

impl<W: Write + Send> PlacementNotifier for ConsolePlacementNotifier<W> {
    fn notify_artifact_ready(
        &self,
        artifact: &VerificationArtifact,
        target_layout_hint: Option<&str>,
    ) {
        let text = Self::render(artifact, target_layout_hint);
        if let Ok(mut output) = self.output.lock()
            && let Err(e) = output
                .write_all(text.as_bytes())
                .and_then(|_| output.flush())
        {
            warn!("Could not print placement instructions: {}", e);
        }
    }
}
