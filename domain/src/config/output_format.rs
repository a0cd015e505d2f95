//! Output format value object

use serde::{Deserialize, Serialize};

/// How a run's result is reported to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report with placement instructions (default)
    #[default]
    Text,
    /// A single JSON document, for host automation scripts
    Json,
}
