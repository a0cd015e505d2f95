//! Run log configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL run log; disabled when unset. A leading `~/` expands to the
    /// home directory.
    pub run_log: Option<PathBuf>,
}

impl FileLoggingConfig {
    pub fn run_log_path(&self) -> Option<PathBuf> {
        let path = self.run_log.as_ref()?;
        if let Ok(rest) = path.strip_prefix("~")
            && let Some(home) = dirs::home_dir()
        {
            return Some(home.join(rest));
        }
        Some(path.clone())
    }
}
