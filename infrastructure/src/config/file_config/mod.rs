//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Conversion into application configuration happens through the
//! `to_*` methods, which also report what they had to repair.

mod logging;
mod output;
mod qr;
mod service;

pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use qr::FileQrConfig;
pub use service::FileServiceConfig;

use planqr_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Cockpit service endpoints
    pub service: FileServiceConfig,
    /// QR rendering
    pub qr: FileQrConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Run log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings describe values
    /// that were replaced by their defaults.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.service.validate();
        issues.extend(self.qr.to_artifact_config().1);
        issues
    }
}
