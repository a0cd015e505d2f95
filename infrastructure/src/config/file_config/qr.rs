//! QR configuration from TOML (`[qr]` section)

use planqr_application::ArtifactConfig;
use planqr_domain::{ConfigIssue, ConfigIssueCode, ErrorCorrection, QrRenderOptions};
use serde::{Deserialize, Serialize};

/// Raw QR rendering configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQrConfig {
    /// "low", "medium", "quartile" or "high"
    pub error_correction: String,
    /// Pixels per module
    pub module_size: u32,
    /// Quiet zone in modules
    pub border: u32,
}

impl Default for FileQrConfig {
    fn default() -> Self {
        let defaults = QrRenderOptions::default();
        Self {
            error_correction: defaults.error_correction.as_str().to_string(),
            module_size: defaults.module_size,
            border: defaults.border,
        }
    }
}

impl FileQrConfig {
    /// Convert to [`ArtifactConfig`], falling back to defaults for values
    /// that cannot be used.
    pub fn to_artifact_config(&self) -> (ArtifactConfig, Vec<ConfigIssue>) {
        let mut issues = Vec::new();
        let defaults = QrRenderOptions::default();

        let error_correction = match self.error_correction.parse::<ErrorCorrection>() {
            Ok(level) => level,
            Err(_) => {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidEnumValue {
                        field: "qr.error_correction".to_string(),
                        value: self.error_correction.clone(),
                        valid_values: vec![
                            "low".to_string(),
                            "medium".to_string(),
                            "quartile".to_string(),
                            "high".to_string(),
                        ],
                    },
                    format!(
                        "qr.error_correction: unknown value '{}', falling back to '{}'",
                        self.error_correction, defaults.error_correction
                    ),
                ));
                defaults.error_correction
            }
        };

        let module_size = if self.module_size == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "qr.module_size".to_string(),
                },
                "qr.module_size must be at least 1 pixel",
            ));
            defaults.module_size
        } else {
            bounded(
                "qr.module_size",
                self.module_size,
                QrRenderOptions::MAX_MODULE_SIZE,
                defaults.module_size,
                &mut issues,
            )
        };
        let border = bounded(
            "qr.border",
            self.border,
            QrRenderOptions::MAX_BORDER,
            defaults.border,
            &mut issues,
        );

        let config = ArtifactConfig::default()
            .with_error_correction(error_correction)
            .with_module_size(module_size)
            .with_border(border);
        (config, issues)
    }
}

/// Reject `value` above `max` and fall back to `default`.
fn bounded(
    field: &str,
    value: u32,
    max: u32,
    default: u32,
    issues: &mut Vec<ConfigIssue>,
) -> u32 {
    if value <= max {
        return value;
    }
    issues.push(ConfigIssue::error(
        ConfigIssueCode::OutOfRange {
            field: field.to_string(),
            value: u64::from(value),
            max: u64::from(max),
        },
        format!("{} must be at most {} (got {})", field, max, value),
    ));
    default
}
