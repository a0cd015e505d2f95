//! Output configuration from TOML (`[output]` section)

use planqr_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Directory for generated images (default: OS temp dir)
    pub directory: Option<PathBuf>,
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            directory: None,
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// Resolved image directory.
    pub fn directory_or_default(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_deserialize() {
        let toml_str = r#"
[output]
format = "json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_directory_defaults_to_temp_dir() {
        assert_eq!(
            FileOutputConfig::default().directory_or_default(),
            std::env::temp_dir()
        );
    }
}
