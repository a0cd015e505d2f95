//! Artifact rendering parameters.

use planqr_domain::{ErrorCorrection, QrRenderOptions};
use serde::{Deserialize, Serialize};

/// Controls how the verification QR image is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArtifactConfig {
    pub render: QrRenderOptions,
}

impl ArtifactConfig {
    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.render.error_correction = level;
        self
    }

    pub fn with_module_size(mut self, pixels: u32) -> Self {
        self.render.module_size = pixels;
        self
    }

    pub fn with_border(mut self, modules: u32) -> Self {
        self.render.border = modules;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_high_correction() {
        let config = ArtifactConfig::default();
        assert_eq!(config.render.error_correction, ErrorCorrection::High);
    }

    #[test]
    fn test_builder() {
        let config = ArtifactConfig::default()
            .with_error_correction(ErrorCorrection::Medium)
            .with_module_size(4)
            .with_border(2);
        assert_eq!(config.render.error_correction, ErrorCorrection::Medium);
        assert_eq!(config.render.module_size, 4);
        assert_eq!(config.render.border, 2);
    }
}
