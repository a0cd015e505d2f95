//! [`QrEncoder`] backed by the `qrcode` crate.

use planqr_application::{EncodeError, QrEncoder};
use planqr_domain::{ErrorCorrection, QrRenderOptions, RasterImage};
use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};
use tracing::trace;

/// Encodes text as byte-mode QR symbols of the smallest fitting version.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrCodeEncoder;

impl QrCodeEncoder {
    pub fn new() -> Self {
        Self
    }
}

fn ec_level(level: ErrorCorrection) -> EcLevel {
    match level {
        ErrorCorrection::Low => EcLevel::L,
        ErrorCorrection::Medium => EcLevel::M,
        ErrorCorrection::Quartile => EcLevel::Q,
        ErrorCorrection::High => EcLevel::H,
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, text: &str, options: &QrRenderOptions) -> Result<RasterImage, EncodeError> {
        let level = ec_level(options.error_correction);
        let code = QrCode::with_error_correction_level(text.as_bytes(), level).map_err(|e| {
            match e {
                QrError::DataTooLong => EncodeError::DataTooLong { len: text.len() },
                other => EncodeError::Other(other.to_string()),
            }
        })?;

        let modules: Vec<bool> = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        let image = RasterImage::from_modules(&modules, code.width(), options).ok_or(
            EncodeError::RasterTooLarge {
                modules: code.width(),
                module_size: options.module_size,
                border: options.border,
            },
        )?;

        trace!(
            "Encoded {} bytes as {}x{} modules ({}px)",
            text.len(),
            code.width(),
            code.width(),
            image.width()
        );
        Ok(image)
    }
}

// ==================== Tests ====================
