//! QR encoder port
//!
//! Any conformant QR encoder can be plugged in. The encoder picks the
//! smallest symbol version that holds the payload.

use planqr_domain::{QrRenderOptions, RasterImage};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Payload of {len} bytes does not fit into any QR symbol")]
    DataTooLong { len: usize },

    #[error("A {modules}-module symbol cannot be rasterized at {module_size}px per module with a {border}-module border")]
    RasterTooLarge {
        modules: usize,
        module_size: u32,
        border: u32,
    },

    #[error("QR encoding failed: {0}")]
    Other(String),
}

pub trait QrEncoder: Send + Sync {
    /// Encode `text` and rasterize it black on white.
    fn encode(&self, text: &str, options: &QrRenderOptions) -> Result<RasterImage, EncodeError>;
}
