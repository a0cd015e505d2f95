//! Infrastructure layer for planqr
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod cockpit;
pub mod config;
pub mod logging;
pub mod qr;
pub mod storage;

// Re-export commonly used types
pub use cockpit::{client::CockpitClient, error::CockpitError};
pub use config::{
    ConfigError, ConfigLoader, FileConfig, FileLoggingConfig, FileOutputConfig, FileQrConfig,
    FileServiceConfig,
};
pub use logging::JsonlRunLogger;
pub use qr::QrCodeEncoder;
pub use storage::PngArtifactStore;
