//! Configuration file loading for planqr
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `PLANQR_` environment variables (`PLANQR_SERVICE__BASE_URL`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./planqr.toml` or `./.planqr.toml`
//! 4. Global config: `<config_dir>/planqr/config.toml`
//! 5. Default values
//!
//! Command-line flags are applied on top by the binary.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileLoggingConfig, FileOutputConfig, FileQrConfig, FileServiceConfig,
};
pub use loader::{ConfigError, ConfigLoader};
