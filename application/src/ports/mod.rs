//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod artifact_store;
pub mod clock;
pub mod placement;
pub mod progress;
pub mod qr_encoder;
pub mod query_source;
pub mod run_logger;
pub mod verification_checker;
pub mod version_resolver;
