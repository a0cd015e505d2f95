//! Application-level configuration.
//!
//! Explicit configuration structures passed to adapters and use cases at
//! construction:
//!
//! - [`ServiceEndpoints`]: where the cockpit service lives and how long to wait for it
//! - [`ArtifactConfig`]: how QR images are rendered

pub mod artifact;
pub mod service;

pub use artifact::ArtifactConfig;
pub use service::ServiceEndpoints;
