//! Artifact persistence

mod png_store;

pub use png_store::PngArtifactStore;
