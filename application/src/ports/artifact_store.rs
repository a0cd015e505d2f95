//! Artifact store port
//!
//! Persists rendered QR images. Implementations must be all-or-nothing:
//! after a failed write no partial file may remain, and an existing file is
//! never overwritten.

use planqr_domain::{ArtifactName, RasterImage};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to write {}: {cause}", .path.display())]
pub struct StoreError {
    pub path: PathBuf,
    pub cause: String,
}

impl StoreError {
    pub fn new(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            cause: cause.to_string(),
        }
    }
}

pub trait ArtifactStore: Send + Sync {
    /// File extension of the images this store writes (without dot).
    fn extension(&self) -> &str;

    /// Write `image` under `name`, or under a collision variant of it if
    /// the name is taken. Returns the final path.
    fn persist(&self, name: &ArtifactName, image: &RasterImage) -> Result<PathBuf, StoreError>;
}
