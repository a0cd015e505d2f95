//! PNG artifact store
//!
//! Images are encoded in memory, written to a temporary file in the target
//! directory and then linked into place without overwriting. A failure at
//! any step drops the temporary file, so no partial PNG is ever visible
//! under an artifact name.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use planqr_application::{ArtifactStore, StoreError};
use planqr_domain::{ArtifactName, RasterImage};
use std::io::{self, Write};
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Upper bound for `-N` collision suffixes.
const MAX_COLLISION_ATTEMPTS: u32 = 100;

/// Writes greyscale PNG files into one directory.
#[derive(Debug, Clone)]
pub struct PngArtifactStore {
    directory: PathBuf,
}

impl PngArtifactStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Encode `image` as an 8-bit greyscale PNG.
    pub fn encode_png(image: &RasterImage) -> Result<Vec<u8>, image::ImageError> {
        let mut buf = Vec::new();
        PngEncoder::new(&mut buf).write_image(
            image.pixels(),
            image.width(),
            image.height(),
            ExtendedColorType::L8,
        )?;
        Ok(buf)
    }

    fn write_temp(&self, bytes: &[u8]) -> io::Result<NamedTempFile> {
        std::fs::create_dir_all(&self.directory)?;
        let mut temp = tempfile::Builder::new()
            .prefix(".planqr-")
            .suffix(".tmp")
            .tempfile_in(&self.directory)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;
        Ok(temp)
    }
}

impl ArtifactStore for PngArtifactStore {
    fn extension(&self) -> &str {
        "png"
    }

    fn persist(&self, name: &ArtifactName, image: &RasterImage) -> Result<PathBuf, StoreError> {
        let primary = self.directory.join(name.file_name());

        let bytes = Self::encode_png(image).map_err(|e| StoreError::new(&primary, e))?;
        let mut temp = self
            .write_temp(&bytes)
            .map_err(|e| StoreError::new(&primary, e))?;

        for attempt in 1..=MAX_COLLISION_ATTEMPTS {
            let target = self.directory.join(name.collision_variant(attempt));
            match temp.persist_noclobber(&target) {
                Ok(_) => {
                    info!("Wrote {} ({} bytes)", target.display(), bytes.len());
                    return Ok(target);
                }
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => {
                    debug!("{} exists, trying next name", target.display());
                    temp = e.file;
                }
                Err(e) => return Err(StoreError::new(&target, e.error)),
            }
        }

        Err(StoreError::new(
            &primary,
            format!("{} names already taken", MAX_COLLISION_ATTEMPTS),
        ))
    }
}

// ==================== Tests ====================
