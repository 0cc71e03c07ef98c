//! Filesystem storage for images attached to memories.

use crate::Result;
use image::ImageFormat;
use std::path::{Path, PathBuf};

/// Stores attachments as `<root>/<record-id>.jpg`.
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
}

impl ImageStore {
    /// Create an image store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Where the image for `id` lives.
    pub fn path_for(&self, id: &str) -> PathBuf {
        self.root.join(format!("{}.jpg", id))
    }

    /// Decode `bytes` (PNG or JPEG) and write them as a JPEG for `id`.
    pub fn save(&self, id: &str, bytes: &[u8]) -> Result<PathBuf> {
        let image = image::load_from_memory(bytes)?;

        std::fs::create_dir_all(&self.root)?;
        let path = self.path_for(id);
        // JPEG has no alpha channel
        image
            .to_rgb8()
            .save_with_format(&path, ImageFormat::Jpeg)?;

        tracing::debug!(path = %path.display(), "Saved memory image");
        Ok(path)
    }

    /// Remove a previously saved image. A missing file is not an error.
    pub fn remove(&self, path: &Path) -> Result<()> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
