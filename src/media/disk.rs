//! Disk-backed media store.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::error::MediaError;

use super::{ImageUpload, MediaStore};

/// Media store writing uploads under a root directory.
///
/// Files are named `<uuid>-<sanitized filename>` so concurrent uploads of
/// the same filename never collide.
#[derive(Clone)]
pub struct DiskMediaStore {
    root: PathBuf,
}

impl DiskMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl MediaStore for DiskMediaStore {
    async fn save(&self, upload: &ImageUpload) -> Result<String, MediaError> {
        let name = format!("{}-{}", Uuid::new_v4(), sanitize(&upload.filename));
        let path = self.root.join(&name);

        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| MediaError::Io(e.to_string()))?;
        tokio::fs::write(&path, &upload.data)
            .await
            .map_err(|e| MediaError::Io(e.to_string()))?;

        debug!(file = %path.display(), bytes = upload.data.len(), "Stored upload");

        Ok(path.to_string_lossy().into_owned())
    }
}

/// Strip directory components and anything outside a conservative character
/// set. An empty or fully-stripped name falls back to "upload".
fn sanitize(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);

    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}
