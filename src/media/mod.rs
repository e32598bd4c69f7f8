//! Uploaded image persistence.
//!
//! Posts reference their cover image by the path string returned from a
//! [`MediaStore`]. Where and how bytes land (local disk, object storage) is
//! the store's business; the service layer only carries the returned path
//! into the record.

pub mod disk;

pub use disk::DiskMediaStore;

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::MediaError;

/// An image file lifted out of a multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Client-supplied filename, used only as a naming hint
    pub filename: String,

    /// File contents
    pub data: Bytes,
}

/// Persists uploaded images and hands back their stored path.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Persist `upload` and return the path string to record on the post.
    async fn save(&self, upload: &ImageUpload) -> Result<String, MediaError>;
}
