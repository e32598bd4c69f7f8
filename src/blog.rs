//! Blog service: the request-to-resource authorization and mutation flow.
//!
//! Every operation is a single-shot validate → resolve → authorize →
//! execute sequence:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        BlogService                           │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │                    create()                          │    │
//! │  │  1. Require image       3. Store image               │    │
//! │  │  2. Resolve session     4. Assemble + one store write│    │
//! │  └──────────────────────────────────────────────────────┘    │
//! │        │                  │                  │               │
//! │        ▼                  ▼                  ▼               │
//! │  ┌────────────┐   ┌───────────────┐   ┌────────────┐         │
//! │  │ MediaStore │   │SessionResolver│   │ BlogStore  │         │
//! │  └────────────┘   └───────────────┘   └────────────┘         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service holds no per-request state and never retries; failures
//! propagate to the HTTP layer's single translation point. If validation or
//! session resolution fails, the store is never called.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::error::{BlogError, SessionError};
use crate::media::{ImageUpload, MediaStore};
use crate::session::{SessionResolver, User};
use crate::store::{BlogChanges, BlogPost, BlogStore, NewBlogPost};

/// The text fields of a create or update request.
#[derive(Debug, Clone)]
pub struct BlogDraft {
    pub title: String,
    pub description: String,
    pub content: String,
}

/// Orchestrates blog operations over the three collaborators.
///
/// # Type Parameters
///
/// * `R` - session resolver
/// * `S` - blog store
/// * `M` - media store
pub struct BlogService<R, S, M> {
    resolver: Arc<R>,
    store: Arc<S>,
    media: Arc<M>,
}

impl<R, S, M> Clone for BlogService<R, S, M> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            store: Arc::clone(&self.store),
            media: Arc::clone(&self.media),
        }
    }
}

impl<R, S, M> BlogService<R, S, M>
where
    R: SessionResolver,
    S: BlogStore,
    M: MediaStore,
{
    pub fn new(resolver: R, store: S, media: M) -> Self {
        Self {
            resolver: Arc::new(resolver),
            store: Arc::new(store),
            media: Arc::new(media),
        }
    }

    /// All posts, in no particular order. No authorization.
    pub async fn list_all(&self) -> Result<Vec<BlogPost>, BlogError> {
        debug!("Listing blogs");
        let blogs = self.store.list().await?;
        debug!(count = blogs.len(), "Listed blogs");
        Ok(blogs)
    }

    /// One post by id. No authorization.
    pub async fn get(&self, id: Uuid) -> Result<BlogPost, BlogError> {
        let blog = self.store.get(id).await?;
        debug!(id = %blog.id, "Fetched blog");
        Ok(blog)
    }

    /// Create a post owned by the token's user.
    ///
    /// The image check runs before session resolution, so a request missing
    /// both the file and a valid token reports the missing file.
    pub async fn create(
        &self,
        draft: BlogDraft,
        image: Option<ImageUpload>,
        token: Option<&str>,
    ) -> Result<BlogPost, BlogError> {
        debug!(title = %draft.title, "Creating blog");

        let image = image.ok_or(BlogError::ImageRequired)?;
        let user = self.resolve(token).await?;
        let image_url = self.media.save(&image).await?;

        let created = self
            .store
            .create(NewBlogPost {
                title: draft.title,
                description: draft.description,
                content: draft.content,
                image_url,
                author_id: user.id,
            })
            .await?;

        debug!(id = %created.id, author = %user.username, "Created blog");
        Ok(created)
    }

    /// Replace the content fields of the post `id` owned by the token's user.
    pub async fn update(
        &self,
        id: Uuid,
        draft: BlogDraft,
        image: Option<ImageUpload>,
        token: Option<&str>,
    ) -> Result<BlogPost, BlogError> {
        debug!(id = %id, "Updating blog");

        let image = image.ok_or(BlogError::ImageRequired)?;
        let user = self.resolve(token).await?;
        let image_url = self.media.save(&image).await?;

        let updated = self
            .store
            .update(
                id,
                user.id,
                BlogChanges {
                    title: draft.title,
                    description: draft.description,
                    content: draft.content,
                    image_url,
                },
            )
            .await?;

        debug!(id = %updated.id, "Updated blog");
        Ok(updated)
    }

    /// Delete the post `id` owned by the token's user.
    pub async fn delete(&self, id: Uuid, token: Option<&str>) -> Result<(), BlogError> {
        debug!(id = %id, "Deleting blog");

        let user = self.resolve(token).await?;
        self.store.delete(id, user.id).await?;

        debug!(id = %id, "Deleted blog");
        Ok(())
    }

    async fn resolve(&self, token: Option<&str>) -> Result<User, BlogError> {
        let token = token.ok_or(SessionError::MissingToken)?;
        Ok(self.resolver.resolve(token).await?)
    }
}
