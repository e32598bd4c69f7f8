//! Blog post records and the store abstraction.
//!
//! The store is a collaborator: the service layer only depends on the
//! [`BlogStore`] trait, so the HTTP surface works identically against the
//! in-memory store shipped here or a database-backed implementation.

pub mod memory;
pub mod model;

pub use memory::MemoryBlogStore;
pub use model::{BlogChanges, BlogPost, NewBlogPost};

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;

/// Persistence contract for blog posts.
///
/// Mutations that target an existing record are ownership-scoped: `update`
/// and `delete` take the acting user's id and must refuse to touch a post
/// whose `author_id` differs. A refused mutation reports `NotFound`, the
/// same as a missing id, so callers cannot probe for foreign posts.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Persist a new post and return the stored record.
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, StoreError>;

    /// Return all posts, in no particular order.
    async fn list(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// Return the post with the given id.
    async fn get(&self, id: Uuid) -> Result<BlogPost, StoreError>;

    /// Apply `changes` to the post with the given id, scoped to `author_id`.
    async fn update(
        &self,
        id: Uuid,
        author_id: Uuid,
        changes: BlogChanges,
    ) -> Result<BlogPost, StoreError>;

    /// Delete the post with the given id, scoped to `author_id`.
    async fn delete(&self, id: Uuid, author_id: Uuid) -> Result<(), StoreError>;
}
