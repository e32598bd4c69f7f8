//! In-memory blog store.
//!
//! Backed by a `HashMap` behind `tokio::sync::RwLock`. Cloning shares the
//! underlying map, so a test can hold a clone and observe the side effects
//! of requests served through the router.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StoreError;

use super::model::{BlogChanges, BlogPost, NewBlogPost};
use super::BlogStore;

/// Blog store holding all records in process memory.
#[derive(Clone, Default)]
pub struct MemoryBlogStore {
    posts: Arc<RwLock<HashMap<Uuid, BlogPost>>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts. Used by tests to assert that failed requests
    /// left the store untouched.
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn create(&self, post: NewBlogPost) -> Result<BlogPost, StoreError> {
        let now = Utc::now();
        let record = BlogPost {
            id: Uuid::new_v4(),
            title: post.title,
            description: post.description,
            content: post.content,
            image_url: post.image_url,
            author_id: post.author_id,
            created_at: now,
            updated_at: now,
        };

        self.posts.write().await.insert(record.id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn get(&self, id: Uuid) -> Result<BlogPost, StoreError> {
        self.posts
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn update(
        &self,
        id: Uuid,
        author_id: Uuid,
        changes: BlogChanges,
    ) -> Result<BlogPost, StoreError> {
        let mut posts = self.posts.write().await;

        // Scoped lookup: a foreign post is indistinguishable from a missing one.
        let record = posts
            .get_mut(&id)
            .filter(|post| post.author_id == author_id)
            .ok_or(StoreError::NotFound { id })?;

        record.title = changes.title;
        record.description = changes.description;
        record.content = changes.content;
        record.image_url = changes.image_url;
        record.updated_at = Utc::now();

        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid, author_id: Uuid) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;

        match posts.get(&id) {
            Some(post) if post.author_id == author_id => {
                posts.remove(&id);
                Ok(())
            }
            _ => Err(StoreError::NotFound { id }),
        }
    }
}
