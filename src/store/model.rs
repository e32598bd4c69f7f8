use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored blog post.
///
/// `author_id` is set once at creation and never reassigned; updates may only
/// touch the content fields and `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// Unique identifier
    pub id: Uuid,

    /// Post title
    pub title: String,

    /// Short description shown in listings
    pub description: String,

    /// Full post body
    pub content: String,

    /// Stored path of the cover image
    pub image_url: String,

    /// Owning user identifier
    pub author_id: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a post. Assembled by the service from the request
/// payload, the stored image path, and the resolved user.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub description: String,
    pub content: String,
    pub image_url: String,
    pub author_id: Uuid,
}

/// The mutable fields of a post.
#[derive(Debug, Clone)]
pub struct BlogChanges {
    pub title: String,
    pub description: String,
    pub content: String,
    pub image_url: String,
}
