//! Test utilities for integration tests.
//!
//! This module provides a router factory over the in-memory collaborators,
//! a mock media store, and helpers for building multipart request bodies.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_press::blog::BlogService;
use blog_press::error::MediaError;
use blog_press::media::{ImageUpload, MediaStore};
use blog_press::session::{MemorySessionResolver, User};
use blog_press::store::{BlogStore, MemoryBlogStore, NewBlogPost};
use blog_press::{create_router, RouterConfig};

/// Cookie name used by every test router.
pub const TEST_COOKIE: &str = "access_token";

/// Multipart boundary used by the body builders.
pub const BOUNDARY: &str = "test-boundary-0a1b2c";

// =============================================================================
// Mock Media Store
// =============================================================================

/// Media store that records saves without touching the filesystem.
///
/// Cloning shares the underlying list, so a test can hold a clone and
/// assert how many uploads were persisted.
#[derive(Clone, Default)]
pub struct MemoryMedia {
    saved: Arc<RwLock<Vec<String>>>,
}

impl MemoryMedia {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn saved(&self) -> Vec<String> {
        self.saved.read().await.clone()
    }
}

#[async_trait]
impl MediaStore for MemoryMedia {
    async fn save(&self, upload: &ImageUpload) -> Result<String, MediaError> {
        let path = format!("uploads/{}-{}", Uuid::new_v4(), upload.filename);
        self.saved.write().await.push(path.clone());
        Ok(path)
    }
}

// =============================================================================
// Test Application
// =============================================================================

/// A router plus handles on its collaborators for observing side effects.
pub struct TestApp {
    pub router: Router,
    pub store: MemoryBlogStore,
    pub resolver: MemorySessionResolver,
    pub media: MemoryMedia,
}

impl TestApp {
    /// Build a fresh app with empty collaborators and tracing disabled.
    pub fn new() -> Self {
        let store = MemoryBlogStore::new();
        let resolver = MemorySessionResolver::new();
        let media = MemoryMedia::new();

        let service = BlogService::new(resolver.clone(), store.clone(), media.clone());
        let router = create_router(service, RouterConfig::new(TEST_COOKIE).with_tracing(false));

        Self {
            router,
            store,
            resolver,
            media,
        }
    }

    /// Register a session so `token` resolves to a new user named `username`.
    pub async fn seed_session(&self, token: &str, username: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
        };
        self.resolver.insert(token, user.clone()).await;
        user
    }

    /// Insert a post directly into the store, bypassing the HTTP surface.
    pub async fn seed_post(&self, author_id: Uuid, title: &str) -> Uuid {
        let created = self
            .store
            .create(NewBlogPost {
                title: title.to_string(),
                description: "seeded".to_string(),
                content: "seeded content".to_string(),
                image_url: "uploads/seeded.jpg".to_string(),
                author_id,
            })
            .await
            .unwrap();
        created.id
    }
}

// =============================================================================
// Request Builders
// =============================================================================

/// Build a multipart body with the standard blog text fields and an optional
/// image part.
pub fn multipart_body(
    fields: &[(&str, &str)],
    image: Option<(&str, &[u8])>,
) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }

    if let Some((filename, data)) = image {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: image/jpeg\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let content_type = format!("multipart/form-data; boundary={}", BOUNDARY);
    (content_type, body)
}

/// The standard complete field set for create/update requests.
pub fn standard_fields() -> Vec<(&'static str, &'static str)> {
    vec![("title", "T"), ("description", "D"), ("content", "C")]
}

/// Build a mutating request with an optional session cookie.
pub fn blog_request(
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    content_type: &str,
    body: Vec<u8>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type);

    if let Some(token) = cookie {
        builder = builder.header("cookie", format!("{}={}", TEST_COOKIE, token));
    }

    builder.body(Body::from(body)).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}
