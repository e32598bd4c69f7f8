//! # Blog Press
//!
//! A blog publishing server: CRUD endpoints for blog posts backed by a
//! user/session model, with cookie-session authorization and multipart
//! image uploads.
//!
//! Reads are public; every mutation resolves the request's session cookie
//! to a user and scopes destructive operations to the posts that user owns.
//! Failures are categorized (bad request, unauthorized, not found, internal)
//! and translated to HTTP statuses in a single place.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`session`] - Session resolver trait and in-memory token table
//! - [`store`] - Blog post records, store trait, in-memory store
//! - [`media`] - Uploaded image persistence
//! - [`blog`] - The blog service orchestrating the three collaborators
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use blog_press::{
//!     create_router, BlogService, DiskMediaStore, MemoryBlogStore,
//!     MemorySessionResolver, RouterConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     let service = BlogService::new(
//!         MemorySessionResolver::new(),
//!         MemoryBlogStore::new(),
//!         DiskMediaStore::new("uploads"),
//!     );
//!
//!     let router = create_router(service, RouterConfig::new("access_token"));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, router).await.unwrap();
//! }
//! ```

pub mod blog;
pub mod config;
pub mod error;
pub mod media;
pub mod server;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use blog::{BlogDraft, BlogService};
pub use config::Config;
pub use error::{BlogError, MediaError, SessionError, StoreError};
pub use media::{DiskMediaStore, ImageUpload, MediaStore};
pub use server::{
    create_router, session_token, AppState, BlogListResponse, ErrorResponse, HealthResponse,
    MessageResponse, RouterConfig,
};
pub use session::{MemorySessionResolver, SessionResolver, User};
pub use store::{BlogChanges, BlogPost, BlogStore, MemoryBlogStore, NewBlogPost};
