//! HTTP server layer for the blog API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │            GET/POST /blogs   PUT/PATCH/DELETE /blogs/{id}       │
//! │                                                                 │
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────────────┐  │
//! │  │  handlers   │  │     auth     │  │        routes          │  │
//! │  │ (requests)  │  │(cookie token)│  │   (router config)      │  │
//! │  └─────────────┘  └──────────────┘  └────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::session_token;
pub use handlers::{
    create_blog_handler, delete_blog_handler, get_blog_handler, health_handler,
    list_blogs_handler, update_blog_handler, AppState, BlogListResponse, ErrorResponse,
    HealthResponse, MessageResponse,
};
pub use routes::{create_router, RouterConfig, DEFAULT_BODY_LIMIT, DEFAULT_SESSION_COOKIE};
