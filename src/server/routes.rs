//! Router configuration for the blog server.
//!
//! # Route Structure
//!
//! ```text
//! /health              - Health check
//! /blogs               - GET list, POST create
//! /blogs/{id}          - GET fetch, PUT/PATCH update, DELETE remove
//! ```
//!
//! Reads are public; mutations authorize inside the handlers against the
//! session cookie, so there is no auth middleware layer here.
//!
//! # Example
//!
//! ```ignore
//! use blog_press::blog::BlogService;
//! use blog_press::server::routes::{create_router, RouterConfig};
//!
//! let service = BlogService::new(resolver, store, media);
//! let config = RouterConfig::new("access_token")
//!     .with_cors_origins(vec!["https://example.com".to_string()]);
//!
//! let router = create_router(service, config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::blog::BlogService;
use crate::media::MediaStore;
use crate::session::SessionResolver;
use crate::store::BlogStore;

use super::handlers::{
    create_blog_handler, delete_blog_handler, get_blog_handler, health_handler,
    list_blogs_handler, update_blog_handler, AppState,
};

/// Default maximum request body size (8 MiB), bounding image uploads.
pub const DEFAULT_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Default session cookie name.
pub const DEFAULT_SESSION_COOKIE: &str = "access_token";

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Clone)]
pub struct RouterConfig {
    /// Name of the cookie carrying the session token
    pub session_cookie: String,

    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Maximum request body size in bytes
    pub body_limit: usize,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration with the given session cookie name.
    ///
    /// By default CORS allows any origin, the body limit is 8 MiB, and
    /// tracing is enabled.
    pub fn new(session_cookie: impl Into<String>) -> Self {
        Self {
            session_cookie: session_cookie.into(),
            cors_origins: None,
            body_limit: DEFAULT_BODY_LIMIT,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    /// Pass None (or don't call this method) to allow any origin.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Set the maximum request body size in bytes.
    pub fn with_body_limit(mut self, bytes: usize) -> Self {
        self.body_limit = bytes;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_COOKIE)
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// Builds the complete Axum router with the blog routes, health check,
/// CORS configuration, body limit, and optional request tracing.
pub fn create_router<R, S, M>(service: BlogService<R, S, M>, config: RouterConfig) -> Router
where
    R: SessionResolver + 'static,
    S: BlogStore + 'static,
    M: MediaStore + 'static,
{
    let app_state = AppState::new(service, config.session_cookie.clone());

    let cors = build_cors_layer(&config);

    let router = Router::new()
        .route("/health", get(health_handler))
        .route(
            "/blogs",
            get(list_blogs_handler::<R, S, M>).post(create_blog_handler::<R, S, M>),
        )
        .route(
            "/blogs/{id}",
            get(get_blog_handler::<R, S, M>)
                .put(update_blog_handler::<R, S, M>)
                .patch(update_blog_handler::<R, S, M>)
                .delete(delete_blog_handler::<R, S, M>),
        )
        .with_state(app_state)
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => {
            // No origins allowed - this effectively disables CORS
            cors
        }
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
