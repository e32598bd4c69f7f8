//! HTTP request handlers for the blog API.
//!
//! # Endpoints
//!
//! - `GET /blogs` - List all posts
//! - `GET /blogs/{id}` - Fetch one post
//! - `POST /blogs` - Create a post (session cookie + image required)
//! - `PUT|PATCH /blogs/{id}` - Update a post (session cookie + image required)
//! - `DELETE /blogs/{id}` - Delete a post (session cookie required)
//! - `GET /health` - Health check

use axum::{
    extract::{Multipart, Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::blog::{BlogDraft, BlogService};
use crate::error::{BlogError, SessionError, StoreError};
use crate::media::{ImageUpload, MediaStore};
use crate::session::SessionResolver;
use crate::store::{BlogPost, BlogStore};

use super::auth::session_token;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state, passed to all handlers via Axum's State extractor.
pub struct AppState<R, S, M> {
    /// The blog service handling every operation
    pub service: BlogService<R, S, M>,

    /// Name of the cookie carrying the session token
    pub session_cookie: String,
}

impl<R, S, M> Clone for AppState<R, S, M> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            session_cookie: self.session_cookie.clone(),
        }
    }
}

impl<R, S, M> AppState<R, S, M>
where
    R: SessionResolver,
    S: BlogStore,
    M: MediaStore,
{
    pub fn new(service: BlogService<R, S, M>, session_cookie: impl Into<String>) -> Self {
        Self {
            service,
            session_cookie: session_cookie.into(),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error kind identifier (e.g., "not_found", "unauthorized")
    pub code: String,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Envelope for the blog listing endpoint.
#[derive(Debug, Serialize)]
pub struct BlogListResponse {
    /// All stored posts
    pub data: Vec<BlogPost>,
}

/// Confirmation body for updates.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert BlogError to an HTTP response.
///
/// This is the single error-translation step: every failure from
/// validation, session resolution, or store calls flows through here.
/// Severity drives the log level: 5xx at ERROR, 401/400 at WARN, 404 at
/// DEBUG (common and expected). Backend detail is logged, never returned.
impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // 400 Bad Request - caller input invalid
            BlogError::ImageRequired => {
                (StatusCode::BAD_REQUEST, "bad_request", self.to_string())
            }
            BlogError::MissingField(_) => {
                (StatusCode::BAD_REQUEST, "missing_field", self.to_string())
            }
            BlogError::Malformed(_) => {
                (StatusCode::BAD_REQUEST, "malformed_body", self.to_string())
            }

            // 401 Unauthorized - token missing or unresolvable.
            // A resolver backend fault is not the caller's fault: 500.
            BlogError::Unauthorized(session_err) => match session_err {
                SessionError::MissingToken | SessionError::UnknownToken => (
                    StatusCode::UNAUTHORIZED,
                    "unauthorized",
                    "Invalid or missing session".to_string(),
                ),
                SessionError::Backend(detail) => {
                    error!(detail = %detail, "Session backend failure");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal_error",
                        "Internal server error".to_string(),
                    )
                }
            },

            // 404 Not Found - also covers ownership-scoped misses
            BlogError::Store(StoreError::NotFound { id }) => (
                StatusCode::NOT_FOUND,
                "not_found",
                format!("Blog not found: {}", id),
            ),

            // 500 Internal Server Error - collaborator faults, detail withheld
            BlogError::Store(StoreError::Backend(detail)) => {
                error!(detail = %detail, "Store backend failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                )
            }
            BlogError::Media(media_err) => {
                error!(detail = %media_err, "Media store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error".to_string(),
                )
            }
        };

        if status == StatusCode::NOT_FOUND {
            debug!(code = code, status = status.as_u16(), "{}", message);
        } else if status.is_client_error() {
            warn!(code = code, status = status.as_u16(), "{}", message);
        }

        (status, Json(ErrorResponse::new(code, message))).into_response()
    }
}

// =============================================================================
// Multipart Extraction
// =============================================================================

/// Collect the blog form out of a multipart body.
///
/// Text parts `title`, `description`, and `content` are all required; the
/// file part `image` is optional here (its presence is the service's
/// precondition so the missing-file error ranks above auth failures).
/// Unknown parts are ignored.
async fn collect_blog_form(
    mut multipart: Multipart,
) -> Result<(BlogDraft, Option<ImageUpload>), BlogError> {
    let mut title = None;
    let mut description = None;
    let mut content = None;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BlogError::Malformed(e.to_string()))?
    {
        let name = field.name().map(|s| s.to_string());
        match name.as_deref() {
            Some("title") => {
                title = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| BlogError::Malformed(e.to_string()))?,
                );
            }
            Some("description") => {
                description = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| BlogError::Malformed(e.to_string()))?,
                );
            }
            Some("content") => {
                content = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| BlogError::Malformed(e.to_string()))?,
                );
            }
            Some("image") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| BlogError::Malformed(e.to_string()))?;
                image = Some(ImageUpload { filename, data });
            }
            _ => {}
        }
    }

    let draft = BlogDraft {
        title: title.ok_or(BlogError::MissingField("title"))?,
        description: description.ok_or(BlogError::MissingField("description"))?,
        content: content.ok_or(BlogError::MissingField("content"))?,
    };

    Ok((draft, image))
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle health check requests.
///
/// `GET /health` → `200 OK` with `{"status": "healthy", "version": "..."}`.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Handle blog listing requests.
///
/// `GET /blogs` → `200 OK` with `{"data": [BlogPost, ...]}`. No session
/// required.
pub async fn list_blogs_handler<R, S, M>(
    State(state): State<AppState<R, S, M>>,
) -> Result<Json<BlogListResponse>, BlogError>
where
    R: SessionResolver,
    S: BlogStore,
    M: MediaStore,
{
    let data = state.service.list_all().await?;
    Ok(Json(BlogListResponse { data }))
}

/// Handle single-blog requests.
///
/// `GET /blogs/{id}` → `200 OK` with the post, or `404` if the id is
/// unknown. No session required.
pub async fn get_blog_handler<R, S, M>(
    State(state): State<AppState<R, S, M>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BlogPost>, BlogError>
where
    R: SessionResolver,
    S: BlogStore,
    M: MediaStore,
{
    let blog = state.service.get(id).await?;
    Ok(Json(blog))
}

/// Handle blog creation.
///
/// `POST /blogs` with a multipart body (`title`, `description`, `content`,
/// `image`) and the session cookie → `201 Created` with the stored post.
///
/// # Errors
///
/// - `400 Bad Request`: no image attached, or a text field missing
/// - `401 Unauthorized`: session cookie missing or unresolvable
/// - `500 Internal Server Error`: collaborator fault
pub async fn create_blog_handler<R, S, M>(
    State(state): State<AppState<R, S, M>>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<(StatusCode, Json<BlogPost>), BlogError>
where
    R: SessionResolver,
    S: BlogStore,
    M: MediaStore,
{
    let token = session_token(&headers, &state.session_cookie);
    let (draft, image) = collect_blog_form(multipart).await?;

    let created = state
        .service
        .create(draft, image, token.as_deref())
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Handle blog updates.
///
/// `PUT|PATCH /blogs/{id}` with the same body and preconditions as create.
/// Returns a confirmation message rather than the updated record.
///
/// # Errors
///
/// - `400 Bad Request`: no image attached, or a text field missing
/// - `401 Unauthorized`: session cookie missing or unresolvable
/// - `404 Not Found`: no post with this id owned by the acting user
pub async fn update_blog_handler<R, S, M>(
    State(state): State<AppState<R, S, M>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Json<MessageResponse>, BlogError>
where
    R: SessionResolver,
    S: BlogStore,
    M: MediaStore,
{
    let token = session_token(&headers, &state.session_cookie);
    let (draft, image) = collect_blog_form(multipart).await?;

    state
        .service
        .update(id, draft, image, token.as_deref())
        .await?;

    Ok(Json(MessageResponse {
        message: "Update blog successfully".to_string(),
    }))
}

/// Handle blog deletion.
///
/// `DELETE /blogs/{id}` with the session cookie → `204 No Content`, empty
/// body. The store rejects ids not owned by the acting user.
///
/// # Errors
///
/// - `401 Unauthorized`: session cookie missing or unresolvable
/// - `404 Not Found`: no post with this id owned by the acting user
pub async fn delete_blog_handler<R, S, M>(
    State(state): State<AppState<R, S, M>>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
) -> Result<StatusCode, BlogError>
where
    R: SessionResolver,
    S: BlogStore,
    M: MediaStore,
{
    let token = session_token(&headers, &state.session_cookie);
    state.service.delete(id, token.as_deref()).await?;

    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Tests
// =============================================================================
