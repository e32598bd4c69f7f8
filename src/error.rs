use thiserror::Error;

use uuid::Uuid;

/// Errors raised by the session resolver collaborator.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// No session cookie was present on the request
    #[error("Missing session token")]
    MissingToken,

    /// Token did not resolve to any user
    #[error("Unknown session token")]
    UnknownToken,

    /// Session backend failure (database down, etc.)
    #[error("Session backend error: {0}")]
    Backend(String),
}

/// Errors raised by the blog store collaborator.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No record matches the identifier, or it is not owned by the acting user
    #[error("Blog not found: {id}")]
    NotFound { id: Uuid },

    /// Storage backend failure
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Errors raised when persisting an uploaded image.
#[derive(Debug, Clone, Error)]
pub enum MediaError {
    /// Filesystem write failed
    #[error("Media I/O error: {0}")]
    Io(String),
}

/// Request-level errors for blog operations.
///
/// Every failure inside a blog operation ends up as one of these variants;
/// the HTTP layer translates them to a status and `{code, message}` body in
/// a single place. Handlers never recover locally.
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    /// A mutating request arrived without an attached image file
    #[error("Image is required")]
    ImageRequired,

    /// A required multipart text field is absent
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    /// Multipart body could not be read
    #[error("Malformed request body: {0}")]
    Malformed(String),

    /// Session token missing or unresolvable
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] SessionError),

    /// Store-level failure (includes ownership-scoped misses)
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Image persistence failure
    #[error(transparent)]
    Media(#[from] MediaError),
}
