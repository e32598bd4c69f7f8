//! Session resolution.
//!
//! A session token is an opaque capability: the server never issues or
//! inspects tokens, it only asks a [`SessionResolver`] which user a token
//! belongs to. Token issuance, passwords, and expiry live in whatever
//! identity system feeds the resolver.

pub mod memory;

pub use memory::MemorySessionResolver;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SessionError;

/// A user record, read-only from the server's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, used for ownership scoping
    pub id: Uuid,

    /// Display name
    pub username: String,
}

/// Resolves opaque session tokens to users.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    /// Resolve `token` to the user it belongs to.
    ///
    /// Fails with [`SessionError::UnknownToken`] when the token does not
    /// correspond to any live session.
    async fn resolve(&self, token: &str) -> Result<User, SessionError>;
}
