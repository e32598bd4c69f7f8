//! In-memory session table.
//!
//! Sessions are keyed by the SHA-256 digest of the token, so the clear-text
//! token never sits in the table. Cloning shares the underlying map.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;

use crate::error::SessionError;

use super::{SessionResolver, User};

/// Session resolver backed by an in-process table.
#[derive(Clone, Default)]
pub struct MemorySessionResolver {
    sessions: Arc<RwLock<HashMap<String, User>>>,
}

impl MemorySessionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session, making `token` resolve to `user`.
    pub async fn insert(&self, token: &str, user: User) {
        self.sessions
            .write()
            .await
            .insert(digest(token), user);
    }

    /// Drop the session for `token`, if any.
    pub async fn revoke(&self, token: &str) {
        self.sessions.write().await.remove(&digest(token));
    }
}

#[async_trait]
impl SessionResolver for MemorySessionResolver {
    async fn resolve(&self, token: &str) -> Result<User, SessionError> {
        self.sessions
            .read()
            .await
            .get(&digest(token))
            .cloned()
            .ok_or(SessionError::UnknownToken)
    }
}

/// Hex-encoded SHA-256 of the token.
fn digest(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
