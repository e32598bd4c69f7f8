//! Configuration management for the blog server.
//!
//! This module provides a flexible configuration system that supports:
//! - Command-line arguments via clap
//! - Environment variables with `BLOG_` prefix
//! - Sensible defaults for all optional settings
//!
//! # Environment Variables
//!
//! - `BLOG_HOST` - Server bind address (default: 0.0.0.0)
//! - `BLOG_PORT` - Server port (default: 3000)
//! - `BLOG_SESSION_COOKIE` - Session cookie name (default: access_token)
//! - `BLOG_UPLOAD_DIR` - Directory for stored images (default: uploads)
//! - `BLOG_BODY_LIMIT` - Max request body size in bytes (default: 8388608)
//! - `BLOG_CORS_ORIGINS` - Allowed CORS origins, comma-separated
//! - `BLOG_SEED_TOKEN` - Pre-registered dev session token

use clap::Parser;

use crate::server::routes::{DEFAULT_BODY_LIMIT, DEFAULT_SESSION_COOKIE};

// =============================================================================
// Default Values
// =============================================================================

/// Default server host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory for stored images.
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

// =============================================================================
// CLI Arguments
// =============================================================================

/// Blog Press - a blog publishing server.
///
/// Serves CRUD endpoints for blog posts with cookie-session authorization
/// and multipart image uploads.
#[derive(Parser, Debug, Clone)]
#[command(name = "blog-press")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    // =========================================================================
    // Server Configuration
    // =========================================================================
    /// Host address to bind the server to.
    #[arg(long, default_value = DEFAULT_HOST, env = "BLOG_HOST")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "BLOG_PORT")]
    pub port: u16,

    // =========================================================================
    // Session Configuration
    // =========================================================================
    /// Name of the cookie carrying the session token.
    #[arg(long, default_value = DEFAULT_SESSION_COOKIE, env = "BLOG_SESSION_COOKIE")]
    pub session_cookie: String,

    /// Pre-register a session token for the built-in `dev` user.
    ///
    /// Token issuance belongs to the identity system, not this server; this
    /// flag exists so a fresh instance can accept mutations at all.
    /// WARNING: Only use in development/testing.
    #[arg(long, env = "BLOG_SEED_TOKEN")]
    pub seed_token: Option<String>,

    // =========================================================================
    // Upload Configuration
    // =========================================================================
    /// Directory where uploaded images are stored.
    #[arg(long, default_value = DEFAULT_UPLOAD_DIR, env = "BLOG_UPLOAD_DIR")]
    pub upload_dir: String,

    /// Maximum request body size in bytes.
    #[arg(long, default_value_t = DEFAULT_BODY_LIMIT, env = "BLOG_BODY_LIMIT")]
    pub body_limit: usize,

    // =========================================================================
    // CORS Configuration
    // =========================================================================
    /// Allowed CORS origins (comma-separated).
    ///
    /// If not specified, allows any origin.
    #[arg(long, env = "BLOG_CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Option<Vec<String>>,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.session_cookie.trim().is_empty() {
            return Err(
                "Session cookie name is required. Set --session-cookie or BLOG_SESSION_COOKIE"
                    .to_string(),
            );
        }

        if self.session_cookie.contains([';', '=', ' ']) {
            return Err("Session cookie name must not contain ';', '=' or spaces".to_string());
        }

        if self.upload_dir.trim().is_empty() {
            return Err("Upload directory is required. Set --upload-dir or BLOG_UPLOAD_DIR"
                .to_string());
        }

        if self.body_limit == 0 {
            return Err("body_limit must be greater than 0".to_string());
        }

        if let Some(ref token) = self.seed_token {
            if token.is_empty() {
                return Err("seed_token must not be empty when set".to_string());
            }
        }

        Ok(())
    }

    /// Get the server bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// =============================================================================
// Tests
// =============================================================================
