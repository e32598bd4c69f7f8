//! Session token extraction.
//!
//! The token rides in a cookie whose name is injected configuration (it is
//! part of [`RouterConfig`](super::routes::RouterConfig), never a global).
//! The token itself is opaque here; resolving it to a user is the session
//! resolver's job, and failures surface as 401 through the central error
//! translation.

use http::header::COOKIE;
use http::HeaderMap;

/// Pull the session token out of the request's `Cookie` headers.
///
/// Returns `None` when no cookie with `cookie_name` is present. A request
/// may carry several `Cookie` headers; all are scanned, first match wins.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == cookie_name)
        .map(|(_, value)| value.trim().to_string())
}
