//! Authorization integration tests.
//!
//! Tests verify:
//! - Mutations without a session cookie are rejected
//! - Unresolvable tokens are rejected
//! - Rejected requests never reach the store
//! - The cookie name is the configured one, nothing else

use axum::http::StatusCode;
use blog_press::store::BlogStore;
use tower::ServiceExt;
use uuid::Uuid;

use super::test_utils::{
    blog_request, body_json, multipart_body, standard_fields, TestApp, TEST_COOKIE,
};

#[tokio::test]
async fn test_create_without_cookie_is_401() {
    let app = TestApp::new();

    let (content_type, body) = multipart_body(&standard_fields(), Some(("c.jpg", b"jpeg")));
    let request = blog_request("POST", "/blogs", None, &content_type, body);

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "unauthorized");

    assert!(app.store.is_empty().await);
    assert!(app.media.saved().await.is_empty());
}

#[tokio::test]
async fn test_create_with_unknown_token_is_401() {
    let app = TestApp::new();

    let (content_type, body) = multipart_body(&standard_fields(), Some(("c.jpg", b"jpeg")));
    let request = blog_request("POST", "/blogs", Some("abc"), &content_type, body);

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.store.is_empty().await);
}

#[tokio::test]
async fn test_update_with_unknown_token_is_401() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let id = app.seed_post(owner, "Original").await;

    let (content_type, body) = multipart_body(&standard_fields(), Some(("c.jpg", b"jpeg")));
    let request = blog_request(
        "PUT",
        &format!("/blogs/{}", id),
        Some("abc"),
        &content_type,
        body,
    );

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let post = app.store.get(id).await.unwrap();
    assert_eq!(post.title, "Original");
}

#[tokio::test]
async fn test_delete_with_unknown_token_is_401() {
    let app = TestApp::new();
    let owner = Uuid::new_v4();
    let id = app.seed_post(owner, "Still here").await;

    let request = blog_request(
        "DELETE",
        &format!("/blogs/{}", id),
        Some("abc"),
        "text/plain",
        Vec::new(),
    );

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.len().await, 1);
}

#[tokio::test]
async fn test_revoked_token_is_401() {
    let app = TestApp::new();
    app.seed_session("tok", "alice").await;
    app.resolver.revoke("tok").await;

    let (content_type, body) = multipart_body(&standard_fields(), Some(("c.jpg", b"jpeg")));
    let request = blog_request("POST", "/blogs", Some("tok"), &content_type, body);

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_under_wrong_cookie_name_is_ignored() {
    let app = TestApp::new();
    app.seed_session("tok", "alice").await;

    let (content_type, body) = multipart_body(&standard_fields(), Some(("c.jpg", b"jpeg")));
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/blogs")
        .header("content-type", content_type)
        .header("cookie", "session=tok")
        .body(axum::body::Body::from(body))
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_among_other_cookies_is_found() {
    let app = TestApp::new();
    let user = app.seed_session("tok", "alice").await;

    let (content_type, body) = multipart_body(&standard_fields(), Some(("c.jpg", b"jpeg")));
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/blogs")
        .header("content-type", content_type)
        .header("cookie", format!("theme=dark; {}=tok; lang=en", TEST_COOKIE))
        .body(axum::body::Body::from(body))
        .unwrap();

    let response = app.router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["author_id"], user.id.to_string());
}
