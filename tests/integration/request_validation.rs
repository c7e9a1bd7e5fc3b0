use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use pretty_assertions::assert_eq;
use test_case::test_case;
use tower::ServiceExt;

use crate::common::{self, Upstreams};

#[test_case(Method::GET ; "get")]
#[test_case(Method::PUT ; "put")]
#[test_case(Method::DELETE ; "delete")]
#[tokio::test]
async fn test_other_methods_rejected(method: Method) {
    let upstreams = Upstreams::start().await;

    let (status, body) = common::send(upstreams.router(), method, "/api/convert", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert!(!body.success);
    assert_eq!(body.message.as_deref(), Some("Method not allowed"));
    assert_eq!(upstreams.request_count().await, 0);
}

#[test_case(r#"{"target":"qobuz"}"# ; "missing link")]
#[test_case(r#"{"link":"https://open.spotify.com/track/abc123"}"# ; "missing target")]
#[test_case(r#"{"link":"   ","target":"qobuz"}"# ; "blank link")]
#[test_case(r#"{"link":"https://open.spotify.com/track/a","target":"tidal"}"# ; "unknown target")]
#[test_case(r#"{"link":42,"target":"qobuz"}"# ; "wrong field type")]
#[test_case("not json" ; "malformed body")]
#[tokio::test]
async fn test_invalid_input_rejected(body: &str) {
    let upstreams = Upstreams::start().await;

    let (status, response) = common::send(
        upstreams.router(),
        Method::POST,
        "/api/convert",
        Some(body.to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!response.success);
    assert!(response.url.is_none());
    assert!(response.message.is_some());
    assert_eq!(upstreams.request_count().await, 0);
}

#[tokio::test]
async fn test_missing_content_type_rejected() {
    let upstreams = Upstreams::start().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/convert")
        .body(Body::from(r#"{"link":"x","target":"qobuz"}"#))
        .unwrap();

    let response = upstreams.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_index_serves_form() {
    let upstreams = Upstreams::start().await;
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let response = upstreams.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].clone();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/convert"));
}
