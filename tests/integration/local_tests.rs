//! Local-mode integration tests driving the Axum transport.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dualserve::build_router;

use super::test_utils::demo_table;

fn router() -> axum::Router {
    build_router(Arc::new(demo_table()), false)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

// =============================================================================
// Basic Dispatch
// =============================================================================

#[tokio::test]
async fn test_hello_world() {
    let request = Request::builder()
        .uri("/hello")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello, World!");
}

#[tokio::test]
async fn test_unknown_path_is_404_not_found() {
    let request = Request::builder()
        .uri("/missing")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "Not Found");
}

#[tokio::test]
async fn test_wrong_method_is_404() {
    // /hello is registered for GET only.
    let request = Request::builder()
        .method("DELETE")
        .uri("/hello")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_method_pair_on_one_path() {
    let get = Request::builder().uri("/items").body(Body::empty()).unwrap();
    let response = router().oneshot(get).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "list");

    let post = Request::builder()
        .method("POST")
        .uri("/items")
        .body(Body::empty())
        .unwrap();
    let response = router().oneshot(post).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_string(response).await, "created");
}

// =============================================================================
// Path Parameters
// =============================================================================

#[tokio::test]
async fn test_path_param_reaches_handler() {
    let request = Request::builder()
        .uri("/users/42")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["user_id"], "42");
}

#[tokio::test]
async fn test_extra_segment_does_not_match() {
    let request = Request::builder()
        .uri("/users/42/extra")
        .body(Body::empty())
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Request Propagation
// =============================================================================

#[tokio::test]
async fn test_body_query_and_headers_reach_handler() {
    let request = Request::builder()
        .method("POST")
        .uri("/echo?page=7&page=8")
        .header("Content-Type", "text/plain")
        .body(Body::from("echo me"))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Handler-set headers are propagated to the transport.
    assert_eq!(response.headers().get("X-Echo-Query-Page").unwrap(), "7");
    assert_eq!(
        response.headers().get("X-Echo-Content-Type").unwrap(),
        "text/plain"
    );
    assert_eq!(body_string(response).await, "echo me");
}

#[tokio::test]
async fn test_unreadable_body_degrades_to_empty() {
    // A body stream failing mid-read must not fail the request.
    let chunks: Vec<Result<bytes::Bytes, std::io::Error>> = vec![
        Ok(bytes::Bytes::from_static(b"partial")),
        Err(std::io::Error::other("connection reset")),
    ];
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .body(Body::from_stream(futures_util::stream::iter(chunks)))
        .unwrap();

    let response = router().oneshot(request).await.unwrap();

    // The handler still ran, seeing an empty body.
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "");
}

// =============================================================================
// Handler Failures
// =============================================================================

#[tokio::test]
async fn test_handler_failure_is_generic_500() {
    let request = Request::builder().uri("/fail").body(Body::empty()).unwrap();

    let response = router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert_eq!(body, "Internal Server Error");
    assert!(!body.contains("outage"), "error detail must not leak");
}
