//! CORS preflight tests, including parity between the two execution modes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use dualserve::{build_router, handle_event, Method, Response, RouteTable};

use super::test_utils::{demo_table, gateway_event};

fn items_table() -> RouteTable {
    let mut table = RouteTable::new();
    table.mount(Method::Get, "/items", |_request| Ok(Response::ok("")));
    table.mount(Method::Post, "/items", |_request| Ok(Response::ok("")));
    table
}

#[test]
fn test_allowed_methods_for_items_scenario() {
    // Two routes, GET /items and POST /items.
    assert_eq!(
        items_table().allowed_methods(),
        vec!["GET", "OPTIONS", "POST"]
    );
}

#[test]
fn test_gateway_preflight_headers() {
    let response = handle_event(&items_table(), gateway_event("OPTIONS", "/items"));

    assert_eq!(response.status_code, 200);
    assert_eq!(
        response
            .headers
            .get("Access-Control-Allow-Origin")
            .map(String::as_str),
        Some("*")
    );
    assert_eq!(
        response
            .headers
            .get("Access-Control-Allow-Methods")
            .map(String::as_str),
        Some("GET, OPTIONS, POST")
    );
    assert_eq!(
        response
            .headers
            .get("Access-Control-Allow-Headers")
            .map(String::as_str),
        Some("Content-Type, Authorization")
    );
}

#[tokio::test]
async fn test_local_preflight_headers() {
    let router = build_router(Arc::new(items_table()), false);

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/items")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), 200);
    let headers = response.headers();
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
    assert_eq!(
        headers.get("Access-Control-Allow-Methods").unwrap(),
        "GET, OPTIONS, POST"
    );
    assert_eq!(
        headers.get("Access-Control-Allow-Headers").unwrap(),
        "Content-Type, Authorization"
    );
}

#[tokio::test]
async fn test_preflight_identical_across_modes() {
    let gateway = handle_event(&demo_table(), gateway_event("OPTIONS", "/anything"));

    let router = build_router(Arc::new(demo_table()), false);
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/anything")
        .body(Body::empty())
        .unwrap();
    let local = router.oneshot(request).await.unwrap();

    assert_eq!(u16::from(local.status()), gateway.status_code);
    for (name, value) in &gateway.headers {
        assert_eq!(
            local.headers().get(name).and_then(|v| v.to_str().ok()),
            Some(value.as_str()),
            "header {name} differs between modes"
        );
    }
}

#[tokio::test]
async fn test_local_real_responses_carry_allow_origin() {
    // Post-preflight requests need the origin header too, or browsers
    // discard the response. 404s get it as well.
    let router = build_router(Arc::new(demo_table()), false);
    let request = Request::builder()
        .uri("/hello")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );

    let router = build_router(Arc::new(demo_table()), false);
    let request = Request::builder()
        .uri("/missing")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), 404);
    assert_eq!(
        response.headers().get("Access-Control-Allow-Origin").unwrap(),
        "*"
    );
}

#[test]
fn test_gateway_real_responses_carry_allow_origin() {
    let response = handle_event(&demo_table(), gateway_event("GET", "/hello"));
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response
            .headers
            .get("Access-Control-Allow-Origin")
            .map(String::as_str),
        Some("*")
    );
}

#[test]
fn test_preflight_always_200_even_with_empty_table() {
    let response = handle_event(&RouteTable::new(), gateway_event("OPTIONS", "/anything"));
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response
            .headers
            .get("Access-Control-Allow-Methods")
            .map(String::as_str),
        Some("OPTIONS")
    );
}
