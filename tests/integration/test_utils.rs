//! Shared fixtures for the integration tests.

use http::StatusCode;
use serde_json::json;

use dualserve::{GatewayEvent, HandlerError, Method, Response, RouteTable};

/// Build a route table covering the behaviors the tests exercise: a plain
/// endpoint, a failing endpoint, path parameters, a method pair on one path,
/// and an echo endpoint reflecting body/query/header inputs.
pub fn demo_table() -> RouteTable {
    let mut table = RouteTable::new();

    table.mount(Method::Get, "/hello", |_request| {
        Ok(Response::ok("Hello, World!"))
    });

    table.mount(Method::Get, "/fail", |_request| {
        Err(HandlerError::new("simulated backend outage"))
    });

    table.mount(Method::Get, "/users/{id}", |request| {
        let id = request.path_param("id").unwrap_or("");
        Response::json(StatusCode::OK, &json!({ "user_id": id }))
            .map_err(HandlerError::from_error)
    });

    table.mount(Method::Get, "/items", |_request| Ok(Response::ok("list")));
    table.mount(Method::Post, "/items", |_request| {
        Ok(Response::new(StatusCode::CREATED).with_body("created"))
    });

    table.mount(Method::Post, "/echo", |request| {
        let response = Response::ok(request.body_str().into_owned())
            .with_header("X-Echo-Query-Page", request.query("page").unwrap_or(""))
            .with_header(
                "X-Echo-Content-Type",
                request.header("content-type").unwrap_or(""),
            );
        Ok(response)
    });

    table
}

/// A gateway event with just a method and path.
pub fn gateway_event(method: &str, path: &str) -> GatewayEvent {
    GatewayEvent {
        http_method: method.to_string(),
        path: path.to_string(),
        ..GatewayEvent::default()
    }
}
