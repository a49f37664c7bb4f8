//! Local execution mode: a directly bound Axum listener.
//!
//! The whole route table hangs off a single fallback service so that this
//! crate's own matcher does the routing; Axum supplies only the transport
//! and its connection handling. Per request the service intercepts OPTIONS,
//! dispatches against the frozen table, builds a canonical [`Request`], and
//! translates the handler's [`Response`] back onto the wire. Every response,
//! preflight or not, leaves with the allow-any-origin CORS header.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Router;
use http::{HeaderMap, StatusCode};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::cors;
use crate::error::ServeError;
use crate::request::{Method, Request};
use crate::response::{Response, INTERNAL_ERROR_BODY};
use crate::routing::{dispatch, RouteMatch, RouteTable};

#[derive(Clone)]
struct LocalState {
    table: Arc<RouteTable>,
}

/// Build the Axum router serving the given route table.
///
/// Exposed separately from [`serve`] so tests can drive the router without
/// binding a socket.
pub fn build_router(table: Arc<RouteTable>, enable_tracing: bool) -> Router {
    let router = Router::new()
        .fallback(route_request)
        .with_state(LocalState { table });

    if enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Bind the listener and serve until process termination.
pub async fn serve(table: Arc<RouteTable>, config: &Config) -> Result<(), ServeError> {
    let addr = config.bind_address();
    let router = build_router(table, !config.no_tracing);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(address = %addr, "listening for connections");
    axum::serve(listener, router).await?;
    Ok(())
}

/// The single entry point for every inbound request.
async fn route_request(
    State(state): State<LocalState>,
    request: axum::extract::Request,
) -> axum::response::Response {
    let (parts, body) = request.into_parts();
    let method = parts.method.as_str().to_owned();
    let path = parts.uri.path().to_owned();

    // Preflight is answered before dispatch; it never reaches the table.
    if method.eq_ignore_ascii_case(Method::Options.as_str()) {
        return into_http_response(cors::options_response(&state.table));
    }

    let Some(RouteMatch { route, path_params }) = dispatch(&state.table, &method, &path) else {
        debug!(%method, %path, "no route matched");
        return into_http_response(cors::with_allow_origin(Response::not_found()));
    };

    // Unreadable bodies degrade to empty rather than failing the request.
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();

    let canonical = Request {
        method: route.method(),
        path,
        body,
        query_params: collect_query(parts.uri.query()),
        headers: collect_headers(&parts.headers),
        path_params,
    };

    match route.invoke(canonical) {
        Ok(response) => into_http_response(cors::with_allow_origin(response)),
        Err(err) => {
            // The cause is logged only; the caller sees the generic body.
            error!(%method, pattern = %route.pattern(), error = %err, "handler failed");
            into_http_response(cors::with_allow_origin(Response::internal_error()))
        }
    }
}

/// Collapse the query string into a single-valued map, first value wins.
fn collect_query(query: Option<&str>) -> HashMap<String, String> {
    let mut params = HashMap::new();
    if let Some(query) = query {
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
    }
    params
}

/// Collapse headers into a single-valued map, first value wins. Names come
/// out of the transport already lower-cased; values that are not valid UTF-8
/// are skipped.
fn collect_headers(headers: &HeaderMap) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for (name, value) in headers {
        if let Ok(value) = value.to_str() {
            map.entry(name.as_str().to_owned())
                .or_insert_with(|| value.to_owned());
        }
    }
    map
}

/// Translate a canonical response into the transport's native shape,
/// propagating handler-set headers.
fn into_http_response(response: Response) -> axum::response::Response {
    let mut builder = http::Response::builder().status(response.status);
    for (name, value) in &response.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    match builder.body(Body::from(response.body)) {
        Ok(http_response) => http_response,
        Err(err) => {
            error!(error = %err, "failed to encode response");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
