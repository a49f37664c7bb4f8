//! CORS preflight responder.
//!
//! Both execution modes answer OPTIONS requests from [`options_response`],
//! so preflight behavior is identical across modes by construction. The
//! header names and the allowed-headers literal below are part of the
//! observable contract for clients relying on preflight. Non-preflight
//! responses are decorated with the allow-any-origin header through
//! [`with_allow_origin`] before leaving either adapter; without it a
//! browser discards the response it just preflighted.

use http::StatusCode;
use tracing::debug;

use crate::response::Response;
use crate::routing::RouteTable;

// =============================================================================
// Header Constants
// =============================================================================

/// The `Access-Control-Allow-Origin` header name.
pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// The `Access-Control-Allow-Methods` header name.
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";

/// The `Access-Control-Allow-Headers` header name.
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";

/// Every origin is allowed.
pub const ANY_ORIGIN: &str = "*";

/// The fixed allow-list of request headers.
pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

// =============================================================================
// Preflight Response
// =============================================================================

/// Build the response for an OPTIONS request.
///
/// Always status 200, regardless of route table contents. The allowed
/// methods are every method ever registered plus OPTIONS, sorted and
/// de-duplicated, joined with ", ".
pub fn options_response(table: &RouteTable) -> Response {
    let methods = table.allowed_methods().join(", ");
    debug!(allow_methods = %methods, "answering CORS preflight");

    Response::new(StatusCode::OK)
        .with_header(ALLOW_ORIGIN, ANY_ORIGIN)
        .with_header(ALLOW_METHODS, methods)
        .with_header(ALLOW_HEADERS, ALLOWED_HEADERS)
}

// =============================================================================
// Response Decoration
// =============================================================================

/// Attach `Access-Control-Allow-Origin: *` to a non-preflight response.
///
/// A value already set by the handler is left in place.
pub fn with_allow_origin(mut response: Response) -> Response {
    response
        .headers
        .entry(ALLOW_ORIGIN.to_string())
        .or_insert_with(|| ANY_ORIGIN.to_string());
    response
}

// =============================================================================
// Tests
// =============================================================================
