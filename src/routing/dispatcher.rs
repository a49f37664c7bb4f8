//! Dispatching an incoming method and path to a registered route.

use std::collections::HashMap;

use tracing::debug;

use super::matcher::{extract_params, path_matches};
use super::table::{Route, RouteTable};

/// A successful dispatch: the matched route plus its parameter bindings.
#[derive(Debug)]
pub struct RouteMatch<'a> {
    /// The first registered route whose method and pattern matched.
    pub route: &'a Route,

    /// Parameter bindings extracted from the request path.
    pub path_params: HashMap<String, String>,
}

/// Scan the route table in registration order and return the first match.
///
/// Method comparison is case-insensitive; path comparison delegates to the
/// matcher. Returns `None` when no route matches, in which case the caller
/// must respond 404 with the literal body "Not Found".
///
/// OPTIONS requests are expected to be intercepted by the mode adapters
/// before dispatch; they never reach the table.
pub fn dispatch<'a>(table: &'a RouteTable, method: &str, path: &str) -> Option<RouteMatch<'a>> {
    let route = table.routes().iter().find(|route| {
        route.method().as_str().eq_ignore_ascii_case(method) && path_matches(path, route.pattern())
    })?;

    debug!(%method, %path, pattern = %route.pattern(), "dispatched");

    Some(RouteMatch {
        route,
        path_params: extract_params(path, route.pattern()),
    })
}

// =============================================================================
// Tests
// =============================================================================
