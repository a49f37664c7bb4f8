//! The route table: an ordered collection of registered routes.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::error::HandlerError;
use crate::request::{Method, Request};
use crate::response::Response;

/// A user-supplied request handler.
///
/// Handlers are synchronous computations over the canonical request; any
/// blocking I/O they perform is their own concern. The returned error is
/// logged and rendered as a generic 500.
pub type Handler = Arc<dyn Fn(Request) -> Result<Response, HandlerError> + Send + Sync>;

// =============================================================================
// Route
// =============================================================================

/// A registered (method, pattern, handler) triple.
///
/// Immutable once registered; the route owns its handler reference directly.
#[derive(Clone)]
pub struct Route {
    method: Method,
    pattern: String,
    handler: Handler,
}

impl Route {
    /// The HTTP method this route answers.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The registered path pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Invoke the handler with a canonical request.
    pub fn invoke(&self, request: Request) -> Result<Response, HandlerError> {
        (self.handler)(request)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Route Table
// =============================================================================

/// An ordered collection of routes, built incrementally before serving.
///
/// Registration order is dispatch order: on overlapping patterns the
/// first-registered route wins. Once a server starts serving, the table is
/// frozen behind an `Arc` and never mutated again.
#[derive(Debug, Default, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route. Appends in registration order.
    pub fn mount(
        &mut self,
        method: Method,
        pattern: impl Into<String>,
        handler: impl Fn(Request) -> Result<Response, HandlerError> + Send + Sync + 'static,
    ) {
        let pattern = pattern.into();
        info!(%method, %pattern, "mounting endpoint");
        self.routes.push(Route {
            method,
            pattern,
            handler: Arc::new(handler),
        });
    }

    /// All registered routes, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Every HTTP method ever registered, sorted lexicographically and
    /// de-duplicated, with OPTIONS always included.
    pub fn allowed_methods(&self) -> Vec<&'static str> {
        let mut methods: BTreeSet<&'static str> = BTreeSet::new();
        methods.insert(Method::Options.as_str());
        for route in &self.routes {
            methods.insert(route.method.as_str());
        }
        methods.into_iter().collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
