//! Canonical request representation shared by both execution modes.
//!
//! The mode adapters (local Axum listener, serverless gateway) translate
//! their native invocation shapes into [`Request`] before a handler runs, so
//! handler code never knows which transport delivered the request.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use thiserror::Error;

// =============================================================================
// HTTP Method
// =============================================================================

/// HTTP methods supported for route registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
}

impl Method {
    /// The canonical upper-case name of the method.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Patch => "PATCH",
            Method::Options => "OPTIONS",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized method name.
#[derive(Debug, Clone, Error)]
#[error("unknown HTTP method: {0}")]
pub struct UnknownMethod(pub String);

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Parse a method name case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PUT" => Ok(Method::Put),
            "DELETE" => Ok(Method::Delete),
            "PATCH" => Ok(Method::Patch),
            "OPTIONS" => Ok(Method::Options),
            _ => Err(UnknownMethod(s.to_string())),
        }
    }
}

// =============================================================================
// Canonical Request
// =============================================================================

/// The router's internal, mode-independent view of an HTTP request.
///
/// Constructed fresh per incoming request by the active mode adapter and
/// consumed once by the matched handler; never retained.
///
/// Header names are stored lower-cased; query parameters keep the first value
/// seen for a repeated key.
#[derive(Debug, Clone)]
pub struct Request {
    /// Method of the matched route.
    pub method: Method,

    /// Concrete request path (not the route pattern).
    pub path: String,

    /// Raw request body. Unreadable bodies degrade to empty.
    pub body: Bytes,

    /// Query parameters collapsed into a single-valued map.
    pub query_params: HashMap<String, String>,

    /// Request headers collapsed into a single-valued map, names lower-cased.
    pub headers: HashMap<String, String>,

    /// Parameter bindings extracted from the route pattern.
    pub path_params: HashMap<String, String>,
}

impl Request {
    /// Create an empty request for the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: Bytes::new(),
            query_params: HashMap::new(),
            headers: HashMap::new(),
            path_params: HashMap::new(),
        }
    }

    /// Look up a path parameter extracted from the route pattern.
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_params.get(name).map(String::as_str)
    }

    /// Look up a query parameter.
    pub fn query(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }

    /// Look up a header, case-insensitively on the name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The body interpreted as UTF-8, with invalid sequences replaced.
    pub fn body_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

// =============================================================================
// Tests
// =============================================================================
