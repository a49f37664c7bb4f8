//! Canonical response representation shared by both execution modes.
//!
//! Handlers produce a [`Response`]; the active mode adapter translates it
//! back into the caller's native shape (an HTTP response on the local
//! transport, a gateway response object in serverless mode).

use std::collections::HashMap;

use http::StatusCode;
use serde::Serialize;

// =============================================================================
// Literal Bodies
// =============================================================================

/// Body returned when no route matches (part of the observable contract).
pub const NOT_FOUND_BODY: &str = "Not Found";

/// Body returned when a handler fails (the underlying error is only logged).
pub const INTERNAL_ERROR_BODY: &str = "Internal Server Error";

// =============================================================================
// Canonical Response
// =============================================================================

/// The router's internal, mode-independent view of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// HTTP status code.
    pub status: StatusCode,

    /// Response body, written back verbatim.
    pub body: String,

    /// Response headers. Propagated to the caller in both execution modes.
    pub headers: HashMap<String, String>,
}

impl Response {
    /// Create an empty response with the given status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            body: String::new(),
            headers: HashMap::new(),
        }
    }

    /// Create a 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK).with_body(body)
    }

    /// Create a response with a JSON body and matching content type.
    pub fn json(status: StatusCode, value: &impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(Self::new(status)
            .with_body(serde_json::to_string(value)?)
            .with_header("Content-Type", "application/json"))
    }

    /// The generic 404 response: status 404, literal body "Not Found".
    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND).with_body(NOT_FOUND_BODY)
    }

    /// The generic 500 response: status 500, literal body
    /// "Internal Server Error". Never carries error detail.
    pub fn internal_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR).with_body(INTERNAL_ERROR_BODY)
    }

    /// Set the response body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a response header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
