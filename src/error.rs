use std::fmt;

use thiserror::Error;

/// Opaque failure returned by a user handler.
///
/// Surfaced to the caller as a generic 500 response; the message here is
/// logged server-side and never leaks into the response body.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Create a handler error from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Wrap any displayable error.
    pub fn from_error(err: impl fmt::Display) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<String> for HandlerError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for HandlerError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Errors that can occur while starting or running a server.
///
/// Per-request failures are not represented here: an unmatched route renders
/// a 404 and a failed handler renders a 500, both terminal for that single
/// request and independent of every other request.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Could not bind the local listener.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error from the local transport.
    #[error("server error: {0}")]
    Io(#[from] std::io::Error),

    /// The serverless invocation runtime terminated with an error.
    #[error("gateway runtime error: {0}")]
    Gateway(String),
}

// =============================================================================
// Tests
// =============================================================================
