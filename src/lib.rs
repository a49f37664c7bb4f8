//! # Dualserve
//!
//! A dual-mode HTTP request router: one route table, dispatched either from
//! a locally bound HTTP listener or from serverless gateway events.
//!
//! Handlers are written once against a canonical request/response pair and
//! never know which transport delivered the request. The execution mode is
//! chosen once at startup and fixed for the process lifetime.
//!
//! ## Features
//!
//! - **One route table, two transports**: a Tokio/Axum listener for local
//!   execution, a gateway event loop for serverless execution
//! - **Pattern matching**: literal segments plus `{name}` / `:name`
//!   parameter placeholders, first-registered route wins
//! - **Uniform CORS preflight**: OPTIONS is answered from the registered
//!   method set, identically in both modes
//! - **Uniform error shapes**: 404 / "Not Found" for unmatched routes,
//!   500 / "Internal Server Error" for handler failures (causes logged,
//!   never leaked)
//!
//! ## Architecture
//!
//! - [`routing`] - Route table, path matcher, and dispatcher
//! - [`cors`] - CORS preflight responder
//! - [`server`] - The two mode adapters and the `Server` facade
//! - [`request`] / [`response`] - Canonical request/response types
//! - [`config`] - CLI and configuration types, execution-mode detection
//! - [`error`] - Handler and serve-time error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use dualserve::{Config, Method, Response, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut server = Server::from_env();
//!
//!     server.mount_endpoint(Method::Get, "/hello", |_request| {
//!         Ok(Response::ok("Hello, World!"))
//!     });
//!
//!     server.mount_endpoint(Method::Get, "/users/{id}", |request| {
//!         let id = request.path_param("id").unwrap_or("").to_string();
//!         Ok(Response::ok(id))
//!     });
//!
//!     server.serve(&Config::default()).await.expect("server failed");
//! }
//! ```

pub mod config;
pub mod cors;
pub mod error;
pub mod request;
pub mod response;
pub mod routing;
pub mod server;

// Re-export commonly used types
pub use config::{Config, Mode, DEFAULT_HOST, DEFAULT_PORT, SERVERLESS_MARKER_ENV};
pub use error::{HandlerError, ServeError};
pub use request::{Method, Request, UnknownMethod};
pub use response::{Response, INTERNAL_ERROR_BODY, NOT_FOUND_BODY};
pub use routing::{dispatch, extract_params, path_matches, Handler, Route, RouteMatch, RouteTable};
pub use server::{build_router, handle_event, GatewayEvent, GatewayResponse, Server};
