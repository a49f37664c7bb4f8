//! Server layer: the two mode adapters and the facade tying them together.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                          Server                               │
//! │      mount_endpoint(method, path, handler) → serve()          │
//! │                                                               │
//! │  ┌──────────────────────┐      ┌───────────────────────────┐  │
//! │  │       local          │      │         gateway           │  │
//! │  │ Axum listener, one   │      │ serde event types + the   │  │
//! │  │ fallback service     │      │ invocation runtime loop   │  │
//! │  └──────────┬───────────┘      └─────────────┬─────────────┘  │
//! │             │      canonical Request/Response│                │
//! │             └──────────────┬─────────────────┘                │
//! │                            ▼                                  │
//! │              routing (dispatch + matcher) + cors              │
//! └───────────────────────────────────────────────────────────────┘
//! ```

pub mod gateway;
pub mod local;

use std::sync::Arc;

use tracing::info;

use crate::config::{Config, Mode};
use crate::error::{HandlerError, ServeError};
use crate::request::{Method, Request};
use crate::response::Response;
use crate::routing::RouteTable;

pub use gateway::{handle_event, GatewayEvent, GatewayResponse};
pub use local::build_router;

/// A dual-mode server: one route table, two transports.
///
/// The execution mode is an explicit constructor argument and fixed for the
/// process lifetime; use [`Mode::detect`] (or [`Server::from_env`]) to read
/// it from the environment marker. All endpoints must be mounted before
/// [`Server::serve`], which consumes the server and freezes the table.
#[derive(Debug)]
pub struct Server {
    mode: Mode,
    table: RouteTable,
}

impl Server {
    /// Create a server for the given execution mode.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            table: RouteTable::new(),
        }
    }

    /// Create a server with the mode detected from the environment.
    pub fn from_env() -> Self {
        Self::new(Mode::detect())
    }

    /// The execution mode this server was constructed with.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Register an endpoint with a handler.
    ///
    /// The pattern may use `{name}` or `:name` parameter segments.
    pub fn mount_endpoint(
        &mut self,
        method: Method,
        pattern: impl Into<String>,
        handler: impl Fn(Request) -> Result<Response, HandlerError> + Send + Sync + 'static,
    ) {
        self.table.mount(method, pattern, handler);
    }

    /// The routes registered so far.
    pub fn route_table(&self) -> &RouteTable {
        &self.table
    }

    /// Start serving in the configured mode; blocks until process
    /// termination.
    ///
    /// Consumes the server, so no endpoint can be mounted after serving
    /// starts. Local mode binds `config.bind_address()`; serverless mode
    /// hands the frozen table to the gateway invocation loop and ignores the
    /// listener settings.
    pub async fn serve(self, config: &Config) -> Result<(), ServeError> {
        let table = Arc::new(self.table);

        match self.mode {
            Mode::Serverless => {
                info!(routes = table.len(), "running in serverless mode");
                gateway::serve(table).await
            }
            Mode::Local => {
                info!(
                    routes = table.len(),
                    address = %config.bind_address(),
                    "running in local mode"
                );
                local::serve(table, config).await
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
