//! Dualserve demo binary.
//!
//! Mounts a few example endpoints and serves them in whichever execution
//! mode the environment (or the `--mode` flag) selects.

use std::process::ExitCode;

use clap::Parser;
use http::StatusCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dualserve::{Config, HandlerError, Method, Mode, Response, Server};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    init_logging(config.verbose);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let mode = config.resolve_mode();
    let mut server = Server::new(mode);

    server.mount_endpoint(Method::Get, "/hello", |_request| {
        Ok(Response::ok("Hello, World!"))
    });

    server.mount_endpoint(Method::Get, "/users/{id}", |request| {
        let id = request.path_param("id").unwrap_or("");
        Response::json(StatusCode::OK, &serde_json::json!({ "user_id": id }))
            .map_err(HandlerError::from_error)
    });

    server.mount_endpoint(Method::Get, "/items", |request| {
        let page = request.query("page").unwrap_or("1");
        Response::json(StatusCode::OK, &serde_json::json!({ "items": [], "page": page }))
            .map_err(HandlerError::from_error)
    });

    server.mount_endpoint(Method::Post, "/items", |request| {
        Response::json(
            StatusCode::CREATED,
            &serde_json::json!({ "received": request.body_str() }),
        )
        .map_err(HandlerError::from_error)
    });

    if mode == Mode::Local {
        let addr = config.bind_address();
        info!("");
        info!("────────────────────────────────────────────────────────────────");
        info!("  Server listening on: http://{}", addr);
        info!("");
        info!("  Try these endpoints:");
        info!("    curl http://{}/hello", addr);
        info!("    curl http://{}/users/42", addr);
        info!("    curl http://{}/items?page=2", addr);
        info!("    curl -X OPTIONS -i http://{}/items", addr);
        info!("────────────────────────────────────────────────────────────────");
        info!("");
    }

    if let Err(e) = server.serve(&config).await {
        error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "dualserve=debug,tower_http=debug"
    } else {
        "dualserve=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
