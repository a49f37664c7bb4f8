//! Configuration for the dualserve binary.
//!
//! Supports command-line arguments via clap, environment variables, and
//! sensible defaults.
//!
//! # Environment Variables
//!
//! - `PORT` - Port for the local listener (default: 8080)
//! - `DUALSERVE_HOST` - Bind address for the local listener (default: 0.0.0.0)
//! - `DUALSERVE_MODE` - Execution mode override (`local` or `serverless`)
//! - `AWS_LAMBDA_FUNCTION_NAME` - When set and non-empty, mode detection
//!   selects serverless execution

use clap::{Parser, ValueEnum};

// =============================================================================
// Default Values
// =============================================================================

/// Default bind address for the local listener.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the local listener.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable whose non-empty presence marks a serverless
/// execution context.
pub const SERVERLESS_MARKER_ENV: &str = "AWS_LAMBDA_FUNCTION_NAME";

// =============================================================================
// Execution Mode
// =============================================================================

/// The two supported execution contexts.
///
/// The mode is chosen once, before any request is handled, and stays fixed
/// for the process lifetime. Construct a
/// [`Server`](crate::server::Server) with an explicit mode, or use
/// [`Mode::detect`] to read the environment marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Directly bound network listener.
    Local,

    /// Invoked per-event by a serverless gateway runtime.
    Serverless,
}

impl Mode {
    /// Detect the execution mode from the environment.
    ///
    /// Returns [`Mode::Serverless`] when [`SERVERLESS_MARKER_ENV`] is set to
    /// a non-empty value, [`Mode::Local`] otherwise.
    pub fn detect() -> Self {
        match std::env::var(SERVERLESS_MARKER_ENV) {
            Ok(value) if !value.is_empty() => Mode::Serverless,
            _ => Mode::Local,
        }
    }
}

// =============================================================================
// CLI Arguments
// =============================================================================

/// Dualserve - a dual-mode HTTP request router.
///
/// Serves one route table either from a locally bound HTTP listener or from
/// serverless gateway events.
#[derive(Parser, Debug, Clone)]
#[command(name = "dualserve")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Host address to bind the local listener to.
    #[arg(long, default_value = DEFAULT_HOST, env = "DUALSERVE_HOST")]
    pub host: String,

    /// Port for the local listener.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "PORT")]
    pub port: u16,

    /// Execution mode override.
    ///
    /// When omitted, the mode is detected from the environment marker.
    #[arg(long, value_enum, env = "DUALSERVE_MODE")]
    pub mode: Option<Mode>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Disable request tracing middleware on the local transport.
    #[arg(long, default_value_t = false)]
    pub no_tracing: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host must not be empty. Set --host or DUALSERVE_HOST".to_string());
        }
        if self.port == 0 {
            return Err("port must be greater than 0. Set --port or PORT".to_string());
        }
        Ok(())
    }

    /// The execution mode: the explicit override if given, otherwise
    /// detected from the environment.
    pub fn resolve_mode(&self) -> Mode {
        self.mode.unwrap_or_else(Mode::detect)
    }

    /// Get the local bind address as "host:port".
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            mode: None,
            verbose: false,
            no_tracing: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
