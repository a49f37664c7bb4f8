//! Routing core: the route table, the path matcher, and the dispatcher.
//!
//! # Data Flow
//!
//! ```text
//! Incoming request (method, path)
//!     → dispatcher.rs (linear scan, registration order)
//!     → matcher.rs (segment-by-segment pattern match)
//!     → Return: RouteMatch { route, path_params } or None
//!
//! Registration (before serve):
//!     RouteTable::mount(method, pattern, handler)
//!     → append in order, track methods for CORS
//!     → frozen behind an Arc when serving starts
//! ```
//!
//! # Design Decisions
//!
//! - First match wins; no specificity ranking
//! - Matching is a deterministic single pass, no regex or backtracking
//! - The table is immutable once a server starts serving

pub mod dispatcher;
pub mod matcher;
pub mod table;

pub use dispatcher::{dispatch, RouteMatch};
pub use matcher::{extract_params, path_matches};
pub use table::{Handler, Route, RouteTable};
