//! Serverless execution mode: dispatching gateway proxy events.
//!
//! The gateway delivers requests already parsed (method, path, headers,
//! query parameters), so building the canonical request needs no body
//! reading. [`handle_event`] is a synchronous function over the frozen route
//! table and is directly testable; [`serve`] wraps it in the invocation
//! runtime loop, which supplies the event framing.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use lambda_runtime::{service_fn, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::cors;
use crate::error::ServeError;
use crate::request::{Method, Request};
use crate::response::Response;
use crate::routing::{dispatch, RouteMatch, RouteTable};

// =============================================================================
// Event and Response Shapes
// =============================================================================

/// An incoming gateway proxy event.
///
/// Field names mirror the gateway's JSON shape. Absent fields default, and
/// the map fields also tolerate explicit nulls: the gateway serializes a
/// request without headers or query parameters as `"headers": null` rather
/// than omitting the field.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayEvent {
    /// HTTP method name, any case.
    pub http_method: String,

    /// Concrete request path.
    pub path: String,

    /// Request body, if any.
    pub body: Option<String>,

    /// Request headers as delivered by the gateway.
    #[serde(deserialize_with = "null_as_default")]
    pub headers: HashMap<String, String>,

    /// Query parameters, already parsed by the gateway.
    #[serde(deserialize_with = "null_as_default")]
    pub query_string_parameters: HashMap<String, String>,
}

/// Deserialize a field the gateway may serialize as an explicit null.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The response shape expected by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    /// HTTP status code.
    pub status_code: u16,

    /// Response headers.
    pub headers: HashMap<String, String>,

    /// Response body.
    pub body: String,
}

impl From<Response> for GatewayResponse {
    fn from(response: Response) -> Self {
        Self {
            status_code: response.status.as_u16(),
            headers: response.headers,
            body: response.body,
        }
    }
}

// =============================================================================
// Event Handling
// =============================================================================

/// Handle one gateway event against the route table.
///
/// OPTIONS is intercepted before dispatch and answered by the CORS
/// responder. An unmatched route renders 404 / "Not Found"; a failed handler
/// renders 500 / "Internal Server Error" with the cause logged only. Path
/// parameters are extracted by the same matcher the local mode uses, so
/// handlers see identical bindings in both modes. Every response carries the
/// allow-any-origin header so browser callers accept it after a preflight.
pub fn handle_event(table: &RouteTable, event: GatewayEvent) -> GatewayResponse {
    info!(method = %event.http_method, path = %event.path, "received gateway event");

    if event.http_method.eq_ignore_ascii_case(Method::Options.as_str()) {
        return cors::options_response(table).into();
    }

    let Some(RouteMatch { route, path_params }) =
        dispatch(table, &event.http_method, &event.path)
    else {
        debug!(method = %event.http_method, path = %event.path, "no route matched");
        return cors::with_allow_origin(Response::not_found()).into();
    };

    let headers = event
        .headers
        .into_iter()
        .map(|(name, value)| (name.to_ascii_lowercase(), value))
        .collect();

    let canonical = Request {
        method: route.method(),
        path: event.path,
        body: event.body.map(Bytes::from).unwrap_or_default(),
        query_params: event.query_string_parameters,
        headers,
        path_params,
    };

    match route.invoke(canonical) {
        Ok(response) => cors::with_allow_origin(response).into(),
        Err(err) => {
            // The cause is logged only; the caller sees the generic body.
            error!(pattern = %route.pattern(), error = %err, "handler failed");
            cors::with_allow_origin(Response::internal_error()).into()
        }
    }
}

/// Run the invocation loop, handing each event to [`handle_event`].
///
/// Blocks until the runtime terminates the process.
pub async fn serve(table: Arc<RouteTable>) -> Result<(), ServeError> {
    let handler = service_fn(move |event: LambdaEvent<GatewayEvent>| {
        let table = Arc::clone(&table);
        async move {
            Ok::<GatewayResponse, lambda_runtime::Error>(handle_event(&table, event.payload))
        }
    });

    lambda_runtime::run(handler)
        .await
        .map_err(|err| ServeError::Gateway(err.to_string()))
}

// =============================================================================
// Tests
// =============================================================================
