// API module entry
// Stub token endpoint under /api

mod handlers;
mod response;
mod types;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Response};

use crate::config::AppState;
use crate::handler::RequestContext;
use crate::logger;

// Re-export public types
pub use handlers::TOKEN_MESSAGE;
pub use types::TokenInstructions;

/// API route handler
///
/// Dispatches to handler functions based on request path and method.
pub fn route(
    method: &Method,
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    match (method, ctx.path) {
        (&Method::GET | &Method::HEAD, "/api/get-token") => {
            handlers::handle_get_token(ctx, state)
        }
        // Unknown route
        _ => {
            logger::log_api_request(method.as_str(), ctx.path, 404);
            response::not_found()
        }
    }
}
