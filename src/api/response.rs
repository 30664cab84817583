// API response helpers

use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

/// Serialize a payload into a JSON response
///
/// Falls back to a 500 with a fixed body if serialization fails.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    body: &T,
    is_head: bool,
) -> Response<Full<Bytes>> {
    match serde_json::to_vec_pretty(body) {
        Ok(json) => build_json(status, Bytes::from(json), is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response: {e}"));
            build_json(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(br#"{"error":"Internal server error"}"#),
                is_head,
            )
        }
    }
}

/// 404 Not Found response listing the endpoints this API serves
pub fn not_found() -> Response<Full<Bytes>> {
    build_json(
        StatusCode::NOT_FOUND,
        Bytes::from_static(br#"{"error":"Not Found","available_endpoints":["/api/get-token"]}"#),
        false,
    )
}

fn build_json(status: StatusCode, json: Bytes, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = json.len();
    let body = if is_head { Bytes::new() } else { json };

    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            logger::log_error(&format!("Failed to build JSON response: {e}"));
            Response::new(Full::new(Bytes::new()))
        })
}
