use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::{Method, Request, Response, StatusCode};
use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;

use token_helper::api::{TokenInstructions, TOKEN_MESSAGE};
use token_helper::config::{AppState, Config};
use token_helper::handler::handle_request;

fn setup_assets() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("index.html"),
        "<html><body>Sign in with the provider widget</body></html>",
    )
    .unwrap();
    fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();
    dir
}

fn test_state(assets_dir: &str) -> Arc<AppState> {
    let mut cfg = Config::load_from("does-not-exist").expect("defaults should load");
    cfg.assets.dir = assets_dir.to_string();
    cfg.logging.access_log = false;
    Arc::new(AppState::new(cfg))
}

fn peer() -> SocketAddr {
    "127.0.0.1:54321".parse().unwrap()
}

fn request(method: Method, path: &str) -> Request<()> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(())
        .unwrap()
}

async fn body_bytes(resp: Response<Full<Bytes>>) -> Bytes {
    resp.into_body().collect().await.unwrap().to_bytes()
}

/// The root path falls back to the index file and serves it as HTML.
#[tokio::test]
async fn test_root_serves_index_page() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::GET, "/"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );
    let body = body_bytes(resp).await;
    assert!(std::str::from_utf8(&body)
        .unwrap()
        .contains("provider widget"));
}

/// HEAD responses carry the real Content-Length but no body.
#[tokio::test]
async fn test_head_root_has_length_but_no_body() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::HEAD, "/"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let length: usize = resp
        .headers()
        .get("content-length")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(length > 0);
    assert!(body_bytes(resp).await.is_empty());
}

/// Non-HTML assets get their MIME type from the file extension.
#[tokio::test]
async fn test_css_content_type() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::GET, "/style.css"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("content-type").unwrap(), "text/css");
}

/// The token endpoint returns the fixed instruction payload with the
/// local page URL.
#[tokio::test]
async fn test_get_token_endpoint() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::GET, "/api/get-token"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );

    let body = body_bytes(resp).await;
    let payload: TokenInstructions = serde_json::from_slice(&body).unwrap();
    assert_eq!(payload.message, TOKEN_MESSAGE);
    assert_eq!(payload.url, "http://localhost:3000");
}

#[tokio::test]
async fn test_missing_asset_is_404() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::GET, "/missing.png"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

/// Write methods are rejected with an Allow header listing what is served.
#[tokio::test]
async fn test_post_is_method_not_allowed() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::POST, "/"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        resp.headers().get("allow").unwrap(),
        "GET, HEAD, OPTIONS"
    );
}

#[tokio::test]
async fn test_options_is_no_content() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::OPTIONS, "/"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

/// A declared body larger than the configured limit is rejected before
/// any routing happens.
#[tokio::test]
async fn test_oversized_content_length_is_413() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("content-length", "20000000")
        .body(())
        .unwrap();
    let resp = handle_request(req, peer(), state).await.unwrap();

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

/// A matching If-None-Match revalidation gets 304 with an empty body.
#[tokio::test]
async fn test_if_none_match_revalidation() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let first = handle_request(request(Method::GET, "/"), peer(), Arc::clone(&state))
        .await
        .unwrap();
    let etag = first
        .headers()
        .get("etag")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("if-none-match", &etag)
        .body(())
        .unwrap();
    let resp = handle_request(req, peer(), state).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(resp.headers().get("etag").unwrap().to_str().unwrap(), etag);
    assert!(body_bytes(resp).await.is_empty());
}

/// Traversal attempts never escape the assets directory.
#[tokio::test]
async fn test_traversal_is_404() {
    let dir = setup_assets();
    let outside = dir.path().parent().unwrap().join("outside.txt");
    fs::write(&outside, "not served").ok();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::GET, "/../outside.txt"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    fs::remove_file(&outside).ok();
}

/// An unknown path under /api answers with JSON, not the static 404.
#[tokio::test]
async fn test_unknown_api_path_is_json_404() {
    let dir = setup_assets();
    let state = test_state(dir.path().to_str().unwrap());

    let resp = handle_request(request(Method::GET, "/api/unknown"), peer(), state)
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body = body_bytes(resp).await;
    let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(parsed["error"], "Not Found");
}
