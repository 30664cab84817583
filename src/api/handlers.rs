// Token instruction handler module

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::json_response;
use super::types::TokenInstructions;
use crate::config::AppState;
use crate::handler::RequestContext;
use crate::logger;

/// Fixed instruction returned by `/api/get-token`
///
/// No token is issued here; the provider widget on the served page does the
/// actual authentication work.
pub const TOKEN_MESSAGE: &str =
    "Open the token helper page in your browser and sign in with the provider widget to obtain a JWT token.";

/// Handle `GET /api/get-token`
pub fn handle_get_token(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    let payload = TokenInstructions {
        message: TOKEN_MESSAGE.to_string(),
        url: state.config.public_base_url(),
    };

    logger::log_api_request("GET", ctx.path, 200);
    json_response(StatusCode::OK, &payload, ctx.is_head)
}
