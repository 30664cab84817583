// API payload types module

use serde::{Deserialize, Serialize};

/// Body of the `/api/get-token` response
///
/// `message` tells the user how to obtain a JWT token; `url` is the address
/// of the page hosting the provider widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenInstructions {
    pub message: String,
    pub url: String,
}
