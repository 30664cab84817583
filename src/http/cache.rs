//! HTTP cache control module
//!
//! Provides `ETag` generation and conditional request handling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate an `ETag` for the given content using fast hashing
///
/// # Returns
/// Quoted `ETag` string, e.g., `"abc123def"`
pub fn entity_tag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check if the client's `If-None-Match` header matches the server's `ETag`
///
/// Supports a single `ETag`, a comma-separated list, and the `*` wildcard.
/// Returns true if matched (should return 304).
pub fn if_none_match_matches(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_tag_shape() {
        let etag = entity_tag(b"hello world");
        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_entity_tag_consistency() {
        assert_eq!(entity_tag(b"same content"), entity_tag(b"same content"));
        assert_ne!(entity_tag(b"content a"), entity_tag(b"content b"));
    }

    #[test]
    fn test_if_none_match() {
        let etag = "\"abc123\"";
        assert!(if_none_match_matches(Some("\"abc123\""), etag));
        assert!(if_none_match_matches(Some("\"xyz\", \"abc123\""), etag));
        assert!(if_none_match_matches(Some("*"), etag));
        assert!(!if_none_match_matches(Some("\"different\""), etag));
        assert!(!if_none_match_matches(None, etag));
    }
}
