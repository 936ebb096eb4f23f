//! # Authentication Module
//!
//! The booking service issues and verifies user tokens; this server only
//! forwards them. Requests that act on behalf of a user must carry an
//! `Authorization: Bearer <token>` header, which is passed through unchanged.

use axum::http::{HeaderMap, header::AUTHORIZATION};
use booking_core::errors::BookingError;

/// Extracts the bearer token from the request headers
///
/// Returns `None` if the header is missing, not valid UTF-8, uses another
/// scheme, or carries an empty token.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

/// Like [`bearer_token`], but fails with an authentication error
pub fn require_bearer_token(headers: &HeaderMap) -> Result<String, BookingError> {
    bearer_token(headers)
        .ok_or_else(|| BookingError::Authentication("Bearer token required".to_string()))
}
