//! Authorization gate: `Authorization` header value -> caller identity.
//!
//! Every failure (no header, wrong scheme, empty token, forged, expired,
//! malformed) collapses into `AuthError::AuthenticationRequired` so callers
//! cannot tell them apart. Domain checks such as "has a couple" belong to
//! handlers.

use super::claims::ClaimSet;
use super::error::AuthError;
use super::jwt::decode_token;
use crate::state::security_config::SecurityConfig;

/// Pull the token out of a `Bearer <token>` header value. Exactly one space
/// separates scheme and token; the token itself holds no whitespace.
fn bearer_token(header_value: &str) -> Option<&str> {
    let token = header_value.strip_prefix("Bearer ")?;
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return None;
    }
    Some(token)
}

pub fn resolve(
    header_value: Option<&str>,
    security: &SecurityConfig,
) -> Result<ClaimSet, AuthError> {
    let token = header_value
        .and_then(bearer_token)
        .ok_or(AuthError::AuthenticationRequired)?;

    decode_token(token, security).map_err(|_| AuthError::AuthenticationRequired)
}
