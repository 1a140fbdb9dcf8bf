//! Token codec: `ClaimSet` <-> signed HS256 JWT.
//!
//! Tokens are self-contained and stateless. They stop verifying after
//! [`TOKEN_TTL_SECS`] or as soon as the signing secret changes.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::claims::ClaimSet;
use super::error::AuthError;
use crate::state::security_config::SecurityConfig;

/// Seven days.
pub const TOKEN_TTL_SECS: i64 = 7 * 24 * 60 * 60;

/// Wire form of the claims.
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    sub: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    couple_id: Option<String>,
    iat: i64,
    exp: i64,
}

/// Sign `claims` as of `now`; the token expires `now + 7 days`.
///
/// `now` is explicit so already-expired tokens can be minted in tests.
pub fn issue_token(
    claims: &ClaimSet,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AuthError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AuthError::TokenIssue)?
        .as_secs() as i64;

    let wire = TokenClaims {
        sub: claims.subject_id.clone(),
        email: claims.email.clone(),
        couple_id: claims.group_id.clone(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    encode(
        &Header::new(security.algorithm),
        &wire,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|_| AuthError::TokenIssue)
}

/// Verify signature and expiry with no clock leeway.
///
/// Bad signature, bad structure and expiry all yield `InvalidToken`.
pub fn decode_token(token: &str, security: &SecurityConfig) -> Result<ClaimSet, AuthError> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map_err(|_| AuthError::InvalidToken)?;

    Ok(ClaimSet {
        subject_id: data.claims.sub,
        email: data.claims.email,
        group_id: data.claims.couple_id,
    })
}
