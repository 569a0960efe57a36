//! JWT utilities for the bearer-token gate.
//!
//! Tokens are signed with HS512 over a single shared secret and carry
//! [`TokenClaims`]. There is no refresh or revocation: a token is valid
//! exactly as long as its signature verifies and `exp` has not passed.
//!
//! # Example
//!
//! ```ignore
//! use bluebot_auth::{bearer_token, create_token, verify_token};
//!
//! let token = create_token(chrono::Utc::now(), &jwt_config)?;
//! let claims = verify_token(bearer_token(&headers)?, &jwt_config)?;
//! ```

use axum::http::{HeaderMap, header};
use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use bluebot_config::JwtConfig;
use bluebot_core::AppError;

use crate::claims::TokenClaims;

const ALGORITHM: Algorithm = Algorithm::HS512;

/// Creates a token for the configured subject, issued at `now`.
///
/// `exp` is `now + config.token_expiry`, truncated to whole seconds.
///
/// # Errors
///
/// Returns an internal error if encoding fails.
pub fn create_token(now: DateTime<Utc>, config: &JwtConfig) -> Result<String, AppError> {
    let iat = now.timestamp() as usize;

    let claims = TokenClaims {
        name: config.subject_name.clone(),
        id: config.subject_id.clone(),
        exp: iat + config.token_expiry as usize,
        iat,
    };

    sign_claims(&claims, config)
}

/// Signs arbitrary claims with the configured secret.
pub fn sign_claims(claims: &TokenClaims, config: &JwtConfig) -> Result<String, AppError> {
    encode(
        &Header::new(ALGORITHM),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// No clock leeway is granted: a token whose `exp` lies in the past is
/// rejected. Tokens signed with any other algorithm are rejected too.
///
/// # Errors
///
/// Returns an unauthorized error if the token is malformed, the signature
/// does not verify, or the token has expired.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<TokenClaims, AppError> {
    let mut validation = Validation::new(ALGORITHM);
    validation.leeway = 0;

    decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))
}
