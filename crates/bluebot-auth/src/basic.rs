//! HTTP Basic Auth against the single configured credential pair.

use axum::http::{HeaderMap, HeaderValue, header::WWW_AUTHENTICATE};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Basic};

use bluebot_config::CredentialsConfig;
use bluebot_core::AppError;

const CHALLENGE: &str = "Basic realm=\"Restricted\"";

/// The user a Basic Auth check let through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicPrincipal {
    pub username: String,
}

/// Checks the `Authorization: Basic` header against `config`.
///
/// A missing or non-Basic header is answered with a 401 challenge so
/// browsers prompt for credentials; a decoded pair that does not match is
/// a 403.
pub fn verify_basic_auth(
    headers: &HeaderMap,
    config: &CredentialsConfig,
) -> Result<BasicPrincipal, AppError> {
    let Some(Authorization(basic)) = headers.typed_get::<Authorization<Basic>>() else {
        return Err(AppError::unauthorized("Unauthorized")
            .with_header(WWW_AUTHENTICATE, HeaderValue::from_static(CHALLENGE)));
    };

    if !config.matches(basic.username(), basic.password()) {
        return Err(AppError::forbidden("Forbidden"));
    }

    Ok(BasicPrincipal {
        username: basic.username().to_string(),
    })
}
