use std::sync::Arc;

use axum::http::HeaderMap;

use bluebot_auth::{TokenClaims, bearer_token, verify_token};
use bluebot_config::JwtConfig;
use bluebot_core::AppError;

use super::gate::Gate;

/// Lets through requests carrying an unexpired token signed with our secret.
/// The decoded claims become the principal.
#[derive(Clone, Debug)]
pub struct BearerTokenGate {
    jwt_config: Arc<JwtConfig>,
}

impl BearerTokenGate {
    pub fn new(jwt_config: JwtConfig) -> Self {
        Self {
            jwt_config: Arc::new(jwt_config),
        }
    }
}

impl Gate for BearerTokenGate {
    type Principal = TokenClaims;
    const NAME: &'static str = "bearer_token";

    fn check(&self, headers: &HeaderMap) -> Result<TokenClaims, AppError> {
        let token = bearer_token(headers)?;
        verify_token(token, &self.jwt_config)
    }
}
