use std::sync::Arc;

use axum::http::HeaderMap;

use bluebot_auth::{BasicPrincipal, verify_basic_auth};
use bluebot_config::CredentialsConfig;
use bluebot_core::AppError;

use super::gate::Gate;

/// Lets through requests whose Basic credentials equal the configured pair.
#[derive(Clone, Debug)]
pub struct BasicAuthGate {
    credentials: Arc<CredentialsConfig>,
}

impl BasicAuthGate {
    pub fn new(credentials: CredentialsConfig) -> Self {
        Self {
            credentials: Arc::new(credentials),
        }
    }
}

impl Gate for BasicAuthGate {
    type Principal = BasicPrincipal;
    const NAME: &'static str = "basic_auth";

    fn check(&self, headers: &HeaderMap) -> Result<BasicPrincipal, AppError> {
        verify_basic_auth(headers, &self.credentials)
    }
}
