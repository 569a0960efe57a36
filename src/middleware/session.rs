use std::sync::Arc;

use axum::http::HeaderMap;

use bluebot_auth::{SessionPrincipal, verify_session_cookie};
use bluebot_config::SessionConfig;
use bluebot_core::AppError;

use super::gate::Gate;

/// Lets through requests echoing the session cookie handed out at login.
#[derive(Clone, Debug)]
pub struct SessionCookieGate {
    session: Arc<SessionConfig>,
}

impl SessionCookieGate {
    pub fn new(session: SessionConfig) -> Self {
        Self {
            session: Arc::new(session),
        }
    }
}

impl Gate for SessionCookieGate {
    type Principal = SessionPrincipal;
    const NAME: &'static str = "session_cookie";

    fn check(&self, headers: &HeaderMap) -> Result<SessionPrincipal, AppError> {
        verify_session_cookie(headers, &self.session)
    }
}
