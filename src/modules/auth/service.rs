use axum_extra::extract::cookie::Cookie;
use chrono::{DateTime, Utc};

use bluebot_auth::{create_token, issue_session_cookie};
use bluebot_core::AppError;

use super::model::{LOGIN_FAILURE_MESSAGE, LoginQuery};
use crate::state::AppState;

/// What a successful login hands back to the client.
#[derive(Debug)]
pub struct LoginGrant {
    pub cookie: Cookie<'static>,
    pub token: String,
}

pub struct AuthService;

impl AuthService {
    /// Checks the credentials and, on a match, issues both the session
    /// cookie and a bearer token from the same instant `now`.
    pub fn login(
        state: &AppState,
        query: &LoginQuery,
        now: DateTime<Utc>,
    ) -> Result<LoginGrant, AppError> {
        if !state.credentials.matches(&query.username, &query.password) {
            return Err(AppError::unauthorized(LOGIN_FAILURE_MESSAGE).plain_text());
        }

        let cookie = issue_session_cookie(now, &state.session_config)?;
        let token = create_token(now, &state.jwt_config)?;

        Ok(LoginGrant { cookie, token })
    }
}
