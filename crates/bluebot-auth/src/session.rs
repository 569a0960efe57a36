//! The opaque `sessionID` cookie.
//!
//! There is no server-side session store. Login hands out the configured
//! value and the cookie gate accepts any request echoing that same value,
//! so the cookie is as good as the credentials that earned it.

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{DateTime, Duration, Utc};
use time::OffsetDateTime;

use bluebot_config::SessionConfig;
use bluebot_core::AppError;

/// Marker principal for a request carrying the expected session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPrincipal;

/// Builds the session cookie for a login performed at `now`.
///
/// `Expires` is `now + config.cookie_lifetime`, truncated to whole seconds.
pub fn issue_session_cookie(
    now: DateTime<Utc>,
    config: &SessionConfig,
) -> Result<Cookie<'static>, AppError> {
    let expires_at = now + Duration::seconds(config.cookie_lifetime);
    let expires = OffsetDateTime::from_unix_timestamp(expires_at.timestamp())
        .map_err(|e| AppError::internal_error(format!("Invalid cookie expiry: {}", e)))?;

    Ok(
        Cookie::build((config.cookie_name.clone(), config.cookie_value.clone()))
            .path("/")
            .expires(expires)
            .build(),
    )
}

/// Checks the request cookies for the configured session value.
///
/// Both rejections are 401 with a plain-text reason that tells an absent
/// cookie apart from a wrong one.
pub fn verify_session_cookie(
    headers: &HeaderMap,
    config: &SessionConfig,
) -> Result<SessionPrincipal, AppError> {
    let jar = CookieJar::from_headers(headers);

    let cookie = jar
        .get(&config.cookie_name)
        .ok_or_else(|| AppError::unauthorized("Needed cookie not present").plain_text())?;

    if cookie.value() != config.cookie_value {
        return Err(AppError::unauthorized("You don't have the right cookie").plain_text());
    }

    Ok(SessionPrincipal)
}
