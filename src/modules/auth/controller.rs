use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use tracing::{info, instrument};

use bluebot_core::AppError;

use super::model::{LOGIN_SUCCESS_MESSAGE, LoginQuery, LoginResponse};
use super::service::AuthService;
use crate::extract::FirstValueQuery;
use crate::state::AppState;

/// `GET /login`: trade the configured credentials for a session cookie and
/// a bearer token.
#[instrument(skip_all, fields(username = %query.username))]
pub async fn login(
    State(state): State<AppState>,
    FirstValueQuery(query): FirstValueQuery<LoginQuery>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let grant = AuthService::login(&state, &query, Utc::now())?;

    info!("User logged in");

    Ok((
        CookieJar::new().add(grant.cookie),
        Json(LoginResponse {
            message: LOGIN_SUCCESS_MESSAGE.to_string(),
            token: grant.token,
        }),
    ))
}
