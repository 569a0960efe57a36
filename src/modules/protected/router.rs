use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::{admin_main, cookies_page, secret_page};

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/main", get(admin_main))
}

pub fn init_cookies_router() -> Router<AppState> {
    Router::new().route("/", get(cookies_page))
}

pub fn init_secret_router() -> Router<AppState> {
    Router::new().route("/", get(secret_page))
}
