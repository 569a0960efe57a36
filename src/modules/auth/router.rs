use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::login;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/login", get(login))
}
