use crate::state::AppState;
use axum::{Router, routing::get};

use super::controller::alive;

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/alive", get(alive))
}
