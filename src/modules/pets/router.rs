use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{create_cat, create_dog, create_hamster, search_cats};

pub fn init_pets_router() -> Router<AppState> {
    Router::new()
        .route("/cats", post(create_cat))
        .route("/cats/{format}", get(search_cats))
        .route("/dogs", post(create_dog))
        .route("/hamster", post(create_hamster))
}
