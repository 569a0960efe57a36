use axum::{
    Json,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::info;

use bluebot_core::AppError;

use super::model::{CatSearchQuery, Pet, PetKind, SearchFormat};
use crate::extract::{FirstValueQuery, JsonBody};

/// `GET /cats/{format}`: echo the queried cat as a sentence or as JSON.
pub async fn search_cats(
    Path(format): Path<String>,
    FirstValueQuery(query): FirstValueQuery<CatSearchQuery>,
) -> Result<Response, AppError> {
    let response = match format.parse::<SearchFormat>()? {
        SearchFormat::String => format!(
            "Your cat name is {} and type is {}",
            query.name, query.cat_type
        )
        .into_response(),
        SearchFormat::Json => Json(query).into_response(),
    };

    Ok(response)
}

fn accept_pet(kind: PetKind, pet: Pet) -> (StatusCode, &'static str) {
    info!(kind = %kind, name = %pet.name, pet_type = %pet.pet_type, "Received pet");
    (StatusCode::ACCEPTED, kind.created_message())
}

pub async fn create_cat(JsonBody(pet): JsonBody<Pet>) -> impl IntoResponse {
    accept_pet(PetKind::Cat, pet)
}

pub async fn create_dog(JsonBody(pet): JsonBody<Pet>) -> impl IntoResponse {
    accept_pet(PetKind::Dog, pet)
}

pub async fn create_hamster(JsonBody(pet): JsonBody<Pet>) -> impl IntoResponse {
    accept_pet(PetKind::Hamster, pet)
}
