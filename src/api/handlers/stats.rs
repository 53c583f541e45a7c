use axum::{Json, extract::State};

use crate::{
    AppState,
    api::types::MessageResponse,
    error::{AppError, Result},
    infrastructure::db::repositories::{PetRepository, UserRepository},
    services::hints::{self, Stamp},
};

pub async fn pet_count(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    let count = PetRepository::count_pets(state.db.get_connection()).await?;

    Ok(Json(MessageResponse::new(hints::pet_count(
        count,
        &Stamp::now(),
    ))))
}

pub async fn user_count(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    let count = UserRepository::count_users(state.db.get_connection()).await?;

    Ok(Json(MessageResponse::new(hints::user_count(
        count,
        &Stamp::now(),
    ))))
}

pub async fn user_ages(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    let extremes = UserRepository::find_age_extremes(state.db.get_connection())
        .await?
        .ok_or_else(|| AppError::NotFound(hints::NO_USERS.into()))?;

    let oldest: Vec<&str> = extremes.oldest.iter().map(|u| u.username.as_str()).collect();
    let youngest: Vec<&str> = extremes
        .youngest
        .iter()
        .map(|u| u.username.as_str())
        .collect();

    Ok(Json(MessageResponse::new(hints::age_extremes(
        &oldest,
        extremes.max_age,
        &youngest,
        extremes.min_age,
    ))))
}
