use axum::Json;

use crate::{api::types::MessageResponse, error::AppError, services::hints};

pub mod auth;
pub mod pets;
pub mod stats;
pub mod users;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new(hints::ROOT_INFO))
}

pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
