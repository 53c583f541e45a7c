use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::AppState;

pub mod extract;
pub mod handlers;
pub mod types;

use handlers::{auth, pets, stats, users};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/users/{id}", get(users::get_user).patch(users::update_user))
        .route("/users/{id}/pets", get(pets::list_owner_pets))
        .route("/pets", get(pets::list_all_pets))
        .route("/pets/new", post(pets::create_pet))
        .route("/pets/{id}", delete(pets::delete_pet))
        .route("/stats/pets/count", get(stats::pet_count))
        .route("/stats/users/ages", get(stats::user_ages))
        .route("/stats/users/count", get(stats::user_count))
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
