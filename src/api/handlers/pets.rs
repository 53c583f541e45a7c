use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    AppState,
    api::{
        extract::{JsonBody, PathParam, QueryParams},
        types::{
            NewPetParams, PetCreatedResponse, PetListResponse, PetResponse, PetWithOwnerResponse,
            PetsQuery, parse_id, present,
        },
    },
    error::{AppError, Result},
    infrastructure::db::{
        entities::user::Role,
        repositories::{PetRepository, UserRepository},
    },
    services::hints,
};

pub async fn create_pet(
    State(state): State<AppState>,
    JsonBody(params): JsonBody<NewPetParams>,
) -> Result<(StatusCode, Json<PetCreatedResponse>)> {
    let (Some(owner_id), Some(name), Some(kind)) = (
        present(params.owner_id.as_deref()),
        present(params.name.as_deref()),
        present(params.kind.as_deref()),
    ) else {
        return Err(AppError::MissingField(hints::PET_FIELDS_REQUIRED.into()));
    };

    let owner_id =
        parse_id(owner_id).ok_or_else(|| AppError::NotFound(hints::OWNER_NOT_FOUND.into()))?;

    let db_transaction = state.db.begin_transaction().await?;

    if UserRepository::find_user_by_id(&db_transaction, owner_id)
        .await?
        .is_none()
    {
        db_transaction.rollback().await?;
        return Err(AppError::NotFound(hints::OWNER_NOT_FOUND.into()));
    }

    let pet = PetRepository::create_pet(&db_transaction, owner_id, name, kind).await?;

    db_transaction.commit().await?;

    tracing::info!(pet_id = %pet.id, owner_id = %owner_id, "Pet created");

    Ok((
        StatusCode::CREATED,
        Json(PetCreatedResponse {
            message: hints::pet_created(&pet.name),
            pet_id: pet.id.to_string(),
        }),
    ))
}

pub async fn list_owner_pets(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<PetListResponse<PetResponse>>> {
    let db_connection = state.db.get_connection();

    let owner = match parse_id(&id) {
        Some(owner_id) => UserRepository::find_user_by_id(db_connection, owner_id).await?,
        None => None,
    }
    .ok_or_else(|| AppError::NotFound(hints::USER_NOT_FOUND.into()))?;

    let pets = PetRepository::list_pets_by_owner(db_connection, owner.id).await?;

    Ok(Json(PetListResponse {
        message: hints::OWNER_PETS.to_string(),
        pets: pets.into_iter().map(PetResponse::from).collect(),
    }))
}

/// Store-wide listing, open to admins only.
pub async fn list_all_pets(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<PetsQuery>,
) -> Result<Json<PetListResponse<PetWithOwnerResponse>>> {
    let user_id = present(query.user_id.as_deref())
        .ok_or_else(|| AppError::Unauthorized(hints::PETS_REQUIRE_USER_ID.into()))?;

    let db_connection = state.db.get_connection();

    let user = match parse_id(user_id) {
        Some(user_id) => UserRepository::find_user_by_id(db_connection, user_id).await?,
        None => None,
    }
    .ok_or_else(|| AppError::NotFound(hints::USER_NOT_FOUND.into()))?;

    if user.role != Role::Admin {
        tracing::debug!(user_id = %user.id, "Pet listing refused for non-admin");
        return Err(AppError::Forbidden(hints::PETS_FORBIDDEN.into()));
    }

    let pets = PetRepository::list_pets_with_owner(db_connection).await?;

    Ok(Json(PetListResponse {
        message: hints::ALL_PETS.to_string(),
        pets: pets.into_iter().map(PetWithOwnerResponse::from).collect(),
    }))
}

/// Deletion is never allowed; the store is not consulted.
pub async fn delete_pet(PathParam(id): PathParam<String>) -> AppError {
    tracing::info!(pet_id = %id, "Pet deletion refused");

    AppError::Forbidden(hints::delete_refused(&id))
}
