use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::{
    AppState,
    api::{
        extract::{JsonBody, PathParam},
        types::{
            MessageResponse, UpdateUserParams, UserProfileResponse, UserResponse,
            UserUpdatedResponse, parse_id, present,
        },
    },
    error::{AppError, Result},
    infrastructure::db::{
        entities::user::Role,
        repositories::{UserChanges, UserRepository},
    },
    services::hints,
};

pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
) -> Result<Json<UserProfileResponse>> {
    let user = match parse_id(&id) {
        Some(user_id) => {
            UserRepository::find_user_by_id(state.db.get_connection(), user_id).await?
        }
        None => None,
    }
    .ok_or_else(|| AppError::NotFound(hints::USER_NOT_FOUND.into()))?;

    Ok(Json(UserProfileResponse {
        user: UserResponse::from(user),
        message: hints::USER_PROFILE.to_string(),
    }))
}

/// Applies every supplied field in one write. The reply depends on what changed:
/// a username change wins over a role change, and anything else gets the plain
/// success body with the updated record.
pub async fn update_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<String>,
    JsonBody(updates): JsonBody<Map<String, Value>>,
) -> Result<Response> {
    if updates.is_empty() {
        return Err(AppError::MissingField(hints::EMPTY_UPDATE.into()));
    }

    let params: UpdateUserParams =
        serde_json::from_value(Value::Object(updates)).map_err(|_| AppError::InvalidBody)?;

    let db_connection = state.db.get_connection();

    let existing = match parse_id(&id) {
        Some(user_id) => UserRepository::find_user_by_id(db_connection, user_id).await?,
        None => None,
    }
    .ok_or_else(|| AppError::NotFound(hints::USER_NOT_FOUND.into()))?;

    let role = params
        .role
        .as_deref()
        .map(|raw| {
            Role::parse(raw).ok_or_else(|| AppError::InvalidValue(hints::INVALID_ROLE.into()))
        })
        .transpose()?;

    let changes = UserChanges {
        username: present(params.username.as_deref()).map(|name| name.trim().to_string()),
        password: present(params.password.as_deref())
            .map(|password| state.credentials.protect(password)),
        age: params.age,
        role,
    };

    let username_changed = changes.username.is_some();
    let role_changed = changes.role.is_some();

    let user = UserRepository::update_user(db_connection, existing, changes).await?;

    if username_changed {
        tracing::info!(user_id = %user.id, "Username changed");

        let message = hints::username_updated(&user.username, &state.tokens.shuffle(&user.code));
        return Ok(Json(MessageResponse::new(message)).into_response());
    }

    if role_changed {
        tracing::info!(user_id = %user.id, role = user.role.as_str(), "Role changed");

        let message = hints::role_updated(user.role.as_str());
        return Ok(Json(MessageResponse::new(message)).into_response());
    }

    Ok(Json(UserUpdatedResponse {
        message: hints::USER_UPDATED.to_string(),
        user: UserResponse::from(user),
    })
    .into_response())
}
