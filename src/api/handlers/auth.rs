use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState,
    api::{
        extract::JsonBody,
        types::{LoginParams, MessageResponse, SignupParams, SignupResponse, present},
    },
    error::{AppError, Result},
    infrastructure::db::repositories::{NewUser, UserRepository},
    services::hints,
};

pub async fn signup(
    State(state): State<AppState>,
    JsonBody(params): JsonBody<SignupParams>,
) -> Result<(StatusCode, Json<SignupResponse>)> {
    let username = present(params.username.as_deref());
    let password = present(params.password.as_deref());
    let age = params.age.filter(|age| *age != 0);

    let (Some(username), Some(password), Some(age)) = (username, password, age) else {
        return Err(AppError::MissingField(hints::signup_missing_fields(
            params.password.as_deref().unwrap_or_default(),
        )));
    };

    let code = state.tokens.access_code();

    let user = UserRepository::create_user(
        state.db.get_connection(),
        NewUser {
            username: username.trim().to_string(),
            password: state.credentials.protect(password),
            age,
            code: code.clone(),
        },
    )
    .await?;

    tracing::info!(user_id = %user.id, "User signed up");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: hints::signup_created(&code),
            id: user.id.to_string(),
            code,
        }),
    ))
}

pub async fn login(
    State(state): State<AppState>,
    JsonBody(params): JsonBody<LoginParams>,
) -> Result<Json<MessageResponse>> {
    let auth_key = present(params.auth_key.as_deref())
        .ok_or_else(|| AppError::Unauthorized(hints::LOGIN_MISSING_AUTH_KEY.into()))?;

    let username = params.username.as_deref().map(str::trim).unwrap_or_default();
    let password = params.password.as_deref().unwrap_or_default();

    let candidates = if username.is_empty() {
        Vec::new()
    } else {
        UserRepository::find_users_by_username(state.db.get_connection(), username).await?
    };

    let user = candidates
        .into_iter()
        .find(|user| state.credentials.verify(&user.password, password))
        .ok_or_else(|| AppError::Unauthorized(hints::INVALID_CREDENTIALS.into()))?;

    if auth_key != user.code {
        tracing::debug!(user_id = %user.id, "Login rejected: wrong authentication key");
        return Err(AppError::Unauthorized(hints::INVALID_AUTH_KEY.into()));
    }

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(MessageResponse::new(hints::login_success(
        &state.tokens.shuffle(&user.code),
    ))))
}

/// Hands out a throwaway token; no session exists to end.
pub async fn logout(State(state): State<AppState>) -> Json<MessageResponse> {
    Json(MessageResponse::new(hints::logged_out(
        &state.tokens.access_code(),
    )))
}
