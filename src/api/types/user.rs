use serde::{Deserialize, Serialize};

use crate::infrastructure::db::entities::user::{self, Role};

#[derive(Debug, Deserialize)]
pub struct SignupParams {
    pub username: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct LoginParams {
    pub username: Option<String>,
    pub password: Option<String>,
    #[serde(rename = "authKey")]
    pub auth_key: Option<String>,
}

/// Fields accepted by the user update endpoint. Unknown keys are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateUserParams {
    pub username: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub id: String,
    pub code: String,
}

/// A user as exposed over the API; the password never leaves the store.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub age: i32,
    pub code: String,
    pub role: Role,
}

impl From<user::Model> for UserResponse {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username,
            age: user.age,
            code: user.code,
            role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserProfileResponse {
    pub user: UserResponse,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct UserUpdatedResponse {
    pub message: String,
    pub user: UserResponse,
}
