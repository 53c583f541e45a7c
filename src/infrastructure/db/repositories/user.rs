use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    error::Result,
    infrastructure::db::entities::{
        User,
        user::{self, Role},
    },
};

pub struct NewUser {
    pub username: String,
    pub password: String,
    pub age: i32,
    pub code: String,
}

/// Fields a caller may overwrite on an existing user. `None` leaves the column untouched.
#[derive(Debug, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub role: Option<Role>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.age.is_none()
            && self.role.is_none()
    }
}

#[derive(Debug)]
pub struct AgeExtremes {
    pub max_age: i32,
    pub oldest: Vec<user::Model>,
    pub min_age: i32,
    pub youngest: Vec<user::Model>,
}

pub struct UserRepository;

impl UserRepository {
    pub async fn find_user_by_id<C: ConnectionTrait>(
        db_connection: &C,
        id: Uuid,
    ) -> Result<Option<user::Model>> {
        Ok(User::find_by_id(id).one(db_connection).await?)
    }

    pub async fn find_users_by_username<C: ConnectionTrait>(
        db_connection: &C,
        username: &str,
    ) -> Result<Vec<user::Model>> {
        Ok(User::find()
            .filter(user::Column::Username.eq(username))
            .order_by_asc(user::Column::CreatedAt)
            .all(db_connection)
            .await?)
    }

    pub async fn create_user<C: ConnectionTrait>(
        db_connection: &C,
        new_user: NewUser,
    ) -> Result<user::Model> {
        let user = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(new_user.username),
            password: Set(new_user.password),
            age: Set(new_user.age),
            code: Set(new_user.code),
            role: Set(Role::default()),
            created_at: Set(Utc::now()),
        };

        Ok(user.insert(db_connection).await?)
    }

    pub async fn update_user<C: ConnectionTrait>(
        db_connection: &C,
        existing: user::Model,
        changes: UserChanges,
    ) -> Result<user::Model> {
        if changes.is_empty() {
            return Ok(existing);
        }

        let mut user: user::ActiveModel = existing.into();

        if let Some(username) = changes.username {
            user.username = Set(username);
        }
        if let Some(password) = changes.password {
            user.password = Set(password);
        }
        if let Some(age) = changes.age {
            user.age = Set(age);
        }
        if let Some(role) = changes.role {
            user.role = Set(role);
        }

        Ok(user.update(db_connection).await?)
    }

    pub async fn count_users<C: ConnectionTrait>(db_connection: &C) -> Result<u64> {
        Ok(User::find().count(db_connection).await?)
    }

    /// Users sharing the highest and the lowest age. `None` when no user exists.
    pub async fn find_age_extremes<C: ConnectionTrait>(
        db_connection: &C,
    ) -> Result<Option<AgeExtremes>> {
        let Some(eldest) = User::find()
            .order_by_desc(user::Column::Age)
            .one(db_connection)
            .await?
        else {
            return Ok(None);
        };

        let Some(junior) = User::find()
            .order_by_asc(user::Column::Age)
            .one(db_connection)
            .await?
        else {
            return Ok(None);
        };

        let oldest = Self::find_users_by_age(db_connection, eldest.age).await?;
        let youngest = Self::find_users_by_age(db_connection, junior.age).await?;

        Ok(Some(AgeExtremes {
            max_age: eldest.age,
            oldest,
            min_age: junior.age,
            youngest,
        }))
    }

    async fn find_users_by_age<C: ConnectionTrait>(
        db_connection: &C,
        age: i32,
    ) -> Result<Vec<user::Model>> {
        Ok(User::find()
            .filter(user::Column::Age.eq(age))
            .order_by_asc(user::Column::CreatedAt)
            .all(db_connection)
            .await?)
    }
}
