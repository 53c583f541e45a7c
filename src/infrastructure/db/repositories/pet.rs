use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::{
    error::Result,
    infrastructure::db::entities::{Pet, User, pet, user},
};

pub struct PetRepository;

impl PetRepository {
    pub async fn create_pet<C: ConnectionTrait>(
        db_connection: &C,
        owner_id: Uuid,
        name: &str,
        kind: &str,
    ) -> Result<pet::Model> {
        let pet = pet::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            name: Set(name.to_string()),
            kind: Set(kind.to_string()),
            created_at: Set(Utc::now()),
        };

        Ok(pet.insert(db_connection).await?)
    }

    pub async fn list_pets_by_owner<C: ConnectionTrait>(
        db_connection: &C,
        owner_id: Uuid,
    ) -> Result<Vec<pet::Model>> {
        Ok(Pet::find()
            .filter(pet::Column::OwnerId.eq(owner_id))
            .order_by_asc(pet::Column::CreatedAt)
            .all(db_connection)
            .await?)
    }

    /// Every pet in the store paired with its owner, if the owner still resolves.
    pub async fn list_pets_with_owner<C: ConnectionTrait>(
        db_connection: &C,
    ) -> Result<Vec<(pet::Model, Option<user::Model>)>> {
        Ok(Pet::find()
            .find_also_related(User)
            .order_by_asc(pet::Column::CreatedAt)
            .all(db_connection)
            .await?)
    }

    pub async fn count_pets<C: ConnectionTrait>(db_connection: &C) -> Result<u64> {
        Ok(Pet::find().count(db_connection).await?)
    }
}
