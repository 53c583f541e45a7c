use serde::{Deserialize, Serialize};

use crate::infrastructure::db::entities::{pet, user};

#[derive(Debug, Deserialize)]
pub struct NewPetParams {
    #[serde(rename = "ownerId")]
    pub owner_id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PetsQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PetCreatedResponse {
    pub message: String,
    #[serde(rename = "petId")]
    pub pet_id: String,
}

#[derive(Debug, Serialize)]
pub struct PetResponse {
    pub id: String,
    pub owner: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<pet::Model> for PetResponse {
    fn from(pet: pet::Model) -> Self {
        Self {
            id: pet.id.to_string(),
            owner: pet.owner_id.to_string(),
            name: pet.name,
            kind: pet.kind,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OwnerSummary {
    pub id: String,
    pub username: String,
}

/// A pet with its owner's username attached. `owner` is null when the owner no
/// longer resolves.
#[derive(Debug, Serialize)]
pub struct PetWithOwnerResponse {
    pub id: String,
    pub owner: Option<OwnerSummary>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<(pet::Model, Option<user::Model>)> for PetWithOwnerResponse {
    fn from((pet, owner): (pet::Model, Option<user::Model>)) -> Self {
        Self {
            id: pet.id.to_string(),
            owner: owner.map(|owner| OwnerSummary {
                id: owner.id.to_string(),
                username: owner.username,
            }),
            name: pet.name,
            kind: pet.kind,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PetListResponse<T: Serialize> {
    pub message: String,
    pub pets: Vec<T>,
}
