use sea_orm_migration::{MigrationTrait, MigratorTrait, async_trait::async_trait};

mod m20261019_000001_create_users;
mod m20261019_000002_create_pets;

pub struct Migrator;

#[async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261019_000001_create_users::Migration),
            Box::new(m20261019_000002_create_pets::Migration),
        ]
    }
}
