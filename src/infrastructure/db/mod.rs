pub mod entities;
pub mod migrations;
pub mod repositories;

use sea_orm::{
    ConnectOptions, ConnectionTrait, DatabaseConnection, DatabaseTransaction, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;

use crate::{config::DatabaseConfig, error::Result};

use migrations::Migrator;

/// Shared handle to the quiz store. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    pub async fn init_db(config: &DatabaseConfig) -> Result<Self> {
        let mut options = ConnectOptions::new(&config.url);

        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(config.idle_timeout)
            .sqlx_logging(false);

        let connection = sea_orm::Database::connect(options).await?;

        tracing::info!(
            backend = ?connection.get_database_backend(),
            max_connections = config.max_connections,
            "Database pool ready"
        );

        Ok(Self { connection })
    }

    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }

    /// Used by pet creation so the owner check and the insert commit together.
    pub async fn begin_transaction(&self) -> Result<DatabaseTransaction> {
        Ok(self.connection.begin().await?)
    }

    /// Brings the `users` and `pets` tables up to date and returns how many
    /// migrations were applied.
    pub async fn run_migrations(&self) -> Result<usize> {
        let pending = Migrator::get_pending_migrations(&self.connection)
            .await?
            .len();

        if pending == 0 {
            tracing::debug!("Schema already up to date");
            return Ok(0);
        }

        Migrator::up(&self.connection, None).await?;
        tracing::info!(applied = pending, "Migrations applied");

        Ok(pending)
    }

    /// Closes the pool; every clone of the connection is closed with it.
    pub async fn close(&self) -> Result<()> {
        self.connection.clone().close().await?;
        tracing::info!("Database pool closed");

        Ok(())
    }
}
