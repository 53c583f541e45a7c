use std::sync::Arc;

use quiz_api::{
    AppState, build_router,
    config::Config,
    error::Result,
    infrastructure::db::Database,
    services::{PlainTextCredentials, RandomTokens},
    utils::server::{init_tracing, shutdown_signal},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = Config::from_env()?;
    config.validate()?;
    tracing::info!("Configuration loaded");

    let db = Arc::new(Database::init_db(&config.database).await?);
    db.run_migrations().await?;

    let state = AppState {
        config: Arc::new(config.clone()),
        db: db.clone(),
        tokens: Arc::new(RandomTokens),
        credentials: Arc::new(PlainTextCredentials),
    };

    let app = build_router(state);

    let server_addr = format!("{}:{}", config.server.host, config.server.port);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!("Quiz API listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
