use anyhow::{Context, Result};
use dotenv::dotenv;
use shop_api::{
    config::{Config, ConnectionManager},
    handler::AppRouter,
    state::AppState,
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    init_logger("shop-api");

    let config = Config::init().context("Failed to load configuration")?;

    let pool = ConnectionManager::new_pool(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to create database connection pool")?;

    if config.run_migrations {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let state = AppState::new(pool, &config).context("Failed to create AppState")?;

    AppRouter::serve(&config, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down server");

    Ok(())
}
